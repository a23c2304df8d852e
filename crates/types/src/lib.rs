//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (session engine, terminal rendering, persistence).
//!
//! # Speed Convention
//!
//! Typing speed is reported in words per minute (WPM) using the standard
//! typing-test convention: every [`CHARS_PER_WORD`] typed characters count as
//! one word, spaces included.
//!
//! # Pacing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PRE_LESSON_DELAY_MS` | 1000 | Pause after the "Try this:" cue, before timing starts |
//! | `POST_LESSON_DELAY_MS` | 3000 | Pause after a completed lesson, before the next one |
//!
//! Neither pause is part of the measured typing time.
//!
//! # Examples
//!
//! ```
//! use tui_typist_types::{BestSpeedPolicy, KeyInput, Lesson};
//!
//! let lesson = Lesson::new("home_row", vec!["asdf jkl;".to_string()]);
//! assert_eq!(lesson.sentence_count(), 1);
//!
//! // Space is its own key, not a printable char.
//! assert_eq!(KeyInput::from_char(' '), KeyInput::Space);
//! assert_eq!(KeyInput::from_char('a'), KeyInput::Char('a'));
//!
//! // Policies parse case-insensitively.
//! assert_eq!(BestSpeedPolicy::from_str("keep-best"), Some(BestSpeedPolicy::KeepBest));
//! ```

/// Characters that make up one "word" for WPM purposes.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Marker echoed for a mistyped character.
pub const MISMATCH_MARKER: char = '^';

/// Pause after the typing cue, before the first sentence is shown.
pub const PRE_LESSON_DELAY_MS: u64 = 1000;

/// Pause after a lesson is completed and persisted.
pub const POST_LESSON_DELAY_MS: u64 = 3000;


/// A named unit of typing practice
///
/// The title is derived from the lesson file name (without extension) and
/// is the key under which progress is stored. Sentences never change once
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub title: String,
    pub sentences: Vec<String>,
}

impl Lesson {
    pub fn new(title: impl Into<String>, sentences: Vec<String>) -> Self {
        Self {
            title: title.into(),
            sentences,
        }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Persisted progress for one lesson
#[derive(Debug, Clone, PartialEq)]
pub struct LessonRecord {
    pub title: String,
    /// Best speed in WPM, as decided by the active [`BestSpeedPolicy`].
    pub best_speed: f64,
    /// Speed of the most recent completion in WPM.
    pub current_speed: f64,
    pub completed: bool,
}

impl LessonRecord {
    pub fn completed(title: impl Into<String>, current_speed: f64, best_speed: f64) -> Self {
        Self {
            title: title.into(),
            best_speed,
            current_speed,
            completed: true,
        }
    }
}

/// A single decoded key press
///
/// Keyboard backends reduce their native events to this enum so the
/// session engine stays independent of any terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// A printable character other than space
    Char(char),
    /// The space bar
    Space,
    /// Return / Enter: finish the current sentence
    Enter,
    /// Escape: leave the lesson
    Escape,
    /// Any other named key (arrows, backspace, function keys, ...)
    Other,
}

impl KeyInput {
    /// Classify a raw character
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_typist_types::KeyInput;
    ///
    /// assert_eq!(KeyInput::from_char('q'), KeyInput::Char('q'));
    /// assert_eq!(KeyInput::from_char('\r'), KeyInput::Enter);
    /// assert_eq!(KeyInput::from_char('\t'), KeyInput::Other);
    /// ```
    pub fn from_char(c: char) -> Self {
        match c {
            ' ' => KeyInput::Space,
            '\r' | '\n' => KeyInput::Enter,
            '\u{1b}' => KeyInput::Escape,
            c if c.is_control() => KeyInput::Other,
            c => KeyInput::Char(c),
        }
    }

    /// The character this key appends to typed text, if any.
    pub fn typed_char(&self) -> Option<char> {
        match self {
            KeyInput::Char(c) => Some(*c),
            KeyInput::Space => Some(' '),
            KeyInput::Enter | KeyInput::Escape | KeyInput::Other => None,
        }
    }
}

/// Render decision for one typed character
///
/// - **Match**: echo the character as typed
/// - **Mismatch**: echo [`MISMATCH_MARKER`] instead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    Match(char),
    Mismatch,
}

impl Echo {
    /// The character to put on screen.
    pub fn glyph(&self) -> char {
        match self {
            Echo::Match(c) => *c,
            Echo::Mismatch => MISMATCH_MARKER,
        }
    }
}

/// Result of one lesson session
///
/// `best_speed` and `current_speed` carry the same freshly computed value;
/// merging with a previously stored best happens when the result is
/// persisted (see [`BestSpeedPolicy`]). Both are zero when `exited` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionResult {
    pub best_speed: f64,
    pub current_speed: f64,
    pub exited: bool,
}

impl SessionResult {
    pub fn completed(wpm: f64) -> Self {
        Self {
            best_speed: wpm,
            current_speed: wpm,
            exited: false,
        }
    }

    pub fn exited() -> Self {
        Self {
            best_speed: 0.0,
            current_speed: 0.0,
            exited: true,
        }
    }
}

/// Outcome of a multi-lesson run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every lesson in the run finished (or was already complete)
    Completed,
    /// The user pressed Escape during a lesson
    Interrupted,
}

/// How a new completion updates the stored best speed
///
/// - **Latest**: best speed is overwritten by the newest result
/// - **KeepBest**: best speed is the maximum over all completions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BestSpeedPolicy {
    #[default]
    Latest,
    KeepBest,
}

impl BestSpeedPolicy {
    /// Parse policy from string (case-insensitive)
    ///
    /// Accepts "latest" | "last", "keep-best" | "keep_best" | "best" | "max".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "latest" | "last" => Some(BestSpeedPolicy::Latest),
            "keep-best" | "keep_best" | "best" | "max" => Some(BestSpeedPolicy::KeepBest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BestSpeedPolicy::Latest => "latest",
            BestSpeedPolicy::KeepBest => "keep-best",
        }
    }

    /// Best speed to store given the previous best (if any) and a new result.
    pub fn merge(&self, previous_best: Option<f64>, new_speed: f64) -> f64 {
        match (self, previous_best) {
            (BestSpeedPolicy::KeepBest, Some(prev)) => prev.max(new_speed),
            _ => new_speed,
        }
    }
}
