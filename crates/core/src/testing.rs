//! In-memory doubles for the keyboard and the view.
//!
//! Used by unit tests here, by integration tests of the whole app, and by
//! the benches.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::clock::ManualClock;
use crate::error::{DeviceError, ReadError};
use crate::keyboard::{KeyReader, KeySource};
use crate::types::{Echo, KeyInput, LessonRecord};
use crate::view::{MenuView, SessionView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scripted {
    Key(KeyInput),
    Fail,
}

/// Keyboard that replays a fixed script of keys.
///
/// When the script runs out, reads fail as if the device was closed.
#[derive(Debug, Default)]
pub struct ScriptedKeyboard {
    script: VecDeque<Scripted>,
    clock: Option<(ManualClock, Duration)>,
    fail_open: bool,
    open: bool,
    opens: usize,
}

impl ScriptedKeyboard {
    pub fn new(keys: impl IntoIterator<Item = KeyInput>) -> Self {
        Self {
            script: keys.into_iter().map(Scripted::Key).collect(),
            ..Self::default()
        }
    }

    /// Script from text: `'\r'` is Enter, `'\u{1b}'` is Escape, `' '` is Space.
    pub fn from_str(keys: &str) -> Self {
        Self::new(keys.chars().map(KeyInput::from_char))
    }

    /// Advance `clock` by `per_key` on every key read.
    pub fn with_clock(mut self, clock: ManualClock, per_key: Duration) -> Self {
        self.clock = Some((clock, per_key));
        self
    }

    /// Make `open` fail with a device error.
    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn push_keys(&mut self, keys: &str) {
        self.script
            .extend(keys.chars().map(|c| Scripted::Key(KeyInput::from_char(c))));
    }

    /// Queue a single read failure.
    pub fn push_failure(&mut self) {
        self.script.push_back(Scripted::Fail);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn opens(&self) -> usize {
        self.opens
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl KeySource for ScriptedKeyboard {
    type Reader<'a> = ScriptedReader<'a>;

    fn open(&mut self) -> Result<Self::Reader<'_>, DeviceError> {
        if self.fail_open {
            return Err(DeviceError(io::Error::new(
                io::ErrorKind::NotFound,
                "no keyboard attached",
            )));
        }
        self.open = true;
        self.opens += 1;
        Ok(ScriptedReader { keyboard: self })
    }
}

/// Open handle on a [`ScriptedKeyboard`].
#[derive(Debug)]
pub struct ScriptedReader<'a> {
    keyboard: &'a mut ScriptedKeyboard,
}

impl KeyReader for ScriptedReader<'_> {
    fn read_key(&mut self) -> Result<KeyInput, ReadError> {
        let next = self.keyboard.script.pop_front();
        if let Some((clock, per_key)) = &self.keyboard.clock {
            clock.advance(*per_key);
        }
        match next {
            Some(Scripted::Key(key)) => Ok(key),
            Some(Scripted::Fail) => Err(ReadError(io::Error::other("scripted read failure"))),
            None => Err(ReadError::closed()),
        }
    }
}

impl Drop for ScriptedReader<'_> {
    fn drop(&mut self) {
        self.keyboard.open = false;
    }
}

/// Everything a view was asked to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Intro(String),
    Cue,
    Sentence(String),
    Echo(Echo),
    Exited,
    Completed { title: String, wpm: f64 },
    AllComplete,
    Stats(Vec<LessonRecord>),
}

/// View that records calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intros(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Intro(title) => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn sentences(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Sentence(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Echoed glyphs concatenated (`^` for mismatches).
    pub fn echoes(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Echo(echo) => Some(echo.glyph()),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> Vec<(String, f64)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Completed { title, wpm } => Some((title.clone(), *wpm)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, event: &ViewEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl SessionView for RecordingView {
    fn lesson_intro(&mut self, title: &str) -> io::Result<()> {
        self.events.push(ViewEvent::Intro(title.to_string()));
        Ok(())
    }

    fn typing_cue(&mut self) -> io::Result<()> {
        self.events.push(ViewEvent::Cue);
        Ok(())
    }

    fn sentence(&mut self, sentence: &str) -> io::Result<()> {
        self.events.push(ViewEvent::Sentence(sentence.to_string()));
        Ok(())
    }

    fn echo(&mut self, echo: Echo) -> io::Result<()> {
        self.events.push(ViewEvent::Echo(echo));
        Ok(())
    }

    fn lesson_exited(&mut self) -> io::Result<()> {
        self.events.push(ViewEvent::Exited);
        Ok(())
    }

    fn lesson_completed(&mut self, title: &str, wpm: f64) -> io::Result<()> {
        self.events.push(ViewEvent::Completed {
            title: title.to_string(),
            wpm,
        });
        Ok(())
    }
}

impl MenuView for RecordingView {
    fn all_lessons_complete(&mut self) -> io::Result<()> {
        self.events.push(ViewEvent::AllComplete);
        Ok(())
    }

    fn lesson_stats(&mut self, records: &[LessonRecord]) -> io::Result<()> {
        self.events.push(ViewEvent::Stats(records.to_vec()));
        Ok(())
    }
}
