//! Keystroke evaluator - per-sentence state machine
//!
//! One evaluator lives for one sentence. It accepts decoded keys until the
//! sentence is finished:
//!
//! | Key | Effect | Next state |
//! |-----|--------|------------|
//! | Enter | stop input | `SentenceDone` |
//! | Escape | abandon the lesson | `LessonExited` |
//! | Space / printable char | append and echo | `AwaitingKey` |
//! | any other named key | ignored | `AwaitingKey` |
//! | read error ([`SentenceEvaluator::interrupt`]) | stop input | `SentenceDone` |
//!
//! The appended character is compared against the sentence character at the
//! same index. Once more characters have been typed than the sentence holds,
//! the sentence is finished and that last character is not echoed, so the
//! target is never indexed past its end.

use crate::types::{Echo, KeyInput};

/// Evaluator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalState {
    AwaitingKey,
    SentenceDone,
    LessonExited,
}

/// What one key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub state: EvalState,
    /// Character appended to the typed text, including an overflow character.
    pub typed: Option<char>,
    /// What to render; `None` for control keys and overflow.
    pub echo: Option<Echo>,
}

impl Step {
    fn idle(state: EvalState) -> Self {
        Self {
            state,
            typed: None,
            echo: None,
        }
    }
}

/// Keystroke state for a single sentence.
#[derive(Debug, Clone)]
pub struct SentenceEvaluator {
    target: Vec<char>,
    typed: Vec<char>,
    state: EvalState,
}

impl SentenceEvaluator {
    pub fn new(sentence: &str) -> Self {
        Self {
            target: sentence.chars().collect(),
            typed: Vec::with_capacity(sentence.len() + 1),
            state: EvalState::AwaitingKey,
        }
    }

    pub fn state(&self) -> EvalState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state != EvalState::AwaitingKey
    }

    /// Characters typed for this sentence so far.
    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    pub fn typed_text(&self) -> String {
        self.typed.iter().collect()
    }

    /// Current position within the target sentence.
    pub fn position(&self) -> usize {
        self.typed.len()
    }

    /// Apply one key. Keys fed after the sentence finished are ignored.
    pub fn feed(&mut self, key: KeyInput) -> Step {
        if self.is_finished() {
            return Step::idle(self.state);
        }

        match key {
            KeyInput::Enter => {
                self.state = EvalState::SentenceDone;
                Step::idle(self.state)
            }
            KeyInput::Escape => {
                self.state = EvalState::LessonExited;
                Step::idle(self.state)
            }
            KeyInput::Other => Step::idle(self.state),
            KeyInput::Space => self.push(' '),
            KeyInput::Char(ch) => self.push(ch),
        }
    }

    /// Stop accepting input after a read error. Not an exit.
    pub fn interrupt(&mut self) -> Step {
        if !self.is_finished() {
            self.state = EvalState::SentenceDone;
        }
        Step::idle(self.state)
    }

    fn push(&mut self, ch: char) -> Step {
        self.typed.push(ch);

        if self.typed.len() > self.target.len() {
            self.state = EvalState::SentenceDone;
            return Step {
                state: self.state,
                typed: Some(ch),
                echo: None,
            };
        }

        let index = self.typed.len() - 1;
        let echo = match self.target.get(index) {
            Some(&expected) if expected == ch => Echo::Match(ch),
            _ => Echo::Mismatch,
        };

        Step {
            state: self.state,
            typed: Some(ch),
            echo: Some(echo),
        }
    }
}
