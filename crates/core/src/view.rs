//! Output seams for the session engine and the menu.
//!
//! Terminal rendering lives in `tui-typist-term`; the engine only decides
//! *what* to show.

use std::io;

use crate::types::{Echo, LessonRecord};

/// Everything a lesson session puts on screen.
pub trait SessionView {
    /// Lesson welcome screen.
    fn lesson_intro(&mut self, title: &str) -> io::Result<()>;
    /// "Try this:" cue shown before the pacing delay.
    fn typing_cue(&mut self) -> io::Result<()>;
    fn sentence(&mut self, sentence: &str) -> io::Result<()>;
    fn echo(&mut self, echo: Echo) -> io::Result<()>;
    fn lesson_exited(&mut self) -> io::Result<()>;
    fn lesson_completed(&mut self, title: &str, wpm: f64) -> io::Result<()>;
}

/// Screens of the top-level menu.
pub trait MenuView {
    fn all_lessons_complete(&mut self) -> io::Result<()>;
    fn lesson_stats(&mut self, records: &[LessonRecord]) -> io::Result<()>;
}
