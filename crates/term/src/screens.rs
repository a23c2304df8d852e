//! Screen text: maps results and records into printable lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::types::LessonRecord;

/// Separator printed under each entry of the stats screen.
pub const STATS_SEPARATOR: &str = "---------------------------------";

pub const TYPING_CUE: &str = "Try this:";

pub const EXIT_NOTICE: &str = "Exiting lesson ...";

pub const LESSON_HINT: &str = "Type each line and press RETURN. Press ESC to leave the lesson.";

pub const ALL_COMPLETE_TITLE: &str = "Congratulations! You have completed all the lessons";

pub const MENU_HINT: &str =
    "Press RETURN to redo the typing practice, SPACE to view lesson stats and ESC to quit";

/// Colours used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title: Color,
    pub sentence: Color,
    pub mismatch: Color,
    pub success: Color,
    pub hint: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            title: Color::Cyan,
            sentence: Color::White,
            mismatch: Color::Red,
            success: Color::Green,
            hint: Color::DarkGrey,
        }
    }
}

/// Two-line completion message.
pub fn completion_lines(title: &str, wpm: f64) -> [String; 2] {
    [
        format!("Congratulations! You have completed lesson {}", title),
        format!("Your typing speed is: {:.2} WPM", wpm),
    ]
}

/// Lines of the stats screen, one block per lesson.
pub fn stats_lines(records: &[LessonRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![String::from("No lessons completed yet.")];
    }

    let mut lines = Vec::with_capacity(records.len() * 4);
    for record in records {
        lines.push(String::new());
        lines.push(format!("Lesson Title: {}", record.title));
        lines.push(format!("Typing Speed: {:.2} WPM", record.best_speed));
        lines.push(STATS_SEPARATOR.to_string());
    }
    lines
}
