//! TerminalRenderer: writes lesson and menu screens to a terminal.
//!
//! Output is queued with crossterm commands and flushed once per call, so a
//! screen appears as a whole. The writer is generic to allow rendering into a
//! buffer in tests.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{MenuView, SessionView};
use crate::screens::{
    completion_lines, stats_lines, Palette, ALL_COMPLETE_TITLE, EXIT_NOTICE, LESSON_HINT,
    MENU_HINT, TYPING_CUE,
};
use crate::types::{Echo, LessonRecord};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    palette: Palette,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clear the screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.flush()
    }

    /// Leave the terminal in a sane state before exiting.
    pub fn restore(&mut self) -> io::Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(cursor::Show)?;
        self.out.queue(Print("\r\n"))?;
        self.out.flush()
    }

    fn queue_line(&mut self, text: &str, color: Option<Color>) -> io::Result<()> {
        if let Some(color) = color {
            self.out.queue(SetForegroundColor(color))?;
        }
        self.out.queue(Print(text))?;
        if color.is_some() {
            self.out.queue(ResetColor)?;
        }
        self.out.queue(Print("\r\n"))?;
        Ok(())
    }

    fn blank(&mut self) -> io::Result<()> {
        self.out.queue(Print("\r\n"))?;
        Ok(())
    }
}

impl<W: Write> SessionView for TerminalRenderer<W> {
    fn lesson_intro(&mut self, title: &str) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(SetAttribute(Attribute::Bold))?;
        self.queue_line(&format!("Lesson: {}", title), Some(self.palette.title))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.queue_line(LESSON_HINT, Some(self.palette.hint))?;
        self.blank()?;
        self.out.flush()
    }

    fn typing_cue(&mut self) -> io::Result<()> {
        self.queue_line(TYPING_CUE, None)?;
        self.out.flush()
    }

    fn sentence(&mut self, sentence: &str) -> io::Result<()> {
        self.blank()?;
        self.blank()?;
        self.queue_line(sentence, Some(self.palette.sentence))?;
        self.out.flush()
    }

    fn echo(&mut self, echo: Echo) -> io::Result<()> {
        match echo {
            Echo::Match(ch) => {
                self.out.queue(Print(ch))?;
            }
            Echo::Mismatch => {
                self.out.queue(SetForegroundColor(self.palette.mismatch))?;
                self.out.queue(Print(echo.glyph()))?;
                self.out.queue(ResetColor)?;
            }
        }
        self.out.flush()
    }

    fn lesson_exited(&mut self) -> io::Result<()> {
        self.blank()?;
        self.blank()?;
        self.queue_line(EXIT_NOTICE, Some(self.palette.hint))?;
        self.out.flush()
    }

    fn lesson_completed(&mut self, title: &str, wpm: f64) -> io::Result<()> {
        self.blank()?;
        self.blank()?;
        let [done, speed] = completion_lines(title, wpm);
        self.queue_line(&done, Some(self.palette.success))?;
        self.queue_line(&speed, None)?;
        self.out.flush()
    }
}

impl<W: Write> MenuView for TerminalRenderer<W> {
    fn all_lessons_complete(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.blank()?;
        self.queue_line(ALL_COMPLETE_TITLE, Some(self.palette.success))?;
        self.blank()?;
        self.queue_line(MENU_HINT, Some(self.palette.hint))?;
        self.out.flush()
    }

    fn lesson_stats(&mut self, records: &[LessonRecord]) -> io::Result<()> {
        for line in stats_lines(records) {
            self.queue_line(&line, None)?;
        }
        self.out.flush()
    }
}
