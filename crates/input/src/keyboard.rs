//! Raw-mode keyboard backed by crossterm.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::{debug, trace};

use tui_typist_core::{DeviceError, KeyReader, KeySource, ReadError};

use crate::map::map_key_event;
use crate::types::KeyInput;

/// The process' terminal keyboard.
#[derive(Debug, Default)]
pub struct CrosstermKeyboard {
    _private: (),
}

impl CrosstermKeyboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for CrosstermKeyboard {
    type Reader<'a> = CrosstermReader<'a>;

    fn open(&mut self) -> Result<Self::Reader<'_>, DeviceError> {
        terminal::enable_raw_mode()?;
        debug!("keyboard opened (raw mode on)");
        Ok(CrosstermReader { _keyboard: self })
    }
}

/// Open keyboard. Raw mode stays on until this is dropped.
#[derive(Debug)]
pub struct CrosstermReader<'a> {
    _keyboard: &'a mut CrosstermKeyboard,
}

impl CrosstermReader<'_> {
    fn next_press() -> io::Result<KeyInput> {
        loop {
            match event::read()? {
                // Windows reports releases; Unix terminals only send presses.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    trace!(?key, "key press");
                    return Ok(map_key_event(key));
                }
                _ => continue,
            }
        }
    }
}

impl KeyReader for CrosstermReader<'_> {
    fn read_key(&mut self) -> Result<KeyInput, ReadError> {
        Ok(Self::next_press()?)
    }
}

impl Drop for CrosstermReader<'_> {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = terminal::disable_raw_mode();
        debug!("keyboard closed (raw mode off)");
    }
}
