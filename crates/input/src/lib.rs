//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::KeyInput`] and provides a
//! raw-mode keyboard implementing [`tui_typist_core::KeySource`]. Opening the
//! keyboard enables raw mode; dropping the reader restores the terminal.

pub mod keyboard;
pub mod map;

pub use tui_typist_types as types;

pub use keyboard::{CrosstermKeyboard, CrosstermReader};
pub use map::{is_interrupt, map_key_event};
