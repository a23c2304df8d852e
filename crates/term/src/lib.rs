//! Terminal rendering for the typing tutor.
//!
//! Screen text is built by the pure [`screens`] module; [`renderer`] writes it
//! to a terminal (or any `Write`) with crossterm commands and implements the
//! engine's view traits.
//!
//! Output always uses `\r\n` line endings because the keyboard keeps the
//! terminal in raw mode while a lesson or the menu is reading keys.

pub mod renderer;
pub mod screens;

pub use tui_typist_core as core;
pub use tui_typist_types as types;

pub use renderer::TerminalRenderer;
pub use screens::{completion_lines, stats_lines, Palette};
