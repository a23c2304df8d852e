//! Terminal restore on panic.
//!
//! Release builds abort on panic, so the keyboard guard's `Drop` never runs.
//! The hook puts the terminal back before the default report is printed.

use std::io;
use std::panic;

use crossterm::{cursor, execute, terminal};

/// Leave raw mode and show the cursor. Errors are ignored.
pub fn restore_terminal() {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(io::stdout(), cursor::Show);
}

/// Chain a terminal restore in front of the current panic hook.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}
