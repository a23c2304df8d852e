//! Key bindings of the "all lessons complete" screen.

use crate::types::KeyInput;

/// Actions offered once every lesson is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Clear all completions and start over
    Redo,
    /// Print best speed of every lesson
    ShowStats,
    Quit,
}

/// Map a key on the menu screen. Unbound keys return `None`.
pub fn menu_action(key: KeyInput) -> Option<MenuAction> {
    match key {
        KeyInput::Enter => Some(MenuAction::Redo),
        KeyInput::Space => Some(MenuAction::ShowStats),
        KeyInput::Escape => Some(MenuAction::Quit),
        KeyInput::Char(_) | KeyInput::Other => None,
    }
}
