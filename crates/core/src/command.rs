//! Keyboard command mapping.

use crate::navigate::Movement;

/// A deck-level command produced from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckCommand {
    /// Move between slides.
    Move(Movement),
    /// Toggle inverted colors.
    ToggleInvert,
    /// Toggle the print view.
    TogglePrint,
    /// Toggle the inline editor.
    ToggleEditor,
}

/// Maps a keyboard event code to a deck command.
///
/// Forward keys (ArrowRight, ArrowDown, Space) move back when shift is held;
/// backward keys (ArrowLeft, ArrowUp) move forward when shift is held.
/// Unmapped codes yield `None` so the embedding layer can let the event
/// propagate.
pub fn command_for_key(code: &str, shift: bool) -> Option<DeckCommand> {
    match code {
        "ArrowRight" | "ArrowDown" | "Space" => {
            let movement = if shift { Movement::Prev } else { Movement::Next };
            Some(DeckCommand::Move(movement))
        }
        "ArrowLeft" | "ArrowUp" => {
            let movement = if shift { Movement::Next } else { Movement::Prev };
            Some(DeckCommand::Move(movement))
        }
        "Home" => Some(DeckCommand::Move(Movement::First)),
        "End" => Some(DeckCommand::Move(Movement::Last)),
        "KeyI" | "KeyD" => Some(DeckCommand::ToggleInvert),
        "KeyP" => Some(DeckCommand::TogglePrint),
        "KeyE" => Some(DeckCommand::ToggleEditor),
        _ => None,
    }
}
