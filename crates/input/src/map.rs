//! Key mapping from terminal events to ship controls.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a single key press asks the ship to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Steer(Direction),
    Fire,
}

/// Map keyboard input to a control.
pub fn handle_key_event(key: KeyEvent) -> Option<ControlKey> {
    let steer = |d| Some(ControlKey::Steer(d));
    match key.code {
        // Orthogonal
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            steer(Direction::North)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            steer(Direction::South)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            steer(Direction::West)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            steer(Direction::East)
        }

        // Diagonals
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Home => steer(Direction::NorthWest),
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::PageUp => steer(Direction::NorthEast),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::End => steer(Direction::SouthWest),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::PageDown => steer(Direction::SouthEast),

        // Weapons
        KeyCode::Char(' ') => Some(ControlKey::Fire),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
