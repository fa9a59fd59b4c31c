//! Keyboard input mapping.

use crossterm::event::KeyCode;
use tilefold_core::Direction;

/// Maps a key press to a move direction.
///
/// Arrow keys map to their directions; every other key is ignored.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}
