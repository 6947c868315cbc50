//! Key mapping for manual play.

use crossterm::event::KeyCode;
use reverse_tiles_engine::{Direction, PlayerInput};

/// Maps a key to a player input: w/a/s/d or arrows move, q or Esc quits.
pub fn input_for_key(key: KeyCode) -> Option<PlayerInput> {
    match key {
        KeyCode::Up => Some(PlayerInput::Move(Direction::Up)),
        KeyCode::Down => Some(PlayerInput::Move(Direction::Down)),
        KeyCode::Left => Some(PlayerInput::Move(Direction::Left)),
        KeyCode::Right => Some(PlayerInput::Move(Direction::Right)),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(PlayerInput::Quit),
        KeyCode::Char(c) => Direction::from_wasd(c).map(PlayerInput::Move),
        _ => None,
    }
}
