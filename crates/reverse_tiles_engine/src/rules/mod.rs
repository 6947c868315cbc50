//! Game rules for the reverse tile puzzle.
//!
//! Pure functions over an explicit [`Board`](crate::Board). Manual play and
//! the solver both go through these, so the rules live in one place.

pub mod slide;
pub mod spawn;
pub mod status;

pub use slide::{apply_move, merge_line};
pub use spawn::spawn_tile;
pub use status::{can_move, check_win, is_terminal};
