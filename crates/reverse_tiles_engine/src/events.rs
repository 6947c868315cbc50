//! Game events for presentation layers.

use crate::state::GameState;
use crate::types::Direction;
use serde::{Deserialize, Serialize};

/// Something that happened to a game, reported together with the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Board created and first tile spawned.
    Started,
    /// A move was applied.
    Moved(Direction),
    /// A move was requested but nothing slid.
    Rejected(Direction),
    /// A tile reached 2.
    Won,
    /// No moves remain.
    Lost,
    /// The solver stopped at its move cap.
    MoveLimitReached,
    /// The player asked to stop.
    Quit,
}

/// Receives every board state the drivers produce.
pub trait GameObserver {
    /// Called once per event with the state after it.
    fn on_event(&mut self, state: &GameState, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameState, &GameEvent),
{
    fn on_event(&mut self, state: &GameState, event: &GameEvent) {
        self(state, event)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn on_event(&mut self, _state: &GameState, _event: &GameEvent) {}
}
