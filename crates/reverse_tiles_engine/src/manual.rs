//! Manual play driver.
//!
//! The interactive front end supplies inputs through [`Controller`]; this
//! module owns the loop so the rules stay out of the presentation layer.

use crate::events::{GameEvent, GameObserver};
use crate::random::TileSource;
use crate::state::{GameState, GameStatus, MoveOutcome};
use crate::types::Direction;
use tracing::{debug, info, instrument};

/// An input event from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Slide tiles.
    Move(Direction),
    /// Leave the game.
    Quit,
}

/// Source of player inputs that also observes the game.
pub trait Controller: GameObserver {
    /// Error raised while reading input.
    type Error;

    /// Blocks until the player chooses an input.
    fn next_input(&mut self, state: &GameState) -> Result<PlayerInput, Self::Error>;
}

/// How a manual game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A tile reached 2.
    Won,
    /// No moves remain.
    Lost,
    /// The player quit.
    Quit,
}

/// Runs a manual game until it is won, lost or the player quits.
///
/// Moves that slide nothing are reported as [`GameEvent::Rejected`] and do
/// not consume a turn.
#[instrument(skip_all, fields(moves = state.moves()))]
pub fn play_manual<C, S>(
    state: &mut GameState,
    controller: &mut C,
    source: &mut S,
) -> Result<PlayOutcome, C::Error>
where
    C: Controller + ?Sized,
    S: TileSource + ?Sized,
{
    controller.on_event(state, &GameEvent::Started);

    loop {
        match state.status() {
            GameStatus::Won => {
                info!(moves = state.moves(), "Player won");
                controller.on_event(state, &GameEvent::Won);
                return Ok(PlayOutcome::Won);
            }
            GameStatus::Lost => {
                info!(moves = state.moves(), "No moves left");
                controller.on_event(state, &GameEvent::Lost);
                return Ok(PlayOutcome::Lost);
            }
            GameStatus::InProgress => {}
        }

        match controller.next_input(state)? {
            PlayerInput::Quit => {
                info!(moves = state.moves(), "Player quit");
                controller.on_event(state, &GameEvent::Quit);
                return Ok(PlayOutcome::Quit);
            }
            PlayerInput::Move(direction) => match state.apply(direction, source) {
                MoveOutcome::Applied => {
                    controller.on_event(state, &GameEvent::Moved(direction));
                }
                MoveOutcome::Unchanged => {
                    debug!(%direction, "Rejected move");
                    controller.on_event(state, &GameEvent::Rejected(direction));
                }
            },
        }
    }
}
