//! Board mechanics and greedy solver for the reverse 2048 tile puzzle.
//!
//! Merging two equal tiles halves their value, and the game is won once any
//! tile reaches 2.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Direction`], [`GameConfig`]
//! - **Rules**: pure functions in [`rules`] for sliding, spawning and
//!   win/terminal detection
//! - **State**: [`GameState`] tracks the live board, move counter and history
//! - **Drivers**: [`play_manual`] for interactive play, [`GreedySolver`] for
//!   automated play
//! - **Randomness**: injected through [`TileSource`]
//!
//! # Example
//!
//! ```
//! use reverse_tiles_engine::{GameConfig, GameState, GreedySolver, NoopObserver, RandomSource};
//!
//! let config = GameConfig::new(4, 512)?;
//! let mut source = RandomSource::seeded(7);
//! let mut state = GameState::new(config, &mut source);
//! let report = GreedySolver::new().run(&mut state, &mut source, &mut NoopObserver);
//! assert_eq!(report.history().len(), *report.moves());
//! # Ok::<(), reverse_tiles_engine::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod events;
mod manual;
mod random;
pub mod rules;
pub mod solver;
mod state;
mod types;

pub use error::{ConfigError, ConfigErrorKind};
pub use events::{GameEvent, GameObserver, NoopObserver};
pub use manual::{Controller, PlayOutcome, PlayerInput, play_manual};
pub use random::{RandomSource, TileSource};
#[cfg(feature = "test-util")]
pub use random::ScriptedSource;
pub use solver::{GreedySolver, RunReport, RunResult, StepOutcome};
pub use state::{GameState, GameStatus, MoveOutcome};
pub use types::{
    Board, BoardSize, Direction, EMPTY, GameConfig, MIN_TILE, ReverseBase, Tile, WINNING_TILE,
};
