//! Reverse Tiles library - terminal front end for the reverse 2048 puzzle
//!
//! Tiles merge by halving, and the game is won when any tile reaches 2.
//!
//! # Architecture
//!
//! - **Engine**: board rules and the greedy solver live in
//!   [`reverse_tiles_engine`] and are re-exported here
//! - **Settings**: TOML settings with command-line overrides
//! - **Report**: plain-text boards, banners and move history for the solver
//! - **TUI**: ratatui front end for manual play
//!
//! # Example
//!
//! ```no_run
//! use reverse_tiles::{GameSettings, ReportFormat, run_solver};
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = GameSettings::default();
//! let report = run_solver(&settings, ReportFormat::Text, std::io::stdout())?;
//! println!("{:?} after {} moves", report.result(), report.moves());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod report;
mod settings;
mod solve;
pub mod tui;

// Crate-level exports - Settings
pub use settings::{GameSettings, SettingsError, SettingsOverrides};

// Crate-level exports - Solver runner
pub use solve::{ReportFormat, run_solver};

// Crate-level exports - Engine types
pub use reverse_tiles_engine::{
    Board, BoardSize, ConfigError, ConfigErrorKind, Controller, Direction, GameConfig, GameEvent,
    GameObserver, GameState, GameStatus, GreedySolver, MoveOutcome, NoopObserver, PlayOutcome,
    PlayerInput, RandomSource, ReverseBase, RunReport, RunResult, StepOutcome, Tile, TileSource,
    play_manual, rules, solver,
};
