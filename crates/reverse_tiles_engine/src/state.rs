//! Live game state shared by manual play and the solver.

use crate::error::{ConfigError, ConfigErrorKind};
use crate::random::TileSource;
use crate::rules;
use crate::types::{Board, Direction, GameConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still possible.
    InProgress,
    /// A tile reached 2.
    Won,
    /// Board full with no adjacent equal pair.
    Lost,
}

/// Result of attempting a move on the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Tiles slid, a tile spawned and the turn counted.
    Applied,
    /// Nothing to slide; the turn was not consumed.
    Unchanged,
}

/// Board, move counter and history of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    moves: usize,
    history: Vec<Direction>,
}

impl GameState {
    /// Starts a game: empty board plus one spawned tile.
    #[instrument(skip(source))]
    pub fn new<S: TileSource + ?Sized>(config: GameConfig, source: &mut S) -> Self {
        let mut board = Board::new(config.size());
        rules::spawn_tile(&mut board, &config, source);
        info!(
            size = config.size().side(),
            reverse_base = config.reverse_base().value(),
            "New game"
        );
        Self {
            config,
            board,
            moves: 0,
            history: Vec::new(),
        }
    }

    /// Resumes from an existing board with no moves played.
    ///
    /// Fails when the board side does not match the configured size.
    #[track_caller]
    pub fn from_board(config: GameConfig, board: Board) -> Result<Self, ConfigError> {
        let expected = config.size().side();
        if board.side() != expected {
            return Err(ConfigError::new(ConfigErrorKind::BoardMismatch {
                expected,
                actual: board.side(),
            }));
        }
        Ok(Self {
            config,
            board,
            moves: 0,
            history: Vec::new(),
        })
    }

    /// The configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of applied moves.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Directions applied so far, oldest first.
    pub fn history(&self) -> &[Direction] {
        &self.history
    }

    /// Current status; a win takes precedence over a full board.
    pub fn status(&self) -> GameStatus {
        if rules::check_win(&self.board) {
            GameStatus::Won
        } else if rules::is_terminal(&self.board) {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Slides towards `direction`; on change spawns a tile and records the move.
    #[instrument(skip(self, source), fields(moves = self.moves))]
    pub fn apply<S: TileSource + ?Sized>(
        &mut self,
        direction: Direction,
        source: &mut S,
    ) -> MoveOutcome {
        if !rules::apply_move(&mut self.board, direction) {
            debug!("No tiles moved");
            return MoveOutcome::Unchanged;
        }
        rules::spawn_tile(&mut self.board, &self.config, source);
        self.moves += 1;
        self.history.push(direction);
        debug!(moves = self.moves, "Move applied");
        MoveOutcome::Applied
    }
}
