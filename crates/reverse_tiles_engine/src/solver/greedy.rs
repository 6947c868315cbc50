//! Greedy move selection and the automated play loop.

use super::heuristic::evaluate_move;
use crate::events::{GameEvent, GameObserver};
use crate::random::TileSource;
use crate::rules;
use crate::state::{GameState, GameStatus, MoveOutcome};
use crate::types::{Board, Direction};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Moves the solver plays before giving up.
pub const DEFAULT_MOVE_CAP: usize = 1000;

/// Outcome of a single solver turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The chosen move was applied.
    Moved(Direction),
    /// No direction changes the board.
    Quit,
}

/// How an automated run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunResult {
    /// A tile reached 2.
    Won,
    /// No moves remain.
    Lost,
    /// The move cap was hit first.
    MoveLimitReached,
}

/// Summary of an automated run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RunReport {
    /// How the run ended.
    result: RunResult,
    /// Moves applied.
    moves: usize,
    /// Directions applied, oldest first.
    history: Vec<Direction>,
    /// Final board.
    board: Board,
}

impl RunReport {
    fn from_state(result: RunResult, state: &GameState) -> Self {
        Self {
            result,
            moves: state.moves(),
            history: state.history().to_vec(),
            board: state.board().clone(),
        }
    }
}

/// One-ply greedy player.
///
/// Each turn it simulates all four directions and keeps the best score,
/// ties going to the earlier direction in [`Direction::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedySolver {
    move_cap: usize,
}

impl GreedySolver {
    /// Creates a solver with the default move cap.
    pub fn new() -> Self {
        Self::with_move_cap(DEFAULT_MOVE_CAP)
    }

    /// Creates a solver that stops after `move_cap` moves.
    pub fn with_move_cap(move_cap: usize) -> Self {
        Self { move_cap }
    }

    /// The move cap.
    pub fn move_cap(&self) -> usize {
        self.move_cap
    }

    /// Picks the highest-scoring direction, or `None` when nothing moves.
    #[instrument(level = "debug", skip(self, board))]
    pub fn select_move(&self, board: &Board) -> Option<Direction> {
        let mut best: Option<(Direction, u32)> = None;
        for direction in Direction::ALL {
            let Some(score) = evaluate_move(board, direction) else {
                continue;
            };
            debug!(%direction, score, "Evaluated move");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((direction, score));
            }
        }

        best.map(|(direction, _)| direction).or_else(|| {
            Direction::iter().find(|&direction| rules::apply_move(&mut board.clone(), direction))
        })
    }

    /// Plays one turn on the live state.
    #[instrument(skip(self, state, source), fields(moves = state.moves()))]
    pub fn step<S: TileSource + ?Sized>(
        &self,
        state: &mut GameState,
        source: &mut S,
    ) -> StepOutcome {
        let Some(direction) = self.select_move(state.board()) else {
            return StepOutcome::Quit;
        };
        match state.apply(direction, source) {
            MoveOutcome::Applied => StepOutcome::Moved(direction),
            MoveOutcome::Unchanged => {
                warn!(%direction, "Selected move did not apply");
                StepOutcome::Quit
            }
        }
    }

    /// Plays until the game is won, lost or the move cap is reached.
    ///
    /// `observer` sees the starting board and every state after it.
    #[instrument(skip_all, fields(move_cap = self.move_cap))]
    pub fn run<S, O>(&self, state: &mut GameState, source: &mut S, observer: &mut O) -> RunReport
    where
        S: TileSource + ?Sized,
        O: GameObserver + ?Sized,
    {
        info!("Starting automated play");
        observer.on_event(state, &GameEvent::Started);

        while state.moves() < self.move_cap {
            match state.status() {
                GameStatus::Won => {
                    info!(moves = state.moves(), "Solver won");
                    observer.on_event(state, &GameEvent::Won);
                    return RunReport::from_state(RunResult::Won, state);
                }
                GameStatus::Lost => {
                    info!(moves = state.moves(), "Solver lost");
                    observer.on_event(state, &GameEvent::Lost);
                    return RunReport::from_state(RunResult::Lost, state);
                }
                GameStatus::InProgress => {}
            }

            match self.step(state, source) {
                StepOutcome::Moved(direction) => {
                    observer.on_event(state, &GameEvent::Moved(direction));
                }
                StepOutcome::Quit => {
                    info!(moves = state.moves(), "No valid moves available");
                    observer.on_event(state, &GameEvent::Quit);
                    observer.on_event(state, &GameEvent::Lost);
                    return RunReport::from_state(RunResult::Lost, state);
                }
            }
        }

        info!(moves = state.moves(), "Move limit reached");
        observer.on_event(state, &GameEvent::MoveLimitReached);
        RunReport::from_state(RunResult::MoveLimitReached, state)
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NoopObserver;
    use crate::random::{RandomSource, ScriptedSource};
    use crate::types::GameConfig;

    fn board(rows: &[Vec<u32>]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_ties_go_to_up() {
        // Every direction leaves one tile on an otherwise empty board.
        let b = board(&[vec![0, 0, 0], vec![0, 64, 0], vec![0, 0, 0]]);
        assert_eq!(GreedySolver::new().select_move(&b), Some(Direction::Up));
    }

    #[test]
    fn test_picks_highest_score() {
        // Up 15, Down 12, Left 17, Right 17.
        let b = board(&[vec![64, 64, 0], vec![32, 0, 0], vec![0, 0, 0]]);
        assert_eq!(evaluate_move(&b, Direction::Up), Some(15));
        assert_eq!(evaluate_move(&b, Direction::Down), Some(12));
        assert_eq!(evaluate_move(&b, Direction::Left), Some(17));
        assert_eq!(evaluate_move(&b, Direction::Right), Some(17));
        assert_eq!(GreedySolver::new().select_move(&b), Some(Direction::Left));
    }

    #[test]
    fn test_keeping_a_pair_can_beat_merging_it() {
        // Up keeps the 64 pair (7 empty, 1 pair); Left merges it (8 empty, no pair).
        let b = board(&[vec![64, 64, 0], vec![0, 0, 0], vec![0, 0, 0]]);
        assert_eq!(GreedySolver::new().select_move(&b), Some(Direction::Up));
    }

    #[test]
    fn test_empty_board_has_no_move() {
        let b = Board::with_size(4).unwrap();
        assert_eq!(GreedySolver::new().select_move(&b), None);
    }

    #[test]
    fn test_selection_is_stable() {
        let b = board(&[
            vec![64, 32, 0, 16],
            vec![0, 32, 64, 0],
            vec![16, 0, 0, 64],
            vec![0, 128, 0, 0],
        ]);
        let solver = GreedySolver::new();
        let first = solver.select_move(&b);
        for _ in 0..10 {
            assert_eq!(solver.select_move(&b), first);
        }
    }

    #[test]
    fn test_step_on_empty_board_quits() {
        let config = GameConfig::new(3, 128).unwrap();
        let mut state = GameState::from_board(config, Board::with_size(3).unwrap()).unwrap();
        let mut source = ScriptedSource::default();
        assert_eq!(GreedySolver::new().step(&mut state, &mut source), StepOutcome::Quit);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_step_applies_and_records() {
        let config = GameConfig::new(3, 128).unwrap();
        let start = board(&[vec![64, 64, 0], vec![32, 0, 0], vec![0, 0, 0]]);
        let mut state = GameState::from_board(config, start).unwrap();
        let mut source = ScriptedSource::new(vec![0, 0]);
        let outcome = GreedySolver::new().step(&mut state, &mut source);
        assert_eq!(outcome, StepOutcome::Moved(Direction::Left));
        assert_eq!(state.moves(), 1);
        assert_eq!(state.history(), &[Direction::Left]);
        assert_eq!(state.board().get(0, 0), 32);
        assert_eq!(state.board().get(0, 1), 64);
        assert_eq!(state.board().count_occupied(), 3);
    }

    #[test]
    fn test_run_respects_move_cap() {
        let config = GameConfig::new(5, 512).unwrap();
        let mut source = RandomSource::seeded(3);
        let mut state = GameState::new(config, &mut source);
        let report =
            GreedySolver::with_move_cap(5).run(&mut state, &mut source, &mut NoopObserver);
        assert!(*report.moves() <= 5);
        if *report.result() == RunResult::MoveLimitReached {
            assert_eq!(*report.moves(), 5);
        }
        assert_eq!(report.history().len(), *report.moves());
    }

    #[test]
    fn test_report_rejects_malformed_board() {
        let json = r#"{"result":"Won","moves":0,"history":[],"board":{"side":7,"cells":[0,0,0]}}"#;
        assert!(serde_json::from_str::<RunReport>(json).is_err());

        let json = r#"{"result":"Won","moves":0,"history":[],"board":[[2,0,0],[0,0,0],[0,0,0]]}"#;
        let report: RunReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.board().get(0, 0), 2);
    }

    #[test]
    fn test_run_on_won_board_stops_immediately() {
        let config = GameConfig::new(3, 128).unwrap();
        let start = board(&[vec![2, 0, 0], vec![0; 3], vec![0; 3]]);
        let mut state = GameState::from_board(config, start).unwrap();
        let mut source = ScriptedSource::default();
        let report = GreedySolver::new().run(&mut state, &mut source, &mut NoopObserver);
        assert_eq!(*report.result(), RunResult::Won);
        assert_eq!(*report.moves(), 0);
    }
}
