//! Greedy one-ply solver.

pub mod greedy;
pub mod heuristic;

pub use greedy::{DEFAULT_MOVE_CAP, GreedySolver, RunReport, RunResult, StepOutcome};
pub use heuristic::{
    EMPTY_CELL_WEIGHT, MERGEABLE_PAIR_WEIGHT, count_mergeable_pairs, evaluate_move, score,
};
