//! Board evaluation for the greedy solver.

use crate::rules;
use crate::types::{Board, Direction, EMPTY};
use tracing::instrument;

/// Points per empty cell after a move.
pub const EMPTY_CELL_WEIGHT: u32 = 2;

/// Points per adjacent equal pair after a move.
pub const MERGEABLE_PAIR_WEIGHT: u32 = 3;

/// Combines the two board features into a score.
pub fn score(empty_cells: usize, mergeable_pairs: usize) -> u32 {
    // Both counts are bounded by the 25 cells of a 5x5 board.
    empty_cells as u32 * EMPTY_CELL_WEIGHT + mergeable_pairs as u32 * MERGEABLE_PAIR_WEIGHT
}

/// Counts adjacent equal non-empty pairs, rows and columns separately.
///
/// A cell may belong to a horizontal and a vertical pair at once.
pub fn count_mergeable_pairs(board: &Board) -> usize {
    let side = board.side();
    let mut count = 0;
    for i in 0..side {
        for j in 0..side - 1 {
            let here = board.get(i, j);
            if here != EMPTY && here == board.get(i, j + 1) {
                count += 1;
            }
            let here = board.get(j, i);
            if here != EMPTY && here == board.get(j + 1, i) {
                count += 1;
            }
        }
    }
    count
}

/// Scores `direction` on a private copy of `board`.
///
/// Returns `None` when the move reports no change.
#[instrument(level = "trace", skip(board))]
pub fn evaluate_move(board: &Board, direction: Direction) -> Option<u32> {
    let mut simulated = board.clone();
    if !rules::apply_move(&mut simulated, direction) {
        return None;
    }
    Some(score(
        simulated.count_empty(),
        count_mergeable_pairs(&simulated),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[Vec<u32>]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_score_weights() {
        assert_eq!(score(0, 0), 0);
        assert_eq!(score(4, 0), 8);
        assert_eq!(score(0, 2), 6);
        assert_eq!(score(3, 5), 21);
    }

    #[test]
    fn test_pairs_ignore_empty_cells() {
        assert_eq!(count_mergeable_pairs(&Board::with_size(4).unwrap()), 0);
    }

    #[test]
    fn test_cell_counted_in_both_directions() {
        let b = board(&[vec![16, 16, 0], vec![16, 0, 0], vec![0, 0, 0]]);
        assert_eq!(count_mergeable_pairs(&b), 2);
    }

    #[test]
    fn test_row_of_three_counts_two_pairs() {
        let b = board(&[vec![32, 32, 32], vec![0, 0, 0], vec![0, 0, 0]]);
        assert_eq!(count_mergeable_pairs(&b), 2);
    }

    #[test]
    fn test_evaluate_does_not_touch_board() {
        let b = board(&[vec![64, 64, 0], vec![0, 0, 0], vec![0, 0, 0]]);
        let before = b.clone();
        // [32, 0, 0] afterwards: eight empty cells, no pairs.
        assert_eq!(evaluate_move(&b, Direction::Left), Some(16));
        assert_eq!(b, before);
    }

    #[test]
    fn test_evaluate_empty_board_is_invalid() {
        let b = Board::with_size(3).unwrap();
        assert_eq!(evaluate_move(&b, Direction::Up), None);
    }
}
