//! Win and terminal detection.

use crate::types::{Board, EMPTY, WINNING_TILE};
use tracing::instrument;

/// True iff some cell holds the winning tile.
#[instrument(level = "trace", skip(board))]
pub fn check_win(board: &Board) -> bool {
    board.cells().contains(&WINNING_TILE)
}

/// True iff any horizontally or vertically adjacent pair holds equal values.
///
/// Empty cells count too: two neighbouring empty cells make this true.
#[instrument(level = "trace", skip(board))]
pub fn can_move(board: &Board) -> bool {
    let side = board.side();
    (0..side).any(|i| {
        (0..side - 1).any(|j| {
            board.get(i, j) == board.get(i, j + 1) || board.get(j, i) == board.get(j + 1, i)
        })
    })
}

/// True iff the board is full and no adjacent pair is equal.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    !board.cells().contains(&EMPTY) && !can_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[Vec<u32>]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_empty_board_never_wins() {
        assert!(!check_win(&Board::with_size(5).unwrap()));
    }

    #[test]
    fn test_win_requires_exactly_two() {
        assert!(check_win(&board(&[vec![0, 0, 0], vec![0, 2, 0], vec![0, 0, 0]])));
        assert!(!check_win(&board(&[vec![1, 4, 0], vec![0, 8, 0], vec![0, 0, 16]])));
    }

    #[test]
    fn test_can_move_counts_empty_neighbours() {
        assert!(can_move(&board(&[vec![16, 0, 0], vec![32, 64, 16], vec![64, 16, 32]])));
    }

    #[test]
    fn test_can_move_vertical_pair() {
        assert!(can_move(&board(&[vec![16, 32, 64], vec![16, 64, 32], vec![64, 32, 16]])));
    }

    #[test]
    fn test_full_board_without_pairs_is_terminal() {
        let b = board(&[vec![16, 32, 64], vec![32, 64, 16], vec![64, 16, 32]]);
        assert!(!can_move(&b));
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_board_with_gap_is_not_terminal() {
        let b = board(&[vec![16, 32, 64], vec![32, 64, 16], vec![64, 16, 0]]);
        assert!(!is_terminal(&b));
    }

    #[test]
    fn test_full_board_with_pair_is_not_terminal() {
        let b = board(&[vec![16, 16, 64], vec![32, 64, 16], vec![64, 16, 32]]);
        assert!(!is_terminal(&b));
    }
}
