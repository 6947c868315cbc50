//! Slide-and-merge transition.

use crate::types::{Board, Direction, EMPTY, MIN_TILE, Tile};
use tracing::instrument;

/// Merges a packed line read in traversal order.
///
/// Adjacent equal values collapse into half their value (never below
/// [`MIN_TILE`]). A merged tile is not merged again in the same pass.
pub fn merge_line(values: &[Tile]) -> Vec<Tile> {
    let mut merged = Vec::with_capacity(values.len());
    let mut i = 0;
    while i < values.len() {
        match values.get(i + 1) {
            Some(&next) if next == values[i] => {
                merged.push((values[i] / 2).max(MIN_TILE));
                i += 2;
            }
            _ => {
                merged.push(values[i]);
                i += 1;
            }
        }
    }
    merged
}

/// Cell coordinates of line `line`, starting from the edge tiles slide towards.
fn traversal(side: usize, direction: Direction, line: usize) -> Vec<(usize, usize)> {
    (0..side)
        .map(|k| match direction {
            Direction::Up => (k, line),
            Direction::Down => (side - 1 - k, line),
            Direction::Left => (line, k),
            Direction::Right => (line, side - 1 - k),
        })
        .collect()
}

/// Slides and merges every line of `board` towards `direction`.
///
/// Returns `true` when any line held at least one tile, even if nothing
/// ended up moving. Callers treat that as an applied move.
#[instrument(level = "trace", skip(board))]
pub fn apply_move(board: &mut Board, direction: Direction) -> bool {
    let side = board.side();
    let mut changed = false;

    for line in 0..side {
        let cells = traversal(side, direction, line);
        let values: Vec<Tile> = cells
            .iter()
            .map(|&(r, c)| board.get(r, c))
            .filter(|&v| v != EMPTY)
            .collect();
        if values.is_empty() {
            continue;
        }

        let merged = merge_line(&values);
        for (k, &(r, c)) in cells.iter().enumerate() {
            board.set(r, c, merged.get(k).copied().unwrap_or(EMPTY));
        }
        changed = true;
    }

    changed
}
