//! Tile spawning policy.

use crate::random::TileSource;
use crate::types::{Board, GameConfig, Tile};
use tracing::{debug, instrument};

/// Places one tile on a uniformly chosen empty cell.
///
/// The cell is drawn first, then the value from the configuration's spawn
/// set. Returns the placement, or `None` when the board is full.
#[instrument(level = "debug", skip(board, source))]
pub fn spawn_tile<S: TileSource + ?Sized>(
    board: &mut Board,
    config: &GameConfig,
    source: &mut S,
) -> Option<(usize, usize, Tile)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        debug!("Board full, no tile spawned");
        return None;
    }

    let (row, col) = empty[source.pick_index(empty.len())];
    let values = config.spawn_values();
    let value = values[source.pick_index(values.len())];
    board.set(row, col, value);

    debug!(row, col, value, "Spawned tile");
    Some((row, col, value))
}
