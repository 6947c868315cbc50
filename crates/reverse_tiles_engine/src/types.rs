//! Core domain types for the reverse tile puzzle.

use crate::error::{ConfigError, ConfigErrorKind};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Value held by a board cell. Zero marks an empty cell.
pub type Tile = u32;

/// The empty cell value.
pub const EMPTY: Tile = 0;

/// The tile value that wins the game.
pub const WINNING_TILE: Tile = 2;

/// Floor applied to merged values.
pub const MIN_TILE: Tile = 1;

/// Direction in which tiles slide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions in the fixed tie-break order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Single-letter symbol used in move histories.
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Parses the classic `w`/`a`/`s`/`d` keys.
    pub fn from_wasd(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Supported board side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// 3x3 board.
    Three,
    /// 4x4 board.
    Four,
    /// 5x5 board.
    Five,
}

impl BoardSize {
    /// Side length of the board.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            other => Err(ConfigError::new(ConfigErrorKind::BoardSize(other))),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.side()
    }
}

/// Reverse-mode base controlling which tiles may spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ReverseBase {
    /// Spawns 64, 32 or 16.
    R128,
    /// Spawns 128, 64 or 32.
    R256,
    /// Spawns 256, 128 or 64.
    R512,
}

impl ReverseBase {
    /// Numeric value of the base.
    pub fn value(self) -> u32 {
        match self {
            ReverseBase::R128 => 128,
            ReverseBase::R256 => 256,
            ReverseBase::R512 => 512,
        }
    }

    /// Tile values that may appear when a tile spawns.
    pub fn spawn_values(self) -> &'static [Tile; 3] {
        match self {
            ReverseBase::R128 => &[64, 32, 16],
            ReverseBase::R256 => &[128, 64, 32],
            ReverseBase::R512 => &[256, 128, 64],
        }
    }
}

impl TryFrom<u32> for ReverseBase {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(p: u32) -> Result<Self, Self::Error> {
        match p {
            128 => Ok(ReverseBase::R128),
            256 => Ok(ReverseBase::R256),
            512 => Ok(ReverseBase::R512),
            other => Err(ConfigError::new(ConfigErrorKind::ReverseBase(other))),
        }
    }
}

impl From<ReverseBase> for u32 {
    fn from(base: ReverseBase) -> Self {
        base.value()
    }
}

/// Immutable game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    size: BoardSize,
    reverse_base: ReverseBase,
}

impl GameConfig {
    /// Validates raw settings into a configuration.
    #[track_caller]
    #[instrument]
    pub fn new(board_size: usize, reverse_base: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            size: BoardSize::try_from(board_size)?,
            reverse_base: ReverseBase::try_from(reverse_base)?,
        })
    }

    /// Board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Reverse base.
    pub fn reverse_base(&self) -> ReverseBase {
        self.reverse_base
    }

    /// Tile values that may spawn under this configuration.
    pub fn spawn_values(&self) -> &'static [Tile; 3] {
        self.reverse_base.spawn_values()
    }
}

/// Square grid of tiles stored in row-major order.
///
/// Serialized as nested rows; deserializing goes through [`Board::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Board {
    side: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let side = size.side();
        Self {
            side,
            cells: vec![EMPTY; side * side],
        }
    }

    /// Creates an empty board from a raw side length.
    #[track_caller]
    pub fn with_size(n: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(BoardSize::try_from(n)?))
    }

    /// Builds a board from explicit rows.
    #[track_caller]
    #[instrument]
    pub fn from_rows(rows: &[Vec<Tile>]) -> Result<Self, ConfigError> {
        let size = BoardSize::try_from(rows.len())?;
        let side = size.side();
        let mut cells = Vec::with_capacity(side * side);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != side {
                return Err(ConfigError::new(ConfigErrorKind::Shape {
                    expected: side,
                    row,
                    len: values.len(),
                }));
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { side, cells })
    }

    /// Side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[self.index(row, col)]
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.side)
    }

    /// Copies the board into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == EMPTY)
            .map(|(i, _)| (i / self.side, i % self.side))
            .collect()
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|v| **v == EMPTY).count()
    }

    /// Number of occupied cells.
    pub fn count_occupied(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) outside {0}x{0} board",
            self.side
        );
        row * self.side + col
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<Tile>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}
