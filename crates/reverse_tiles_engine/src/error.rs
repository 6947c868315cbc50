//! Configuration error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with a requested game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Board side length outside 3, 4 or 5.
    #[display("board size {_0} is not one of 3, 4 or 5")]
    BoardSize(usize),
    /// Reverse base outside 128, 256 or 512.
    #[display("reverse base {_0} is not one of 128, 256 or 512")]
    ReverseBase(u32),
    /// A board built from rows that is not square.
    #[display("row {row} has {len} cells, expected {expected}")]
    Shape {
        /// Side length implied by the number of rows.
        expected: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },
    /// A board whose side differs from the configured size.
    #[display("board is {actual}x{actual}, configured for {expected}x{expected}")]
    BoardMismatch {
        /// Side length of the configuration.
        expected: usize,
        /// Side length of the board.
        actual: usize,
    },
}

/// Invalid game configuration with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What was rejected.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_rejected_value() {
        let err = ConfigError::new(ConfigErrorKind::ReverseBase(1024));
        let text = err.to_string();
        assert!(text.contains("reverse base 1024"));
        assert!(text.contains("error.rs"));
    }
}
