//! Game settings loaded from TOML and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use reverse_tiles_engine::solver::DEFAULT_MOVE_CAP;
use reverse_tiles_engine::{ConfigError, GameConfig, RandomSource, TileSource};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// User-facing settings for a game session.
///
/// Every key is optional in the file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Board side length (3, 4 or 5).
    board_size: usize,

    /// Reverse base (128, 256 or 512).
    reverse_base: u32,

    /// Moves the solver plays before giving up.
    move_cap: usize,

    /// Seed for tile spawning; entropy when absent.
    seed: Option<u64>,

    /// Print every board during automated play.
    show_boards: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: 4,
            reverse_base: 512,
            move_cap: DEFAULT_MOVE_CAP,
            seed: None,
            show_boards: true,
        }
    }
}

/// Values that replace file settings when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// Board side length.
    pub board_size: Option<usize>,
    /// Reverse base.
    pub reverse_base: Option<u32>,
    /// Solver move cap.
    pub move_cap: Option<usize>,
    /// Spawn seed.
    pub seed: Option<u64>,
    /// Print every board.
    pub show_boards: Option<bool>,
}

impl GameSettings {
    /// Loads settings from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            board_size = settings.board_size,
            reverse_base = settings.reverse_base,
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Loads settings from `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces values with any overrides that are set.
    #[instrument(skip(self))]
    pub fn apply(&mut self, overrides: SettingsOverrides) {
        if let Some(board_size) = overrides.board_size {
            self.board_size = board_size;
        }
        if let Some(reverse_base) = overrides.reverse_base {
            self.reverse_base = reverse_base;
        }
        if let Some(move_cap) = overrides.move_cap {
            self.move_cap = move_cap;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(show_boards) = overrides.show_boards {
            self.show_boards = show_boards;
        }
    }

    /// Validates the board size and reverse base.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.board_size, self.reverse_base)
    }

    /// Tile source for these settings, seeded when a seed is set.
    pub fn tile_source(&self) -> impl TileSource + use<> {
        match self.seed {
            Some(seed) => {
                debug!(seed, "Using seeded tile source");
                RandomSource::seeded(seed)
            }
            None => RandomSource::from_entropy(),
        }
    }
}

/// Settings file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
