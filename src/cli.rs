//! Command-line interface for reverse_tiles.

use crate::settings::SettingsOverrides;
use clap::{Args, Parser, Subcommand};

/// Reverse Tiles - halve the tiles down to 2
#[derive(Parser, Debug)]
#[command(name = "reverse_tiles")]
#[command(about = "Reverse 2048 puzzle: play by hand or watch the greedy solver")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every mode
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct GameArgs {
    /// Board size: 3, 4 or 5
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Reverse base: 128, 256 or 512
    #[arg(short, long)]
    pub reverse_base: Option<u32>,

    /// Seed for tile spawning
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI (w/a/s/d or arrow keys, q to quit)
    Play {
        /// Game options
        #[command(flatten)]
        game: GameArgs,
    },

    /// Let the greedy solver play
    Solve {
        /// Game options
        #[command(flatten)]
        game: GameArgs,

        /// Stop after this many moves
        #[arg(long)]
        move_cap: Option<usize>,

        /// Print every board state
        #[arg(long)]
        show_boards: Option<bool>,

        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl GameArgs {
    /// Converts the flags into settings overrides.
    pub fn overrides(self) -> SettingsOverrides {
        SettingsOverrides {
            board_size: self.size,
            reverse_base: self.reverse_base,
            seed: self.seed,
            ..SettingsOverrides::default()
        }
    }
}
