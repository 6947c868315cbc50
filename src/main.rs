//! Reverse Tiles - Unified CLI
//!
//! Manual play in the terminal or automated play with the greedy solver.

use anyhow::Result;
use clap::Parser;
use reverse_tiles::cli::{Cli, Command};
use reverse_tiles::{GameSettings, ReportFormat, SettingsOverrides, run_solver, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut settings = GameSettings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { game } => {
            settings.apply(game.overrides());
            run_play(&settings)
        }
        Command::Solve {
            game,
            move_cap,
            show_boards,
            json,
        } => {
            settings.apply(SettingsOverrides {
                move_cap,
                show_boards,
                ..game.overrides()
            });
            let format = if json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            };
            run_solve(&settings, format)
        }
    }
}

/// Run manual play in the terminal UI
#[instrument(skip(settings))]
fn run_play(settings: &GameSettings) -> Result<()> {
    // Log to file so output does not corrupt the UI
    let log_file = std::fs::File::create("reverse_tiles.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting manual play");
    tui::run_play(settings)?;
    Ok(())
}

/// Run the greedy solver, reporting to stdout
#[instrument(skip(settings))]
fn run_solve(settings: &GameSettings, format: ReportFormat) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting solver");
    run_solver(settings, format, std::io::stdout().lock())?;
    Ok(())
}
