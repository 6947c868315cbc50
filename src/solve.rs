//! Automated play with the greedy solver.

use crate::report::ConsoleReporter;
use crate::settings::GameSettings;
use anyhow::{Context, Result};
use reverse_tiles_engine::{GameState, GreedySolver, NoopObserver, RunReport};
use std::io::Write;
use tracing::{info, instrument};

/// Output format for a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Boards, banners and move history as text.
    #[default]
    Text,
    /// The final [`RunReport`] as JSON.
    Json,
}

/// Runs the greedy solver with `settings`, writing the report to `out`.
#[instrument(skip(settings, out))]
pub fn run_solver<W: Write>(
    settings: &GameSettings,
    format: ReportFormat,
    mut out: W,
) -> Result<RunReport> {
    let config = settings.game_config().context("Invalid game settings")?;
    let mut source = settings.tile_source();
    let mut state = GameState::new(config, &mut source);
    let solver = GreedySolver::with_move_cap(*settings.move_cap());

    let report = match format {
        ReportFormat::Text => {
            let mut reporter =
                ConsoleReporter::new(&mut out, *settings.show_boards(), solver.move_cap());
            let report = solver.run(&mut state, &mut source, &mut reporter);
            reporter.finish().context("Failed to write solver report")?;
            report
        }
        ReportFormat::Json => {
            let report = solver.run(&mut state, &mut source, &mut NoopObserver);
            serde_json::to_writer_pretty(&mut out, &report)
                .context("Failed to serialize solver report")?;
            writeln!(out).context("Failed to write solver report")?;
            report
        }
    };

    info!(result = ?report.result(), moves = report.moves(), "Solver finished");
    Ok(report)
}
