//! Terminal UI for manual play.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::input_for_key;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reverse_tiles_engine::{
    Controller, GameEvent, GameObserver, GameState, PlayOutcome, PlayerInput, play_manual,
};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::report::{game_over_banner, history_block, render_board, win_banner};
use crate::settings::GameSettings;

type TermBackend = CrosstermBackend<Stdout>;

/// Reads keys from the terminal and redraws after every game event.
struct TerminalController {
    terminal: Terminal<TermBackend>,
    app: App,
    draw_error: Option<io::Error>,
}

impl TerminalController {
    fn redraw(&mut self, state: &GameState) -> io::Result<()> {
        let app = &self.app;
        self.terminal.draw(|f| ui::draw(f, state, app))?;
        Ok(())
    }

    /// Blocks until a key is pressed.
    fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(());
            }
        }
    }
}

impl GameObserver for TerminalController {
    fn on_event(&mut self, state: &GameState, event: &GameEvent) {
        self.app.handle_event(event);
        if let Err(err) = self.redraw(state) {
            error!(error = %err, "Failed to draw board");
            self.draw_error.get_or_insert(err);
        }
    }
}

impl Controller for TerminalController {
    type Error = io::Error;

    fn next_input(&mut self, state: &GameState) -> io::Result<PlayerInput> {
        if let Some(err) = self.draw_error.take() {
            return Err(err);
        }
        self.redraw(state)?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(input) = input_for_key(key.code) {
                    debug!(?input, "Key mapped to input");
                    return Ok(input);
                }
            }
        }
    }
}

/// Fails with a draw error left over after the last event of a finished game.
fn surface_draw_error(
    res: io::Result<PlayOutcome>,
    draw_error: Option<io::Error>,
) -> io::Result<PlayOutcome> {
    match (res, draw_error) {
        (Ok(_), Some(err)) => Err(err),
        (res, _) => res,
    }
}

/// Runs a manual game in the terminal and prints a summary afterwards.
#[instrument(skip(settings))]
pub fn run_play(settings: &GameSettings) -> Result<PlayOutcome> {
    let config = settings.game_config().context("Invalid game settings")?;
    let mut source = settings.tile_source();
    let mut state = GameState::new(config, &mut source);

    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut controller = TerminalController {
        terminal: Terminal::new(CrosstermBackend::new(stdout))?,
        app: App::new(),
        draw_error: None,
    };

    let res = play_manual(&mut state, &mut controller, &mut source);
    let res = surface_draw_error(res, controller.draw_error.take()).and_then(|outcome| {
        if outcome != PlayOutcome::Quit {
            controller.wait_for_key()?;
        }
        Ok(outcome)
    });

    disable_raw_mode()?;
    execute!(controller.terminal.backend_mut(), LeaveAlternateScreen)?;
    controller.terminal.show_cursor()?;

    let outcome = res.context("Terminal game loop failed")?;
    info!(?outcome, moves = state.moves(), "Game finished");

    print!("{}", render_board(&state));
    match outcome {
        PlayOutcome::Won => print!("{}", win_banner(state.moves())),
        PlayOutcome::Lost => print!("{}", game_over_banner(state.moves())),
        PlayOutcome::Quit => println!("GoodBye"),
    }
    print!("{}", history_block(state.history()));

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_draw_error_is_reported() {
        let err = io::Error::other("terminal closed");
        let res = surface_draw_error(Ok(PlayOutcome::Won), Some(err));
        assert_eq!(res.unwrap_err().to_string(), "terminal closed");
    }

    #[test]
    fn test_game_error_wins_over_draw_error() {
        let game_err = io::Error::other("read failed");
        let draw_err = io::Error::other("terminal closed");
        let res = surface_draw_error(Err(game_err), Some(draw_err));
        assert_eq!(res.unwrap_err().to_string(), "read failed");
    }

    #[test]
    fn test_outcome_passes_through_without_draw_error() {
        let res = surface_draw_error(Ok(PlayOutcome::Lost), None);
        assert_eq!(res.unwrap(), PlayOutcome::Lost);
    }
}
