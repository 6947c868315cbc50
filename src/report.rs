//! Plain-text rendering for the automated player.

use reverse_tiles_engine::{Direction, GameEvent, GameObserver, GameState};
use std::fmt::Write as _;
use std::io::{self, Write};
use tracing::warn;

/// Renders the board under a mode header, followed by the move count.
pub fn render_board(state: &GameState) -> String {
    let mut out = format!(
        "\n=== Reverse {} Mode ===\n\n",
        state.config().reverse_base().value()
    );
    for row in state.board().rows() {
        for value in row {
            let _ = write!(out, "{}\t", value);
        }
        out.push_str("\n\n");
    }
    let _ = writeln!(out, "Moves: {}", state.moves());
    out
}

/// Formats directions as `U D L R`, grouped by tens and wrapped every fifty.
pub fn format_history(history: &[Direction]) -> String {
    let mut out = String::new();
    for (i, direction) in history.iter().enumerate() {
        out.push(direction.symbol());
        let n = i + 1;
        if n % 50 == 0 {
            out.push('\n');
        } else if n % 10 == 0 {
            out.push_str(" | ");
        } else {
            out.push(' ');
        }
    }
    out
}

/// History block printed at the end of a run.
pub fn history_block(history: &[Direction]) -> String {
    format!(
        "\nMove History ({} moves):\n{}\n\n",
        history.len(),
        format_history(history)
    )
}

fn banner(lines: &[&str], moves: usize) -> String {
    let border = "*".repeat(30);
    let blank = format!("*{}*", " ".repeat(28));
    let mut out = format!("\n{border}\n{blank}\n");
    for line in lines {
        let _ = writeln!(out, "*{:^28}*", line);
    }
    let _ = writeln!(out, "{blank}");
    let _ = writeln!(out, "* Total moves: {:<14}*", moves);
    let _ = write!(out, "{blank}\n{border}\n\n");
    out
}

/// Banner shown when a tile reaches 2.
pub fn win_banner(moves: usize) -> String {
    banner(
        &["YOU HAVE WON!", "", "You reached the value of 2", "and completed the game!"],
        moves,
    )
}

/// Banner shown when no moves remain.
pub fn game_over_banner(moves: usize) -> String {
    banner(
        &["GAME OVER", "", "Board is full and no more", "moves are possible."],
        moves,
    )
}

/// Writes solver progress to a text sink.
///
/// With `show_boards` every board is printed; otherwise a progress line
/// appears every hundred moves. Write failures are kept and surfaced by
/// [`ConsoleReporter::finish`].
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
    show_boards: bool,
    move_cap: usize,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W, show_boards: bool, move_cap: usize) -> Self {
        Self {
            out,
            show_boards,
            move_cap,
            error: None,
        }
    }

    /// Returns the sink, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            warn!(error = %err, "Failed to write report");
            self.error = Some(err);
        }
    }

    fn summary(&mut self, state: &GameState) {
        self.emit(&render_board(state));
        self.emit(&history_block(state.history()));
    }
}

impl<W: Write> GameObserver for ConsoleReporter<W> {
    fn on_event(&mut self, state: &GameState, event: &GameEvent) {
        match event {
            GameEvent::Started => {
                let side = state.config().size().side();
                self.emit("Starting automated gameplay with the greedy solver...\n");
                self.emit(&format!(
                    "Board size: {side}x{side}, Reverse mode: {}\n\n",
                    state.config().reverse_base().value()
                ));
                if self.show_boards {
                    self.emit(&render_board(state));
                    self.emit("Solver is thinking...\n");
                }
            }
            GameEvent::Moved(direction) => {
                if self.show_boards {
                    self.emit(&render_board(state));
                    self.emit(&format!("Move #{}: {}\n", state.moves(), direction.symbol()));
                } else if state.moves() % 100 == 0 {
                    self.emit(&format!("Moves completed: {}\n", state.moves()));
                }
            }
            GameEvent::Won => {
                self.emit(&win_banner(state.moves()));
                self.summary(state);
            }
            GameEvent::Lost => {
                self.emit(&game_over_banner(state.moves()));
                self.summary(state);
            }
            GameEvent::Quit => {
                self.emit("No valid moves available. Game over.\n");
            }
            GameEvent::MoveLimitReached => {
                self.emit(&format!(
                    "Move limit ({}) reached without solving the puzzle.\n",
                    self.move_cap
                ));
                self.summary(state);
            }
            GameEvent::Rejected(_) => {}
        }
    }
}
