//! Application state and logic.

use reverse_tiles_engine::GameEvent;
use tracing::debug;

/// Status line shown under the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    status_message: String,
    game_over: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            status_message: "Slide with w/a/s/d or the arrow keys.".to_string(),
            game_over: false,
        }
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Handles a game event from the driver.
    pub fn handle_event(&mut self, event: &GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Started => {
                self.status_message = "Game started. Reach a tile of 2 to win.".to_string();
            }
            GameEvent::Moved(direction) => {
                self.status_message = format!("Moved {}.", direction);
            }
            GameEvent::Rejected(_) => {
                self.status_message = "No tiles moved. Try another direction.".to_string();
            }
            GameEvent::Won => {
                self.status_message =
                    "You reached 2 and won! Press any key to exit.".to_string();
                self.game_over = true;
            }
            GameEvent::Lost => {
                self.status_message =
                    "Game over: board full, no moves left. Press any key to exit.".to_string();
                self.game_over = true;
            }
            GameEvent::MoveLimitReached | GameEvent::Quit => {
                self.status_message = "Goodbye.".to_string();
                self.game_over = true;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reverse_tiles_engine::Direction;

    #[test]
    fn test_rejected_move_message() {
        let mut app = App::new();
        app.handle_event(&GameEvent::Rejected(Direction::Left));
        assert_eq!(app.status_message(), "No tiles moved. Try another direction.");
        assert!(!app.is_game_over());
    }

    #[test]
    fn test_win_ends_game() {
        let mut app = App::new();
        app.handle_event(&GameEvent::Moved(Direction::Up));
        assert_eq!(app.status_message(), "Moved Up.");
        app.handle_event(&GameEvent::Won);
        assert!(app.is_game_over());
    }
}
