//! Presentation state for the terminal interface.

use crate::session::{GameSession, TurnOutcome};
use tilefold_core::Direction;
use tracing::{debug, instrument, warn};

const PLAYING_HINT: &str = "Arrow keys slide tiles. Press 'r' to restart, 'q' to quit.";
const OVER_HINT: &str = "Run complete! Press 'r' for a new game, 'q' to quit.";

/// Main application state: the session plus the status line shown to
/// the player.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    status_message: String,
}

impl App {
    /// Wraps a session for display.
    pub fn new(session: GameSession) -> Self {
        let status_message = if session.state().over {
            OVER_HINT.to_string()
        } else {
            PLAYING_HINT.to_string()
        };
        Self {
            session,
            status_message,
        }
    }

    /// Gets the wrapped session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Applies a directional move and updates the status line.
    #[instrument(skip(self), fields(direction = %direction))]
    pub fn push(&mut self, direction: Direction) {
        debug!("Pushing tiles");

        match self.session.apply_move(direction) {
            Ok(TurnOutcome::Moved { gained }) => {
                self.status_message = if self.session.state().over {
                    format!(
                        "You reached {}! Final score {}. Press 'r' for a new game.",
                        self.session.config().win_value(),
                        self.session.state().score
                    )
                } else if gained > 0 {
                    format!("Merged for {} points.", gained)
                } else {
                    PLAYING_HINT.to_string()
                };
            }
            Ok(TurnOutcome::Unmoved) => {
                self.status_message = format!("Nothing slides {}.", direction);
            }
            Ok(TurnOutcome::AlreadyOver) => {
                self.status_message = OVER_HINT.to_string();
            }
            Err(e) => {
                warn!(error = %e, "Move failed");
                self.status_message = format!("Move failed: {}", e);
            }
        }
    }

    /// Starts a fresh run.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        match self.session.reset() {
            Ok(()) => {
                self.status_message = format!("New game. {}", PLAYING_HINT);
            }
            Err(e) => {
                warn!(error = %e, "Reset failed");
                self.status_message = format!("Reset failed: {}", e);
            }
        }
    }
}
