//! Single-player game session: state, moves, and lifecycle.

use crate::config::GameConfig;
use crate::spawn::spawn_random_tile;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tilefold_core::{Board, BoardError, Direction, shift};
use tracing::{debug, info, instrument, warn};

/// Snapshot of everything a session persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current grid.
    pub board: Board,
    /// Accumulated score from merges.
    pub score: u32,
    /// True once any tile reached the target value.
    pub over: bool,
}

/// Outcome of feeding one directional input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Tiles moved; a new tile spawned and the score grew.
    Moved {
        /// Points gained by merges this turn.
        gained: u32,
    },
    /// The move would not change the board; input ignored.
    Unmoved,
    /// The run already ended; input ignored.
    AlreadyOver,
}

/// Gets notified after every session state change.
///
/// Persistence and other collaborators register here instead of being
/// wired into the session itself.
pub trait SessionObserver: std::fmt::Debug {
    /// Called with the new state after a move or a reset.
    fn state_changed(&self, state: &SessionState);
}

/// A single-player puzzle session.
///
/// Owns the board, score, and over flag across turns; applies moves
/// through the core engine, spawns a tile after every real move, and
/// ends the run once any tile reaches the configured target.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    state: SessionState,
    rng: StdRng,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    /// Starts a fresh game with the configured starting tiles.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the configured grid has no cells.
    #[instrument(skip(config, rng), fields(rows = config.rows(), cols = config.cols()))]
    pub fn new(config: GameConfig, rng: StdRng) -> Result<Self, BoardError> {
        info!(
            win_value = config.win_value(),
            "Creating new game session"
        );
        let board = Board::empty(*config.rows(), *config.cols())?;
        let mut session = Self {
            config,
            state: SessionState {
                board,
                score: 0,
                over: false,
            },
            rng,
            observers: Vec::new(),
        };
        session.place_starting_tiles();
        Ok(session)
    }

    /// Resumes from a saved state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the saved board fails validation.
    #[instrument(skip(config, state, rng), fields(score = state.score, over = state.over))]
    pub fn restore(
        config: GameConfig,
        state: SessionState,
        rng: StdRng,
    ) -> Result<Self, BoardError> {
        state.board.validate()?;
        info!(score = state.score, over = state.over, "Resuming saved game");
        Ok(Self {
            config,
            state,
            rng,
            observers: Vec::new(),
        })
    }

    /// Resumes from a saved state when one is usable, otherwise starts
    /// a fresh game.
    ///
    /// A missing snapshot or one whose board fails validation falls
    /// back to [`GameSession::new`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] only if the fresh-game fallback itself
    /// cannot build a board.
    #[instrument(skip(config, saved, rng))]
    pub fn restore_or_new(
        config: GameConfig,
        saved: Option<SessionState>,
        rng: StdRng,
    ) -> Result<Self, BoardError> {
        if let Some(state) = saved {
            if let Err(e) = state.board.validate() {
                warn!(error = %e, "Saved board failed validation; starting fresh");
            } else {
                return Self::restore(config, state, rng);
            }
        }
        Self::new(config, rng)
    }

    /// Applies one directional move.
    ///
    /// Input is ignored once the run is over, and when the move would
    /// not change the board. After a real move a new tile spawns, the
    /// score grows by the merge total, and the run ends if any tile
    /// reached the target value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the current board fails validation.
    #[instrument(skip(self), fields(direction = %direction, score = self.state.score))]
    pub fn apply_move(&mut self, direction: Direction) -> Result<TurnOutcome, BoardError> {
        if self.state.over {
            debug!("Run is over; ignoring input");
            return Ok(TurnOutcome::AlreadyOver);
        }

        let outcome = shift(&self.state.board, direction)?;
        if !outcome.moved {
            debug!("Move would not change the board; ignoring");
            return Ok(TurnOutcome::Unmoved);
        }

        let mut board = outcome.board;
        if let Some((grown, _)) = spawn_random_tile(&board, &mut self.rng) {
            board = grown;
        }

        self.state.board = board;
        self.state.score += outcome.gained;

        let target = *self.config.win_value();
        if self.state.board.max_tile().is_some_and(|v| v >= target) {
            info!(score = self.state.score, target, "Target tile reached; run over");
            self.state.over = true;
        }

        info!(
            gained = outcome.gained,
            score = self.state.score,
            over = self.state.over,
            "Move applied"
        );
        self.notify();
        Ok(TurnOutcome::Moved {
            gained: outcome.gained,
        })
    }

    /// Abandons the current run and starts a new one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the configured grid has no cells.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), BoardError> {
        info!("Resetting session");
        self.state = SessionState {
            board: Board::empty(*self.config.rows(), *self.config.cols())?,
            score: 0,
            over: false,
        };
        self.place_starting_tiles();
        self.notify();
        Ok(())
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True if at least one direction would still change the board.
    ///
    /// Query only: a stuck board does not end the run, it just makes
    /// every input a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the current board fails validation.
    #[instrument(skip(self))]
    pub fn has_moves(&self) -> Result<bool, BoardError> {
        for direction in Direction::ALL {
            if shift(&self.state.board, direction)?.moved {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Registers an observer notified after each state change.
    pub fn observe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    fn place_starting_tiles(&mut self) {
        for _ in 0..*self.config.starting_tiles() {
            match spawn_random_tile(&self.state.board, &mut self.rng) {
                Some((board, spawn)) => {
                    debug!(
                        row = spawn.row,
                        col = spawn.col,
                        value = spawn.value,
                        "Placed starting tile"
                    );
                    self.state.board = board;
                }
                None => break,
            }
        }
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.state_changed(&self.state);
        }
    }
}

/// Builds the session RNG: seeded for reproducible runs, entropy
/// otherwise.
#[instrument]
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "Using seeded RNG");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
