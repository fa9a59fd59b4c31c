//! Tilefold - terminal sliding-tile merge puzzle.
//!
//! Wraps the pure move engine from `tilefold_core` in everything a
//! playable game needs.
//!
//! # Architecture
//!
//! - **Session**: owns board, score, and over flag across turns
//! - **Spawn**: places a random tile after every real move
//! - **Storage**: JSON save file, kept fresh by an autosave observer
//! - **TUI**: ratatui screen driven by arrow keys
//!
//! # Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tilefold::{App, GameConfig, GameSession, run_tui};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let session = GameSession::new(config, StdRng::seed_from_u64(7))?;
//! run_tui(App::new(session))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod input;
mod session;
mod spawn;
mod storage;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Input mapping
pub use input::direction_for_key;

// Crate-level exports - Session management
pub use session::{GameSession, SessionObserver, SessionState, TurnOutcome, session_rng};

// Crate-level exports - Tile spawning
pub use spawn::{Spawn, spawn_random_tile};

// Crate-level exports - Persistence
pub use storage::{Autosave, SaveFile, SavedGame, StorageError};

// Crate-level exports - Terminal interface
pub use tui::{App, run_tui};

// Re-exported core types
pub use tilefold_core::{Board, BoardError, Cell, Direction};
