//! Save-file persistence for game sessions.

use crate::session::{SessionObserver, SessionState};
use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// On-disk snapshot of a session.
///
/// The session state is flattened so the file reads as one object:
/// board, score, over flag, and the write timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// The persisted session state.
    #[serde(flatten)]
    pub state: SessionState,
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
}

/// JSON save file at a fixed path.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    /// Creates a handle for the save file at the given path.
    ///
    /// The file itself is only touched by [`SaveFile::load`],
    /// [`SaveFile::save`], and [`SaveFile::clear`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this handle reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved game, or `None` when no save exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file exists but cannot be read
    /// or parsed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<SavedGame>, StorageError> {
        if !self.path.exists() {
            debug!("No save file present");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let saved: SavedGame = serde_json::from_str(&content)?;

        info!(saved_at = %saved.saved_at, score = saved.state.score, "Save loaded");
        Ok(Some(saved))
    }

    /// Writes the state as the new save, stamping the current time.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the write fails.
    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    pub fn save(&self, state: &SessionState) -> Result<(), StorageError> {
        let saved = SavedGame {
            state: state.clone(),
            saved_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&saved)?;
        std::fs::write(&self.path, content)?;

        debug!(score = state.score, over = state.over, "Save written");
        Ok(())
    }

    /// Deletes the save file if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file exists but cannot be
    /// removed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            info!("Save file removed");
        } else {
            debug!("No save file to remove");
        }
        Ok(())
    }
}

/// Observer that writes every session state change to a save file.
///
/// Write failures are logged and swallowed; a failed autosave must
/// not interrupt play.
#[derive(Debug, Clone)]
pub struct Autosave {
    file: SaveFile,
}

impl Autosave {
    /// Creates an autosaver writing to the given save file.
    pub fn new(file: SaveFile) -> Self {
        Self { file }
    }
}

impl SessionObserver for Autosave {
    fn state_changed(&self, state: &SessionState) {
        if let Err(e) = self.file.save(state) {
            warn!(error = %e, path = %self.file.path().display(), "Autosave failed");
        }
    }
}

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Storage error: {} at {}:{}", message, file, line)]
pub struct StorageError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StorageError {
    /// Creates a new storage error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StorageError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
