//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a puzzle run.
///
/// Every field has a default matching the classic small-board game:
/// a 4x4 grid, two starting tiles, and a run that ends at 128.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of grid rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Number of grid columns.
    #[serde(default = "default_cols")]
    cols: usize,

    /// Tile value that ends the run once any cell reaches it.
    #[serde(default = "default_win_value")]
    win_value: u32,

    /// Tiles placed when a fresh game starts.
    #[serde(default = "default_starting_tiles")]
    starting_tiles: usize,
}

#[instrument]
fn default_rows() -> usize {
    4
}

#[instrument]
fn default_cols() -> usize {
    4
}

#[instrument]
fn default_win_value() -> u32 {
    128
}

#[instrument]
fn default_starting_tiles() -> usize {
    2
}

impl GameConfig {
    /// Creates a configuration with explicit values.
    #[instrument]
    pub fn new(rows: usize, cols: usize, win_value: u32, starting_tiles: usize) -> Self {
        Self {
            rows,
            cols,
            win_value,
            starting_tiles,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or
    /// describes an unplayable game.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            rows = config.rows,
            cols = config.cols,
            win_value = config.win_value,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks the settings describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero-sized grid, a starting tile
    /// count the grid cannot hold, or a target no spawn could reach.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::new(format!(
                "Grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.starting_tiles > self.rows * self.cols {
            return Err(ConfigError::new(format!(
                "{} starting tiles cannot fit a {}x{} grid",
                self.starting_tiles, self.rows, self.cols
            )));
        }
        if self.win_value < 4 {
            return Err(ConfigError::new(format!(
                "Target tile {} is below the smallest merge result",
                self.win_value
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            win_value: default_win_value(),
            starting_tiles: default_starting_tiles(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_the_classic_game() {
        let config = GameConfig::default();
        assert_eq!(*config.rows(), 4);
        assert_eq!(*config.cols(), 4);
        assert_eq!(*config.win_value(), 128);
        assert_eq!(*config.starting_tiles(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: GameConfig = toml::from_str("win_value = 2048").expect("Parse failed");
        assert_eq!(*config.win_value(), 2048);
        assert_eq!(*config.rows(), 4);
        assert_eq!(*config.starting_tiles(), 2);
    }

    #[test]
    fn test_zero_sized_grid_rejected() {
        let config = GameConfig::new(0, 4, 128, 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overfull_start_rejected() {
        let config = GameConfig::new(2, 2, 128, 5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unreachable_target_rejected() {
        let config = GameConfig::new(4, 4, 2, 2);
        assert!(config.validate().is_err());
    }
}
