//! Command-line interface for tilefold.

use clap::{Parser, Subcommand};

/// Tilefold - terminal sliding-tile merge puzzle
#[derive(Parser, Debug)]
#[command(name = "tilefold")]
#[command(about = "Terminal sliding-tile merge puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game in the terminal
    Play {
        /// Path to the game configuration file
        #[arg(short, long, default_value = "tilefold.toml")]
        config: std::path::PathBuf,

        /// Path to the save file
        #[arg(long, default_value = "tilefold_save.json")]
        save: std::path::PathBuf,

        /// Seed for deterministic tile spawning
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the saved game without starting the interface
    Show {
        /// Path to the save file
        #[arg(long, default_value = "tilefold_save.json")]
        save: std::path::PathBuf,
    },

    /// Delete the saved game
    Reset {
        /// Path to the save file
        #[arg(long, default_value = "tilefold_save.json")]
        save: std::path::PathBuf,
    },
}
