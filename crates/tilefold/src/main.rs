//! Tilefold - terminal sliding-tile merge puzzle.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tilefold::{
    App, Autosave, Cli, Command, GameConfig, GameSession, SaveFile, run_tui, session_rng,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, save, seed } => run_play(config, save, seed),
        Command::Show { save } => run_show(save),
        Command::Reset { save } => run_reset(save),
    }
}

/// Run the interactive game
#[instrument(skip_all, fields(config_path = %config_path.display(), save_path = %save_path.display()))]
fn run_play(config_path: PathBuf, save_path: PathBuf, seed: Option<u64>) -> Result<()> {
    // Silent unless RUST_LOG is set; log lines would tear the screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting tilefold");

    let config = load_config(&config_path)?;
    let save_file = SaveFile::new(&save_path);

    let saved = match save_file.load() {
        Ok(saved) => saved.map(|s| s.state),
        Err(e) => {
            warn!(error = %e, "Save file unreadable; starting fresh");
            None
        }
    };

    let mut session = GameSession::restore_or_new(config, saved, session_rng(seed))?;
    session.observe(Box::new(Autosave::new(save_file.clone())));

    // Mirror the autosave contract from the first frame on
    if let Err(e) = save_file.save(session.state()) {
        warn!(error = %e, "Initial save failed");
    }

    run_tui(App::new(session))
}

/// Print the saved game state
fn run_show(save_path: PathBuf) -> Result<()> {
    init_cli_tracing();

    let save_file = SaveFile::new(&save_path);
    match save_file.load()? {
        Some(saved) => {
            println!("saved at {}", saved.saved_at);
            println!(
                "score {}{}",
                saved.state.score,
                if saved.state.over { "  (game over)" } else { "" }
            );
            println!("{}", saved.state.board);
        }
        None => println!("No saved game at {}", save_path.display()),
    }
    Ok(())
}

/// Delete the saved game
fn run_reset(save_path: PathBuf) -> Result<()> {
    init_cli_tracing();

    let save_file = SaveFile::new(&save_path);
    save_file.clear()?;
    println!("Cleared save at {}", save_path.display());
    Ok(())
}

#[instrument(skip(path))]
fn load_config(path: &Path) -> Result<GameConfig> {
    if path.exists() {
        Ok(GameConfig::from_file(path)?)
    } else {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Ok(GameConfig::default())
    }
}

fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
