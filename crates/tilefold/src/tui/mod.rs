//! Terminal interface: event loop and rendering.

mod app;
mod ui;

pub use app::App;

use crate::input::direction_for_key;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use tracing::info;

/// Runs the interactive game loop until the player quits.
///
/// Takes over the terminal (raw mode, alternate screen) and restores
/// it before returning, whether the loop ended cleanly or not.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured or drawn to.
pub fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    info!("Entering game loop");
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for keyboard input
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        info!("Player quit");
                        return Ok(());
                    }
                    KeyCode::Char('r') => app.restart(),
                    code => {
                        if let Some(direction) = direction_for_key(code) {
                            app.push(direction);
                        }
                    }
                }
            }
        }
    }
}
