//! Checklist TUI entry point.
//!
//! Wires config, logging, and the store together, then runs the
//! terminal event loop: one event handled fully (mutation, persistence,
//! redraw) before the next is read.

use anyhow::{Context, Result};
use checklist::cli::Cli;
use checklist::collection::TaskCollection;
use checklist::config::Config;
use checklist::controller::Controller;
use checklist::store::Store;
use checklist::{logging, ui};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_or_default(),
    };
    if let Some(db) = cli.database {
        config.db_path = db;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = Some(log_file);
    }

    if let Some(log_file) = &config.log_file {
        logging::init(log_file, cli.verbose)?;
    }

    config.ensure_db_dir()?;
    let store = Store::open(&config.db_path)
        .with_context(|| format!("failed to open store {}", config.db_path.display()))?;
    let collection = TaskCollection::load(store);
    info!(tasks = collection.len(), db = %config.db_path.display(), "starting");

    let mut app = ui::App::new(Controller::new(collection));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app);

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ui::App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key, Instant::now());
                }
            }
        }

        // Fire scheduled removals whose deadline has passed.
        app.controller.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
