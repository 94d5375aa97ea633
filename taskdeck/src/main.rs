//! `TaskDeck` — terminal Kanban task tracker.
//!
//! Launches the TUI over a file-backed board store. Configuration via CLI
//! flags, environment variables, or config file
//! (`~/.config/taskdeck/config.toml`).
//!
//! ```bash
//! # Default data directory
//! cargo run --bin taskdeck
//!
//! # Keep boards somewhere else
//! cargo run --bin taskdeck -- --data-dir ./boards
//!
//! # Or via environment variable
//! TASKDECK_DATA_DIR=./boards cargo run
//! ```

use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use taskdeck::app::App;
use taskdeck::config::{AppConfig, CliArgs};
use taskdeck::storage::FileStorage;
use taskdeck::ui;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            AppConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(data_dir = %config.data_dir.display(), "taskdeck starting");

    let storage = Arc::new(FileStorage::new(config.data_dir.clone()));

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, storage, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("taskdeck exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown to
/// ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("taskdeck.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    storage: Arc<FileStorage>,
    config: &AppConfig,
) -> io::Result<()> {
    let mut app = App::new(storage);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
