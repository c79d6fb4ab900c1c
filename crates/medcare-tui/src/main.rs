//! MedCare Terminal UI.
//!
//! Chat with the health companion from the terminal.

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medcare_core::{AssistantSession, UnsupportedRecognizer, MOOD_CHECK_INTERVAL_DAYS};

mod app;
mod backend;
mod config;
mod event;
mod state;
mod ui;

use app::App;
use config::Config;
use event::{BackendCommand, UiEvent};

/// Upper bound for `--mood-check-days`, one hundred years.
const MAX_MOOD_CHECK_DAYS: i64 = 36_500;

#[derive(Parser)]
#[command(name = "medcare-tui")]
#[command(about = "MedCare health companion chat")]
#[command(version)]
struct Cli {
    /// Name the assistant greets you by
    #[arg(short, long, default_value = "John")]
    name: String,

    /// Simulated thinking time before each reply, in milliseconds
    #[arg(long, default_value = "1500")]
    thinking_delay_ms: u64,

    /// Delay after start before the mood check-in, in milliseconds
    #[arg(long, default_value = "3000")]
    mood_check_delay_ms: u64,

    /// Days between mood check-ins (0 to 36500)
    #[arg(long, default_value_t = MOOD_CHECK_INTERVAL_DAYS, value_parser = clap::value_parser!(i64).range(0..=MAX_MOOD_CHECK_DAYS))]
    mood_check_days: i64,

    /// Never offer the mood check-in
    #[arg(long)]
    no_mood_check: bool,

    /// When you were last checked in on (RFC 3339, e.g. 2024-05-01T09:00:00Z)
    #[arg(long)]
    last_mood_check: Option<DateTime<Utc>>,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, default_value = "/tmp/medcare-tui.log")]
    log_file: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            user_name: cli.name,
            thinking_delay: Duration::from_millis(cli.thinking_delay_ms),
            mood_check: !cli.no_mood_check,
            mood_check_delay: Duration::from_millis(cli.mood_check_delay_ms),
            mood_check_interval: chrono::Duration::days(cli.mood_check_days),
            last_mood_check: cli.last_mood_check,
            log_file: cli.log_file,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from(Cli::parse());

    // Write logs to a file to avoid terminal interference
    if let Ok(file) = std::fs::File::create(&config.log_file) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("medcare_tui=debug,medcare_core=debug"));
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter(filter)
            .with_ansi(false)
            .init();
    }

    info!(user = %config.user_name, "Starting MedCare TUI");

    // Create channels for UI <-> backend communication
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(100);
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(100);

    // The runtime is built here so a failure is reported before the terminal is taken over
    let rt = tokio::runtime::Runtime::new()?;
    let session = AssistantSession::new(config.user_name.clone()).with_notifier(backend::LogNotifier);
    let backend_config = config.clone();
    let bg_handle = std::thread::spawn(move || {
        rt.block_on(backend::run_backend(session, backend_config, ui_tx, cmd_rx));
    });

    // Initialize terminal (enters alternate screen, enables raw mode)
    let terminal = ratatui::init();

    let mut app = App::new(&config.user_name, ui_rx, cmd_tx, Box::new(UnsupportedRecognizer));
    let result = app.run(terminal);

    // Restore terminal (exits alternate screen, disables raw mode)
    ratatui::restore();

    // Dropping the command sender lets the backend stop even if the UI loop failed
    drop(app);

    // Wait for background thread to finish
    let _ = bg_handle.join();

    info!("TUI shutdown complete");

    result.map_err(|e| e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_check_days_range() {
        let cli = Cli::try_parse_from(["medcare-tui", "--mood-check-days", "30"]).unwrap();
        let config = Config::from(cli);
        assert_eq!(config.mood_check_interval, chrono::Duration::days(30));

        assert!(Cli::try_parse_from(["medcare-tui", "--mood-check-days", "-1"]).is_err());
        assert!(Cli::try_parse_from(["medcare-tui", "--mood-check-days", "1000000000"]).is_err());
    }

    #[test]
    fn test_defaults_match_config() {
        let config = Config::from(Cli::try_parse_from(["medcare-tui"]).unwrap());
        let defaults = Config::default();
        assert_eq!(config.user_name, defaults.user_name);
        assert_eq!(config.thinking_delay, defaults.thinking_delay);
        assert_eq!(config.mood_check_interval, defaults.mood_check_interval);
        assert!(config.mood_check);
    }
}
