//! Companion TUI configuration.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use medcare_core::MOOD_CHECK_INTERVAL_DAYS;

/// Companion TUI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Display name used in greetings and templates.
    pub user_name: String,

    /// Simulated time the assistant spends "thinking" before replying.
    pub thinking_delay: Duration,

    /// Whether to offer the weekly mood check-in.
    pub mood_check: bool,

    /// Delay after start before the mood check-in appears.
    pub mood_check_delay: Duration,

    /// Minimum time between mood check-ins.
    pub mood_check_interval: chrono::Duration,

    /// When the user was last checked in on, if known.
    pub last_mood_check: Option<DateTime<Utc>>,

    /// Log file (the terminal is owned by the UI).
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: "John".to_string(),
            thinking_delay: Duration::from_millis(1500),
            mood_check: true,
            mood_check_delay: Duration::from_millis(3000),
            mood_check_interval: chrono::Duration::days(MOOD_CHECK_INTERVAL_DAYS),
            last_mood_check: None,
            log_file: PathBuf::from("/tmp/medcare-tui.log"),
        }
    }
}
