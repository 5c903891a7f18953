//! Optional file logging via `tracing-subscriber`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Environment variable that overrides `logging.level`.
pub const LOG_ENV: &str = "MINITUNE_LOG";

/// Install the global subscriber when a log file is configured.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init(settings: &LoggingSettings) -> Result<bool, Box<dyn std::error::Error>> {
    let Some(path) = &settings.file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to install logger: {e}"))?;

    Ok(true)
}
