use std::{env, path::PathBuf};

use tracing_subscriber::EnvFilter;

use super::schema::Settings;
use crate::library::default_tracks;

/// Longest jump the `H` / `L` keys may be configured for (one day).
pub const MAX_SEEK_SECONDS: u64 = 24 * 60 * 60;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `MINITUNE__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MINITUNE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.transport.refresh_interval_ms == 0 {
            return Err("transport.refresh_interval_ms must be >= 1".to_string());
        }
        let count = default_tracks().len();
        if self.transport.start_index >= count {
            return Err(format!(
                "transport.start_index must be < {count}, got {}",
                self.transport.start_index
            ));
        }
        if self.controls.seek_seconds == 0 || self.controls.seek_seconds > MAX_SEEK_SECONDS {
            return Err(format!(
                "controls.seek_seconds must be between 1 and {MAX_SEEK_SECONDS}, got {}",
                self.controls.seek_seconds
            ));
        }
        if let Some(dir) = self.library.assets_dir.to_str() {
            if dir.trim().is_empty() {
                return Err("library.assets_dir must not be empty".to_string());
            }
        }
        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(format!(
                "logging.level is not a valid filter: {:?}",
                self.logging.level
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `MINITUNE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MINITUNE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/minitune/config.toml`
/// or `~/.config/minitune/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("minitune").join("config.toml"))
}
