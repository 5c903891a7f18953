use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/minitune/config.toml` or `~/.config/minitune/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MINITUNE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub transport: TransportSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory holding the bundled audio files.
    pub assets_dir: PathBuf,
    /// Optional cap on how deep the locator searches below `assets_dir`.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            max_depth: Some(4),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Period of the UI refresh timer while playing (milliseconds).
    pub refresh_interval_ms: u64,
    /// Track loaded automatically at startup.
    pub start_index: usize,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 100,
            start_index: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Distance in seconds of the `H` / `L` seek keys.
    pub seek_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { seek_seconds: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ minitune ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file. Logging is off when unset since the terminal belongs to the UI.
    pub file: Option<PathBuf>,
    /// Default filter directive, overridden by `MINITUNE_LOG`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}
