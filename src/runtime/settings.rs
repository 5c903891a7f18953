use crate::config;

/// Settings to run with, plus the reason defaults were used instead of the
/// user's configuration, if they were.
///
/// The reason goes to stderr right away and is logged again once the
/// subscriber is up, since logging itself depends on the settings.
pub fn load_settings() -> (config::Settings, Option<String>) {
    let fallback = match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => return (s, None),
            Err(msg) => format!("invalid config, using defaults: {msg}"),
        },
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => format!("failed to load config, using defaults: {e}"),
    };

    eprintln!("minitune: {fallback}");
    (config::Settings::default(), Some(fallback))
}
