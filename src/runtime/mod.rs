use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::artwork::{ArtworkReady, ThreadArtworkFetcher};
use crate::audio::RodioBackend;
use crate::library::{AssetLocator, default_tracks};
use crate::logging;
use crate::transport::TransportController;

mod event_loop;
mod keys;
mod settings;

#[cfg(test)]
mod tests;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();
    if let Err(e) = logging::init(&settings.logging) {
        eprintln!("minitune: logging disabled: {e}");
    }
    if let Some(reason) = fallback {
        tracing::warn!(%reason, "running with default settings");
    }

    let locator = AssetLocator::from_settings(&settings.library);
    let backend = RodioBackend::open_default()?;
    let (artwork_tx, artwork_rx) = mpsc::channel::<ArtworkReady>();

    let mut controller = TransportController::new(
        default_tracks(),
        locator,
        backend,
        Box::new(ThreadArtworkFetcher::new(artwork_tx)),
        Duration::from_millis(settings.transport.refresh_interval_ms),
    );
    let events = controller.subscribe();

    // A track that cannot be loaded at startup leaves nothing to play.
    controller.load_track(settings.transport.start_index)?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::new();
    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut controller,
        &artwork_rx,
        &events,
        &mut state,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    controller.pause();
    tracing::info!("shutting down");
    run_result
}
