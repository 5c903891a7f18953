use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::artwork::ArtworkReady;
use crate::audio::AudioBackend;
use crate::config;
use crate::transport::{TransportController, TransportEvent};
use crate::ui;

use super::keys::{Action, action_for_key, seek_target};

/// Upper bound on how long one loop turn waits for input.
const MAX_POLL: Duration = Duration::from_millis(50);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Message shown in the status line (load failures on skip).
    pub status: Option<String>,
    redraw: bool,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            status: None,
            redraw: true,
        }
    }
}

/// Main terminal event loop: applies artwork results, drives the transport
/// clock, redraws on change and handles input. Returns `Ok(())` on quit.
pub fn run<B: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    controller: &mut TransportController<B>,
    artwork_rx: &Receiver<ArtworkReady>,
    events: &Receiver<TransportEvent>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Artwork results are produced on worker threads and applied here.
        while let Ok(ready) = artwork_rx.try_recv() {
            controller.apply_artwork(ready);
        }

        controller.poll(Instant::now());

        for ev in events.try_iter() {
            match ev {
                TransportEvent::TrackLoaded { index } => tracing::debug!(index, "track loaded"),
                TransportEvent::StateChanged(s) => tracing::debug!(state = s.label(), "state changed"),
                TransportEvent::PositionRefreshed(position) => tracing::trace!(position, "position"),
                TransportEvent::ArtworkChanged => tracing::debug!("artwork changed"),
            }
            state.redraw = true;
        }

        if state.redraw {
            terminal.draw(|f| {
                ui::draw(
                    f,
                    controller.tracks(),
                    controller.current_index(),
                    controller.display(),
                    state.status.as_deref(),
                    &settings.ui,
                    &settings.controls,
                )
            })?;
            state.redraw = false;
        }

        let wait = controller
            .time_until_tick(Instant::now())
            .map_or(MAX_POLL, |d| d.min(MAX_POLL));

        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(action) = action_for_key(key, settings.controls.seek_seconds) else {
                        continue;
                    };
                    if apply_action(action, controller, state) {
                        return Ok(());
                    }
                    state.redraw = true;
                }
                Event::Resize(_, _) => state.redraw = true,
                _ => {}
            }
        }
    }
}

/// Apply `action` to the transport. Returns true when the user asked to quit.
fn apply_action<B: AudioBackend>(
    action: Action,
    controller: &mut TransportController<B>,
    state: &mut EventLoopState,
) -> bool {
    let switched = match action {
        Action::Quit => return true,
        Action::Toggle => {
            controller.toggle();
            None
        }
        Action::Play => {
            controller.play();
            None
        }
        Action::Pause => {
            controller.pause();
            None
        }
        Action::Next => Some(controller.next()),
        Action::Previous => Some(controller.previous()),
        Action::SeekBy(_) | Action::SeekTenth(_) => {
            let d = controller.display();
            if let Some(target) = seek_target(action, d.position, d.slider_max) {
                controller.seek(target);
            }
            None
        }
    };

    match switched {
        Some(Err(e)) => {
            tracing::error!(error = %e, "track switch failed");
            state.status = Some(e.to_string());
        }
        Some(Ok(())) => state.status = None,
        None => {}
    }
    false
}
