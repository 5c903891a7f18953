use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crate::artwork::{ArtworkFetcher, ArtworkReady, ArtworkRequest};
use crate::audio::{AudioBackend, BackendEvent, DecodedAudio};
use crate::error::TransportError;
use crate::library::{AssetLocator, Track};

use super::state::{DisplayState, PlayerState, Subscribers, TransportEvent};
use super::timefmt::format_time;
use super::timer::RefreshTimer;

/// The live decoded audio for the loaded track.
struct PlaybackSession<H> {
    audio: H,
    /// Bumped on every load; artwork results carry it back.
    generation: u64,
    duration: f64,
    artwork_request: Option<ArtworkRequest>,
}

/// Owns the track index, the single playback session and the refresh timer.
///
/// All methods are meant to be called from one thread (the UI loop); artwork
/// results produced elsewhere come back through [`apply_artwork`].
///
/// [`apply_artwork`]: TransportController::apply_artwork
pub struct TransportController<B: AudioBackend> {
    tracks: Vec<Track>,
    locator: AssetLocator,
    backend: B,
    fetcher: Box<dyn ArtworkFetcher>,

    current_index: usize,
    session: Option<PlaybackSession<B::Handle>>,
    next_generation: u64,
    timer: RefreshTimer,

    display: DisplayState,
    subscribers: Subscribers,
}

impl<B: AudioBackend> TransportController<B> {
    pub fn new(
        tracks: Vec<Track>,
        locator: AssetLocator,
        backend: B,
        fetcher: Box<dyn ArtworkFetcher>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            tracks,
            locator,
            backend,
            fetcher,
            current_index: 0,
            session: None,
            next_generation: 0,
            timer: RefreshTimer::new(refresh_interval),
            display: DisplayState::default(),
            subscribers: Subscribers::default(),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> PlayerState {
        self.display.state
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn timer_active(&self) -> bool {
        self.timer.is_active()
    }

    /// How long the UI loop may sleep before the next tick is due.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    pub fn subscribe(&mut self) -> Receiver<TransportEvent> {
        self.subscribers.subscribe()
    }

    /// Open the track at `index` and make it the active session, paused at 0.
    ///
    /// On failure nothing changes: the previous session (if any) stays loaded.
    pub fn load_track(&mut self, index: usize) -> Result<(), TransportError> {
        let count = self.tracks.len();
        let track = self
            .tracks
            .get(index)
            .cloned()
            .ok_or(TransportError::IndexOutOfRange { index, count })?;

        let path = self.locator.locate(&track);
        let audio = self
            .backend
            .open(&path)
            .map_err(|source| TransportError::LoadFailure {
                index,
                name: track.name.clone(),
                source,
            })?;

        // Switching tracks: the old session's timer and pending artwork go away.
        self.timer.stop();
        if let Some(old) = self.session.take() {
            if let Some(req) = &old.artwork_request {
                tracing::trace!(generation = req.generation(), "cancelling artwork fetch");
                req.cancel();
            }
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        let duration = audio.duration();
        let artwork_request = Some(self.fetcher.request(path.clone(), generation));

        self.current_index = index;
        self.session = Some(PlaybackSession {
            audio,
            generation,
            duration,
            artwork_request,
        });

        tracing::info!(index, track = %track.name, path = %path.display(), duration, "loaded track");

        self.display.track_name = track.name;
        self.display.artwork = None;
        self.display.error = None;
        self.display.slider_max = duration;
        self.display.duration_label = format_time(duration);
        self.subscribers.emit(TransportEvent::TrackLoaded { index });
        self.set_state(PlayerState::Paused);
        self.refresh_display();
        Ok(())
    }

    /// Start or resume output and the refresh timer.
    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    pub fn play_at(&mut self, now: Instant) {
        let finished = self.display.state == PlayerState::Finished;
        let Some(session) = self.session.as_mut() else {
            tracing::debug!("play ignored, nothing loaded");
            return;
        };
        if finished {
            // A finished stream starts over.
            session.audio.seek(0.0);
        }
        session.audio.play();
        self.timer.start(now);
        self.display.error = None;
        self.set_state(PlayerState::Playing);
    }

    /// Halt output, stop the timer and show the exact paused position.
    pub fn pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.audio.pause();
        self.timer.stop();
        if self.display.state == PlayerState::Playing {
            self.set_state(PlayerState::Paused);
        }
        self.refresh_display();
    }

    /// Play when not playing, pause otherwise.
    pub fn toggle(&mut self) {
        if self.display.state == PlayerState::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Load the following track (wrapping) and start playing it.
    ///
    /// Playback always resumes, even if the player was paused before.
    pub fn next(&mut self) -> Result<(), TransportError> {
        let count = self.tracks.len();
        if count == 0 {
            return Err(TransportError::IndexOutOfRange { index: 0, count });
        }
        self.load_track((self.current_index + 1) % count)?;
        self.play();
        Ok(())
    }

    /// Load the preceding track (wrapping) and start playing it.
    pub fn previous(&mut self) -> Result<(), TransportError> {
        let count = self.tracks.len();
        if count == 0 {
            return Err(TransportError::IndexOutOfRange { index: 0, count });
        }
        self.load_track((self.current_index + count - 1) % count)?;
        self.play();
        Ok(())
    }

    /// Jump to `position` seconds. Values are passed to the backend unclamped.
    ///
    /// Seeking a finished track parks it at the new position, so the next
    /// `play` resumes there instead of starting over.
    pub fn seek(&mut self, position: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        tracing::debug!(position, "seek");
        session.audio.seek(position);
        if self.display.state == PlayerState::Finished {
            self.set_state(PlayerState::Paused);
        }
        self.refresh_display();
    }

    /// Refresh-timer callback: mirror the backend position into the display.
    pub fn on_tick(&mut self) {
        if !self.timer.is_active() {
            return;
        }
        self.refresh_display();
    }

    /// The backend reached the end of the track. No auto-advance.
    pub fn on_playback_finished(&mut self) {
        self.timer.stop();
        self.refresh_display();
        self.set_state(PlayerState::Finished);
    }

    /// The backend stopped on a decode error mid-stream.
    pub fn on_decode_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(index = self.current_index, error = %message, "playback stopped on decode error");
        self.timer.stop();
        self.refresh_display();
        self.display.error = Some(message);
        self.set_state(PlayerState::Finished);
    }

    /// Apply an artwork result if it belongs to the current session.
    ///
    /// Returns false for stale results, which are discarded.
    pub fn apply_artwork(&mut self, ready: ArtworkReady) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if ready.generation != session.generation {
            tracing::debug!(
                got = ready.generation,
                current = session.generation,
                "discarding stale artwork"
            );
            return false;
        }
        session.artwork_request = None;
        self.display.artwork = ready.artwork;
        self.subscribers.emit(TransportEvent::ArtworkChanged);
        true
    }

    /// Drive the timer and pick up backend events. Called every loop turn.
    pub fn poll(&mut self, now: Instant) {
        if self.timer.fire_if_due(now) {
            self.on_tick();
        }

        let event = self.session.as_mut().and_then(|s| s.audio.poll_event());
        match event {
            Some(BackendEvent::Finished) => self.on_playback_finished(),
            Some(BackendEvent::DecodeError(msg)) => self.on_decode_error(msg),
            None => {}
        }
    }

    fn refresh_display(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let position = session.audio.current_position();
        self.display.position = position;
        self.display.slider_max = session.duration;
        self.display.elapsed_label = format_time(position);
        self.display.duration_label = format_time(session.duration);
        self.subscribers
            .emit(TransportEvent::PositionRefreshed(position));
    }

    fn set_state(&mut self, state: PlayerState) {
        if self.display.state != state {
            self.display.state = state;
            self.subscribers.emit(TransportEvent::StateChanged(state));
        }
    }
}
