//! Observable transport state: the player state machine, the display model
//! and change notifications.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::artwork::Artwork;

use super::timefmt::format_time;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// Nothing loaded yet.
    #[default]
    Idle,
    Paused,
    Playing,
    /// Playback reached the end, or stopped on a decode error.
    Finished,
}

impl PlayerState {
    pub fn label(self) -> &'static str {
        match self {
            PlayerState::Idle => "Idle",
            PlayerState::Paused => "Paused",
            PlayerState::Playing => "Playing",
            PlayerState::Finished => "Finished",
        }
    }
}

/// Everything the UI shows, written only by the controller.
#[derive(Debug, Clone)]
pub struct DisplayState {
    pub track_name: String,
    pub artwork: Option<Artwork>,
    /// Slider value in seconds.
    pub position: f64,
    /// Slider upper bound (track duration) in seconds.
    pub slider_max: f64,
    pub duration_label: String,
    pub elapsed_label: String,
    pub state: PlayerState,
    /// Last decode error reported for the current track.
    pub error: Option<String>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            track_name: String::new(),
            artwork: None,
            position: 0.0,
            slider_max: 0.0,
            duration_label: format_time(0.0),
            elapsed_label: format_time(0.0),
            state: PlayerState::Idle,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    TrackLoaded { index: usize },
    StateChanged(PlayerState),
    PositionRefreshed(f64),
    ArtworkChanged,
}

/// Fan-out of transport events to any number of receivers.
#[derive(Default)]
pub(super) struct Subscribers {
    senders: Vec<Sender<TransportEvent>>,
}

impl Subscribers {
    pub fn subscribe(&mut self) -> Receiver<TransportEvent> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Deliver `event`, dropping subscribers whose receiver is gone.
    pub fn emit(&mut self, event: TransportEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
