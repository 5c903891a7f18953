//! The narrow interface the transport controller drives.
//!
//! Positions and durations are plain seconds (`f64`) so out-of-range values
//! from the UI reach the backend untouched.

use std::path::Path;

use crate::error::LoadError;

/// Something the backend noticed on its own, reported once via `poll_event`.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// The stream played to its end.
    Finished,
    /// Decoding stopped mid-stream.
    DecodeError(String),
}

/// Opens audio resources.
pub trait AudioBackend {
    type Handle: DecodedAudio;

    fn open(&mut self, path: &Path) -> Result<Self::Handle, LoadError>;
}

/// A decoded, loaded audio resource. Starts paused at position 0.
pub trait DecodedAudio {
    /// Total length in seconds.
    fn duration(&self) -> f64;
    fn play(&mut self);
    fn pause(&mut self);
    /// Move to `position` seconds. Range handling is up to the backend.
    fn seek(&mut self, position: f64);
    fn current_position(&self) -> f64;
    fn poll_event(&mut self) -> Option<BackendEvent>;
}
