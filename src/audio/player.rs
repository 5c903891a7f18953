use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::error::LoadError;

use super::sink::{create_sink_at, probe_duration};
use super::types::{AudioBackend, BackendEvent, DecodedAudio};

/// How far before the known end a drained sink still counts as a clean finish.
const END_TOLERANCE_SECS: f64 = 1.0;

/// Opens files on the default output device.
pub struct RodioBackend {
    // Keep this alive for the lifetime of the backend; dropping it silences output.
    stream: OutputStream,
}

impl RodioBackend {
    pub fn open_default() -> Result<Self, String> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("no audio output device: {e}"))?;
        // rodio logs to stderr when OutputStream is dropped, which would land on
        // top of the TUI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioBackend for RodioBackend {
    type Handle = RodioAudio;

    fn open(&mut self, path: &Path) -> Result<RodioAudio, LoadError> {
        let opened = create_sink_at(self.stream.mixer(), path, Duration::ZERO)?;
        let duration = opened
            .total
            .or_else(|| probe_duration(path))
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);

        tracing::debug!(path = %path.display(), duration, "opened audio");

        Ok(RodioAudio {
            mixer: self.stream.mixer().clone(),
            path: path.to_path_buf(),
            sink: opened.sink,
            offset: Duration::ZERO,
            duration,
            playing: false,
            drained: false,
        })
    }
}

/// One loaded file. Seeking rebuilds the sink at the new offset.
pub struct RodioAudio {
    mixer: Mixer,
    path: PathBuf,
    sink: Sink,
    offset: Duration,
    duration: f64,
    playing: bool,
    drained: bool,
}

impl DecodedAudio for RodioAudio {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn play(&mut self) {
        self.playing = true;
        self.sink.play();
    }

    fn pause(&mut self) {
        self.playing = false;
        self.sink.pause();
    }

    fn seek(&mut self, position: f64) {
        let target = match seek_offset(position) {
            SeekOffset::Ignore => {
                tracing::debug!(position, "ignoring non-finite seek");
                return;
            }
            SeekOffset::At(target) => target,
            SeekOffset::PastEnd => {
                self.seek_past_end();
                return;
            }
        };

        match create_sink_at(&self.mixer, &self.path, target) {
            Ok(opened) => {
                self.sink.stop();
                if self.playing {
                    opened.sink.play();
                }
                self.sink = opened.sink;
                self.offset = target;
                self.drained = false;
            }
            Err(e) => tracing::warn!(error = %e, "seek failed, keeping current position"),
        }
    }

    fn current_position(&self) -> f64 {
        self.offset
            .checked_add(self.sink.get_pos())
            .unwrap_or(self.offset)
            .as_secs_f64()
    }

    fn poll_event(&mut self) -> Option<BackendEvent> {
        if !self.playing || self.drained || !self.sink.empty() {
            return None;
        }
        self.drained = true;
        self.playing = false;

        Some(drain_event(self.current_position(), self.duration))
    }
}

impl RodioAudio {
    /// Replace the sink with an empty one parked at the end of the track, so
    /// the next poll while playing reports `Finished`.
    fn seek_past_end(&mut self) {
        tracing::debug!("seek target beyond representable range, jumping to end");
        let sink = Sink::connect_new(&self.mixer);
        if self.playing {
            sink.play();
        } else {
            sink.pause();
        }
        self.sink.stop();
        self.sink = sink;
        self.offset = Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::ZERO);
        self.drained = false;
    }
}

#[derive(Debug, PartialEq)]
pub(super) enum SeekOffset {
    Ignore,
    At(Duration),
    /// Too far out to express as a `Duration`.
    PastEnd,
}

/// Turn a requested position into a sink offset.
///
/// Negative targets mean the start; NaN and infinities are ignored.
pub(super) fn seek_offset(position: f64) -> SeekOffset {
    if !position.is_finite() {
        return SeekOffset::Ignore;
    }
    match Duration::try_from_secs_f64(position.max(0.0)) {
        Ok(d) => SeekOffset::At(d),
        Err(_) => SeekOffset::PastEnd,
    }
}

/// Classify a sink that ran dry while playing.
///
/// Unknown durations always count as a clean finish.
pub(super) fn drain_event(position: f64, duration: f64) -> BackendEvent {
    if duration <= 0.0 || position + END_TOLERANCE_SECS >= duration {
        BackendEvent::Finished
    } else {
        BackendEvent::DecodeError(format!(
            "stream ended early at {position:.1}s of {duration:.1}s"
        ))
    }
}
