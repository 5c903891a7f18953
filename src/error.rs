//! Error types shared by the audio backend and the transport controller.

use std::path::PathBuf;

use thiserror::Error;

/// An audio resource could not be opened or decoded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// Loading a track failed. The previously loaded track (if any) stays active.
    #[error("could not load \"{name}\" (track {index}): {source}")]
    LoadFailure {
        index: usize,
        name: String,
        #[source]
        source: LoadError,
    },

    #[error("track index {index} out of range (have {count} tracks)")]
    IndexOutOfRange { index: usize, count: usize },
}
