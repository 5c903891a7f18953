//! Audio playback: the backend interface and its `rodio` implementation.

mod player;
mod sink;
mod types;

pub use player::RodioBackend;
pub use types::{AudioBackend, BackendEvent, DecodedAudio};
