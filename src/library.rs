//! The bundled track list and the asset locator.
//!
//! Tracks are fixed at startup; the locator turns a track into a file path
//! inside the configured asset directory.

mod locate;
mod model;

pub use locate::AssetLocator;
pub use model::{Track, default_tracks};
