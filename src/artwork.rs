//! Embedded artwork: extraction with `lofty` and background fetching.

mod extract;
mod fetch;

pub use extract::Artwork;
pub use fetch::{ArtworkFetcher, ArtworkReady, ArtworkRequest, ThreadArtworkFetcher};

#[cfg(test)]
mod tests;
