use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;

use super::extract::{Artwork, first_usable, read_artwork};

/// Result of one artwork fetch, tagged with the session it was requested for.
#[derive(Debug, Clone)]
pub struct ArtworkReady {
    pub generation: u64,
    pub artwork: Option<Artwork>,
}

/// Handle to an in-flight fetch.
#[derive(Debug, Clone)]
pub struct ArtworkRequest {
    generation: u64,
    cancelled: Arc<AtomicBool>,
}

impl ArtworkRequest {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ask the fetch not to deliver its result.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Starts artwork extraction without blocking the caller.
pub trait ArtworkFetcher {
    fn request(&self, path: PathBuf, generation: u64) -> ArtworkRequest;
}

/// Extracts artwork on a background thread and posts the result to `tx`.
///
/// The receiving end is drained by the UI loop, so results are applied on
/// the thread that owns the display state.
pub struct ThreadArtworkFetcher {
    tx: Sender<ArtworkReady>,
}

impl ThreadArtworkFetcher {
    pub fn new(tx: Sender<ArtworkReady>) -> Self {
        Self { tx }
    }
}

impl ArtworkFetcher for ThreadArtworkFetcher {
    fn request(&self, path: PathBuf, generation: u64) -> ArtworkRequest {
        let request = ArtworkRequest::new(generation);
        let handle = request.clone();
        let tx = self.tx.clone();

        thread::spawn(move || {
            let artwork = first_usable(read_artwork(&path));
            if handle.is_cancelled() {
                tracing::trace!(generation, "artwork fetch cancelled");
                return;
            }
            // The receiver is gone when the player is shutting down.
            let _ = tx.send(ArtworkReady {
                generation,
                artwork,
            });
        });

        request
    }
}
