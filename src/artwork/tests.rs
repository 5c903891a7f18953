use super::extract::{first_usable, read_artwork};
use super::*;
use std::sync::mpsc;
use std::time::Duration;

fn art(bytes: &[u8]) -> Artwork {
    Artwork {
        data: bytes.to_vec(),
        mime_type: Some("image/png".to_string()),
    }
}

#[test]
fn first_usable_skips_empty_pictures() {
    let pics = vec![art(b""), art(b"\x89PNG"), art(b"second")];
    assert_eq!(first_usable(pics), Some(art(b"\x89PNG")));
    assert_eq!(first_usable(vec![art(b"")]), None);
    assert_eq!(first_usable(Vec::new()), None);
}

#[test]
fn read_artwork_on_untagged_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Shine.mp3");
    std::fs::write(&path, b"not a real mp3").unwrap();
    assert!(read_artwork(&path).is_empty());
    assert!(read_artwork(&dir.path().join("missing.mp3")).is_empty());
}

#[test]
fn cancel_is_visible_through_clones() {
    let request = ArtworkRequest::new(7);
    let clone = request.clone();
    assert!(!clone.is_cancelled());
    request.cancel();
    assert!(clone.is_cancelled());
    assert_eq!(clone.generation(), 7);
}

#[test]
fn thread_fetcher_posts_tagged_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Shine.mp3");
    std::fs::write(&path, b"not a real mp3").unwrap();

    let (tx, rx) = mpsc::channel();
    let fetcher = ThreadArtworkFetcher::new(tx);
    let request = fetcher.request(path, 3);
    assert_eq!(request.generation(), 3);

    let ready = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(ready.generation, 3);
    assert!(ready.artwork.is_none());
}
