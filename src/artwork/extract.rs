use std::path::Path;

use lofty::file::TaggedFileExt;

/// An embedded picture taken from a track's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub data: Vec<u8>,
    pub mime_type: Option<String>,
}

impl Artwork {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Read every embedded picture in `path`, primary tag first.
///
/// Unreadable files simply have no artwork.
pub fn read_artwork(path: &Path) -> Vec<Artwork> {
    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no readable tags");
            return Vec::new();
        }
    };

    let primary = tagged.primary_tag();
    let others = tagged
        .tags()
        .iter()
        .filter(|t| primary.is_none_or(|p| p.tag_type() != t.tag_type()));

    primary
        .into_iter()
        .chain(others)
        .flat_map(|tag| tag.pictures())
        .map(|p| Artwork {
            data: p.data().to_vec(),
            mime_type: p.mime_type().map(|m| m.as_str().to_string()),
        })
        .collect()
}

/// The first picture that actually carries image bytes.
pub fn first_usable(pictures: Vec<Artwork>) -> Option<Artwork> {
    pictures.into_iter().find(|a| !a.is_empty())
}
