/// One playable item, identified by its display name and file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub extension: String,
}

impl Track {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
        }
    }

    /// Build a track from a bundled file name such as `"Let It In.mp3"`.
    ///
    /// The extension is everything after the last dot; a name without a dot
    /// has an empty extension.
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rsplit_once('.') {
            Some((name, ext)) => Self::new(name, ext),
            None => Self::new(file_name, ""),
        }
    }

    /// Name used to look up the bundled resource: whitespace removed.
    pub fn resource_name(&self) -> String {
        self.name.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Resource name plus extension, e.g. `"LetItIn.mp3"`.
    pub fn resource_file_name(&self) -> String {
        if self.extension.is_empty() {
            self.resource_name()
        } else {
            format!("{}.{}", self.resource_name(), self.extension)
        }
    }
}

const BUNDLED: [&str; 3] = ["Paper Thin.mp3", "Shine.mp3", "Let It In.mp3"];

/// The fixed, ordered track list shipped with the player.
pub fn default_tracks() -> Vec<Track> {
    BUNDLED.iter().map(|f| Track::from_file_name(f)).collect()
}
