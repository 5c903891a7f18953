use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

/// Maps tracks to files inside the asset directory.
#[derive(Debug, Clone)]
pub struct AssetLocator {
    root: PathBuf,
    max_depth: Option<usize>,
}

impl AssetLocator {
    pub fn new(root: impl Into<PathBuf>, max_depth: Option<usize>) -> Self {
        Self {
            root: root.into(),
            max_depth,
        }
    }

    pub fn from_settings(settings: &LibrarySettings) -> Self {
        Self::new(settings.assets_dir.clone(), settings.max_depth)
    }

    /// Resolve the path for `track`.
    ///
    /// Never fails: when no matching file exists the direct child path is
    /// returned and opening it reports the problem.
    pub fn locate(&self, track: &Track) -> PathBuf {
        let wanted = track.resource_file_name();

        let mut walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name();
        if let Some(d) = self.max_depth {
            walker = walker.max_depth(d);
        }

        let found = walker
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .find(|e| e.file_name().to_str() == Some(wanted.as_str()))
            .map(|e| e.into_path());

        match found {
            Some(path) => path,
            None => {
                tracing::debug!(file = %wanted, root = %self.root.display(), "asset not found, using direct path");
                self.root.join(wanted)
            }
        }
    }
}
