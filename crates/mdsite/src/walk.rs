//! Directory traversal for page sources and static assets.

use std::path::Path;

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::{GenerateError, Result};

/// Entries below `root` in file-name order. Symlinks are followed; one that
/// points back at an ancestor directory is skipped.
pub(crate) fn walk(root: &Path) -> impl Iterator<Item = Result<DirEntry>> + '_ {
    WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => Some(Ok(entry)),
            Err(err) if err.loop_ancestor().is_some() => {
                warn!(path = ?err.path(), "skipping symlink loop");
                None
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                Some(Err(GenerateError::Read {
                    path,
                    source: err.into(),
                }))
            }
        })
}
