// src/discovery/walker.rs

use glob::Pattern;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regular files under `dir`, sorted by path within each directory.
///
/// Without `recursive` only the immediate children are listed. Unreadable
/// entries are logged and skipped.
pub(super) fn walk_directory(dir: &Path, recursive: bool, exclude: &[Pattern]) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
        debug!("Listing {} (max depth: 1)", dir.display());
    } else {
        debug!("Walking {} recursively", dir.display());
    }

    walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| !is_excluded(path, exclude))
        .collect()
}

/// True if the file name or the whole path matches any pattern.
pub(super) fn is_excluded(path: &Path, exclude: &[Pattern]) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let full = path.to_string_lossy();
    let excluded = exclude
        .iter()
        .any(|p| p.matches(&name) || p.matches(&full));
    if excluded {
        debug!("Excluded: {}", path.display());
    }
    excluded
}
