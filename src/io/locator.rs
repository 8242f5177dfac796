//! Module descriptor location.
//!
//! Walks the root tree pruning hidden directories and the configured skip
//! list, and returns descriptor paths in traversal order. Test-module
//! descriptors are excluded by filename pattern, not content.

use crate::config::SkipList;
use crate::errors::{Result, ScanError};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Finds all files under `root` carrying the descriptor extension, pruning
/// skipped directory subtrees entirely. Any traversal error aborts the
/// locate operation.
pub fn locate_modules(root: &Path, ext: &str, skip: &SkipList) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !should_prune(entry, skip));

    let mut modules = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Locate {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_dir() && matches_descriptor(&entry.file_name().to_string_lossy(), ext) {
            modules.push(entry.into_path());
        }
    }
    Ok(modules)
}

/// Pruning is a directory-name match, never a path-substring match. The walk
/// root itself is never pruned.
fn should_prune(entry: &DirEntry, skip: &SkipList) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || skip.matches(&name)
}

/// A candidate descriptor has the right extension and is not a test-module
/// descriptor (case-insensitive `Tests<ext>` suffix).
fn matches_descriptor(file_name: &str, ext: &str) -> bool {
    if !file_name.ends_with(ext) {
        return false;
    }
    let lowered = file_name.to_ascii_lowercase();
    !lowered.ends_with(&format!("tests{}", ext.to_ascii_lowercase()))
}
