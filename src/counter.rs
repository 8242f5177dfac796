//! File counting: one non-recursive directory listing per collected package.
//!
//! This is the only tolerant site in the pipeline: a directory that became
//! unreadable after collection is logged and skipped, leaving that package
//! with whatever file data it already had, while the rest of the scan
//! completes normally.

use crate::core::{is_source_file, Package};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Fills in `files` and `files_cnt` for every package by re-listing its
/// directory once. Entries are recorded in name order.
pub fn count_package_files(packages: &mut HashMap<PathBuf, Package>) {
    for (pkg_dir, package) in packages.iter_mut() {
        let entries = match fs::read_dir(pkg_dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("failed to list package directory {}: {err}", pkg_dir.display());
                continue;
            }
        };

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!(
                        "failed to read entry in package directory {}: {err}",
                        pkg_dir.display()
                    );
                    continue;
                }
            };
            let path = entry.path();
            if path.is_dir() || !is_source_file(&path) {
                continue;
            }
            // Same exclusions as collection: code-generation templates and
            // zero-byte placeholders never contribute to file counts.
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('_') {
                continue;
            }
            match entry.metadata() {
                Ok(metadata) if metadata.len() == 0 => continue,
                Ok(_) => {}
                Err(err) => {
                    log::warn!("failed to stat {}: {err}", path.display());
                    continue;
                }
            }
            names.push(name);
        }
        names.sort();

        let mut files_cnt: HashMap<String, usize> = HashMap::new();
        for name in &names {
            if let Some(ext) = name.rsplit('.').next() {
                *files_cnt.entry(ext.to_string()).or_insert(0) += 1;
            }
        }
        package.files = names;
        package.files_cnt = files_cnt;
    }
}
