//! Package collection: walks resolved source roots and groups source files
//! into per-directory `Package` records.
//!
//! The package map is keyed by package directory and insertion is
//! create-or-update: the first source file seen in a directory creates the
//! record and fixes its module, root, and declared name; a later doc-file
//! sighting in the same directory only updates the `doc` field. This holds
//! even when several module source roots overlap the same directory.

use crate::core::{is_doc_file, is_source_file, Package};
use crate::errors::{Result, ScanError};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How many leading lines of a source file are scanned for the package
/// declaration.
const PACKAGE_SCAN_DEPTH: usize = 100;

/// Collects packages under every resolved source root. Roots are processed
/// sequentially; a traversal error under any root is fatal for the run.
pub fn collect_packages(roots: &HashMap<PathBuf, PathBuf>) -> Result<HashMap<PathBuf, Package>> {
    let mut packages = HashMap::new();
    for (src_dir, module) in roots {
        collect_source_root(src_dir, module, &mut packages)?;
    }
    Ok(packages)
}

fn collect_source_root(
    src_dir: &Path,
    module: &Path,
    packages: &mut HashMap<PathBuf, Package>,
) -> Result<()> {
    // Lexical order within each directory keeps first-sighting behavior
    // stable across filesystems.
    let walker = WalkDir::new(src_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !entry.file_name().to_string_lossy().starts_with('.')
        });

    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Collect {
            src_dir: src_dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        // Underscore-prefixed files are code-generation templates, not
        // real sources; zero-byte files are known placeholders.
        if entry.file_name().to_string_lossy().starts_with('_') {
            continue;
        }
        let metadata = entry.metadata().map_err(|source| ScanError::Collect {
            src_dir: src_dir.to_path_buf(),
            source,
        })?;
        if metadata.len() == 0 {
            continue;
        }

        let path = entry.path();
        let pkg_dir = match path.parent() {
            Some(dir) => dir.to_path_buf(),
            None => continue,
        };

        if let Some(existing) = packages.get_mut(&pkg_dir) {
            // Known package: only doc detection runs for the rest of the
            // directory's files. Counting happens later, in one pass per
            // directory.
            if is_doc_file(path) {
                existing.doc = path.to_path_buf();
            }
            continue;
        }

        if is_source_file(path) {
            let name = read_package_name(path, PACKAGE_SCAN_DEPTH)?;
            let mut package = Package {
                module: module.to_path_buf(),
                src_dir: src_dir.to_path_buf(),
                pkg_dir: pkg_dir.clone(),
                name,
                ..Package::default()
            };
            if is_doc_file(path) {
                package.doc = path.to_path_buf();
            }
            packages.insert(pkg_dir, package);
        }
    }
    Ok(())
}

/// Extracts the declared package name by scanning the file's first
/// `scan_depth` lines for a `package` declaration.
///
/// A malformed declaration line (not exactly two whitespace-separated
/// tokens) is a per-item diagnostic, not an error: the package keeps an
/// empty name and the scan continues. An unreadable file is fatal.
pub fn read_package_name(path: &Path, scan_depth: usize) -> Result<String> {
    let file = File::open(path).map_err(|source| ScanError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    for line in reader.lines().take(scan_depth) {
        let line = line.map_err(|source| ScanError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        if !line.starts_with("package ") {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            log::warn!("failed to get package name for {}", path.display());
            return Ok(String::new());
        }
        return Ok(tokens[1].trim_end_matches(';').to_string());
    }
    Ok(String::new())
}
