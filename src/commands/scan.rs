//! The scan pipeline: locate descriptors, resolve source roots, collect
//! packages, count files, render.

use crate::collector::collect_packages;
use crate::config::PkgmapConfig;
use crate::core::{ScanResults, DESCRIPTOR_EXTENSION};
use crate::counter::count_package_files;
use crate::descriptor::resolve_source_roots;
use crate::io::locator::locate_modules;
use crate::io::output::{create_writer, OutputFormat};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ScanOptions {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: PkgmapConfig,
}

/// Runs one full scan and writes the report. Fatal scan errors propagate;
/// recoverable per-item failures have already been logged by the time the
/// report is rendered.
pub fn run_scan(options: ScanOptions) -> anyhow::Result<()> {
    let results = scan(&options.path, &options.config)?;
    log::info!(
        "scanned {}: {} descriptors, {} source roots, {} packages",
        results.root.display(),
        results.modules_found,
        results.roots_resolved,
        results.packages.len()
    );

    let out: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = create_writer(options.format, out, &options.config.repo_url);
    writer.write_results(&results)
}

/// The aggregation pipeline, presentation-free. The returned package map is
/// unordered; callers that need stable output must sort.
pub fn scan(root: &Path, config: &PkgmapConfig) -> crate::errors::Result<ScanResults> {
    let modules = locate_modules(root, DESCRIPTOR_EXTENSION, &config.skip)?;
    let roots = resolve_source_roots(&modules)?;

    let mut results = ScanResults::new(root.to_path_buf());
    results.modules_found = modules.len();
    results.roots_resolved = roots.len();
    results.packages = collect_packages(&roots)?;
    count_package_files(&mut results.packages);
    Ok(results)
}
