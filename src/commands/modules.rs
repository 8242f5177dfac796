//! Module-level listing: which descriptors were located and where each one's
//! primary source root resolved to.

use crate::config::PkgmapConfig;
use crate::core::DESCRIPTOR_EXTENSION;
use crate::descriptor::{parse_descriptor_file, resolve_source_root};
use crate::io::locator::locate_modules;
use std::io::Write;
use std::path::Path;

pub fn run_modules(path: &Path, config: &PkgmapConfig) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    list_modules(path, config, &mut stdout.lock())
}

pub fn list_modules(path: &Path, config: &PkgmapConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let modules = locate_modules(path, DESCRIPTOR_EXTENSION, &config.skip)?;
    for module_path in &modules {
        let descriptor = parse_descriptor_file(module_path)?;
        let resolved = resolve_source_root(module_path, &descriptor);
        writeln!(
            out,
            "{}\tsource dirs:{}\t{}",
            module_path.display(),
            descriptor.source_folders.len(),
            resolved
                .map(|root| root.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
        )?;
    }
    Ok(())
}
