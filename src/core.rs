use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Extension identifying module descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = ".iml";

/// Source file extensions tracked by the scan.
pub const SOURCE_EXTENSIONS: [&str; 2] = ["java", "kt"];

/// Package-level documentation file names recognized during collection.
pub const DOC_FILE_SUFFIXES: [&str; 2] = ["package-info.java", "package.html"];

/// One `<sourceFolder>` entry from a module descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFolder {
    pub url: String,
    pub is_test: bool,
    pub generated: bool,
    /// The `type` attribute; resource folders carry a `-resource` suffix here.
    pub kind: String,
}

impl SourceFolder {
    pub fn is_resource(&self) -> bool {
        self.kind.ends_with("-resource")
    }

    /// A folder qualifies as a module's primary source root when it is not a
    /// test, generated, or resource folder.
    pub fn is_eligible(&self) -> bool {
        !self.is_test && !self.generated && !self.is_resource()
    }
}

/// A parsed module descriptor: the module name and its declared source
/// folders, in declaration order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub name: String,
    pub source_folders: Vec<SourceFolder>,
}

impl ModuleDescriptor {
    /// The URL of the first eligible source folder, if any. First-match in
    /// declaration order; later eligible folders are ignored.
    pub fn primary_source_url(&self) -> Option<&str> {
        self.source_folders
            .iter()
            .find(|f| f.is_eligible())
            .map(|f| f.url.as_str())
    }
}

/// One directory found to contain source files. Keyed by `pkg_dir` in the
/// scan-wide package map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Path to the owning module's descriptor file.
    pub module: PathBuf,
    /// The resolved source root this package was found under.
    pub src_dir: PathBuf,
    /// The package directory itself; uniquely identifies the package.
    pub pkg_dir: PathBuf,
    /// Declared package name, as extracted from the first source file seen.
    pub name: String,
    /// Path to a package-level documentation file, empty if none was found.
    pub doc: PathBuf,
    /// Source file names in this directory, filled in by the file counter.
    pub files: Vec<String>,
    /// Per-extension file counts, filled in by the file counter.
    pub files_cnt: HashMap<String, usize>,
}

impl Package {
    /// Count for one tracked extension (given without the leading dot).
    pub fn count(&self, ext: &str) -> usize {
        self.files_cnt.get(ext).copied().unwrap_or(0)
    }

    pub fn has_doc(&self) -> bool {
        !self.doc.as_os_str().is_empty()
    }
}

/// The aggregated output of one scan, consumed by the reporting layer.
///
/// `packages` is keyed by package directory; iteration order is unordered,
/// so reporting sorts explicitly before rendering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanResults {
    pub root: PathBuf,
    pub modules_found: usize,
    pub roots_resolved: usize,
    pub packages: HashMap<PathBuf, Package>,
}

impl ScanResults {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            modules_found: 0,
            roots_resolved: 0,
            packages: HashMap::new(),
        }
    }
}

/// True when the path carries one of the tracked source extensions.
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// True when the file name is a package-level documentation file.
pub fn is_doc_file(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    DOC_FILE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(url: &str, is_test: bool, generated: bool, kind: &str) -> SourceFolder {
        SourceFolder {
            url: url.to_string(),
            is_test,
            generated,
            kind: kind.to_string(),
        }
    }

    #[test]
    fn primary_source_url_is_first_eligible_in_declaration_order() {
        let descriptor = ModuleDescriptor {
            name: "intellij.platform.util".to_string(),
            source_folders: vec![
                folder("file://$MODULE_DIR$/testSrc", true, false, ""),
                folder("file://$MODULE_DIR$/gen", false, true, ""),
                folder("file://$MODULE_DIR$/src", false, false, ""),
                folder("file://$MODULE_DIR$/src2", false, false, ""),
            ],
        };
        assert_eq!(
            descriptor.primary_source_url(),
            Some("file://$MODULE_DIR$/src")
        );
    }

    #[test]
    fn resource_folders_are_not_eligible() {
        let descriptor = ModuleDescriptor {
            name: "intellij.platform.resources".to_string(),
            source_folders: vec![folder(
                "file://$MODULE_DIR$/resources",
                false,
                false,
                "java-resource",
            )],
        };
        assert_eq!(descriptor.primary_source_url(), None);
    }

    #[test]
    fn descriptor_with_no_folders_has_no_primary_root() {
        assert_eq!(ModuleDescriptor::default().primary_source_url(), None);
    }

    #[test]
    fn doc_file_detection_matches_both_suffixes() {
        assert!(is_doc_file(Path::new("src/com/foo/package-info.java")));
        assert!(is_doc_file(Path::new("src/com/foo/package.html")));
        assert!(!is_doc_file(Path::new("src/com/foo/Bar.java")));
    }

    #[test]
    fn source_file_detection_tracks_java_and_kotlin() {
        assert!(is_source_file(Path::new("Bar.java")));
        assert!(is_source_file(Path::new("Bar.kt")));
        assert!(!is_source_file(Path::new("Bar.groovy")));
        assert!(!is_source_file(Path::new("Makefile")));
    }
}
