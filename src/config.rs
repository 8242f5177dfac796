//! Scan configuration, loadable from an optional `pkgmap.toml`.
//!
//! The directory skip list used during module location is explicit
//! configuration rather than hard-wired state: the default deny-set can be
//! replaced wholesale from the config file and extended from the CLI.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Base URL used by the spreadsheet renderer to build browsable links.
pub const DEFAULT_REPO_URL: &str = "https://jetbrains.team/p/ij/repositories/community/files/";

/// Directory names pruned while locating module descriptors. Matching is by
/// directory name, not path substring.
pub const DEFAULT_SKIP_DIRS: [&str; 11] = [
    "test",
    "tests",
    "testData",
    "testSources",
    "testSource",
    "testSrc",
    "testResources",
    "gen",
    "generated",
    "resources",
    "build-scripts",
];

/// Directory names to prune during descriptor location, plus the matching
/// policy for them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipList {
    #[serde(default = "default_skip_dirs")]
    pub dirs: Vec<String>,
    /// When false, skip-list names match case-insensitively.
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

fn default_skip_dirs() -> Vec<String> {
    DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_case_sensitive() -> bool {
    true
}

impl Default for SkipList {
    fn default() -> Self {
        Self {
            dirs: default_skip_dirs(),
            case_sensitive: default_case_sensitive(),
        }
    }
}

impl SkipList {
    /// True when a directory with this name should be pruned.
    pub fn matches(&self, dir_name: &str) -> bool {
        if self.case_sensitive {
            self.dirs.iter().any(|d| d == dir_name)
        } else {
            self.dirs.iter().any(|d| d.eq_ignore_ascii_case(dir_name))
        }
    }

    /// Appends extra names (CLI additions) without disturbing the base set.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = String>) {
        self.dirs.extend(extra);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PkgmapConfig {
    #[serde(default)]
    pub skip: SkipList,
    /// Base URL for spreadsheet hyperlinks; defaults to the upstream
    /// repository browser.
    #[serde(default = "default_repo_url")]
    pub repo_url: String,
}

fn default_repo_url() -> String {
    DEFAULT_REPO_URL.to_string()
}

impl Default for PkgmapConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PkgmapConfig {
    /// Loads configuration from a TOML file. Missing file falls back to
    /// defaults; an unreadable or invalid file is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::with_defaults());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn with_defaults() -> Self {
        Self {
            skip: SkipList::default(),
            repo_url: default_repo_url(),
        }
    }
}
