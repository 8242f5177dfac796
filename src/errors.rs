//! Fatal error taxonomy for the scan pipeline.
//!
//! Each variant corresponds to one fatal call site; the split between fatal
//! and recoverable is fixed by error origin, not severity. Directory traversal
//! is fatal during module location and package collection but tolerated during
//! file counting, where failures are logged and the scan continues — the
//! counter therefore never produces a `ScanError`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Traversal failure while locating module descriptors.
    #[error("failed to walk {} looking for module descriptors", root.display())]
    Locate {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A descriptor file could not be read.
    #[error("failed to read module descriptor {}", path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A descriptor file is not well-formed XML.
    #[error("malformed XML in module descriptor {}", path.display())]
    DescriptorXml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// Traversal failure while collecting packages under a source root.
    #[error("failed to walk source root {}", src_dir.display())]
    Collect {
        src_dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A source file could not be read during package-name extraction.
    #[error("failed to read source file {}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
