// Export modules for library usage
pub mod cli;
pub mod collector;
pub mod commands;
pub mod config;
pub mod core;
pub mod counter;
pub mod descriptor;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::config::{PkgmapConfig, SkipList};
pub use crate::core::{ModuleDescriptor, Package, ScanResults, SourceFolder};
pub use crate::errors::ScanError;
pub use crate::io::output::{create_writer, OutputFormat, PackageWriter};
