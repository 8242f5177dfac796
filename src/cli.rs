use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Markdown,
    Spreadsheet,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tsv => crate::io::output::OutputFormat::Tsv,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Spreadsheet => crate::io::output::OutputFormat::Spreadsheet,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pkgmap")]
#[command(about = "JVM package structure and documentation coverage scanner", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a module tree and report per-package file counts and docs
    Scan {
        /// Root directory to scan for module descriptors
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(long, default_value = "pkgmap.toml")]
        config: PathBuf,

        /// Additional directory names to prune during descriptor location
        #[arg(long = "skip-dir", value_delimiter = ',')]
        skip_dirs: Vec<String>,

        /// Base URL for spreadsheet hyperlinks
        #[arg(long = "repo-url")]
        repo_url: Option<String>,
    },

    /// List located module descriptors and their resolved source roots
    Modules {
        /// Root directory to scan for module descriptors
        path: PathBuf,

        /// Configuration file
        #[arg(long, default_value = "pkgmap.toml")]
        config: PathBuf,

        /// Additional directory names to prune during descriptor location
        #[arg(long = "skip-dir", value_delimiter = ',')]
        skip_dirs: Vec<String>,
    },
}
