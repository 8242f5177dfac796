use anyhow::Result;
use clap::Parser;
use pkgmap::cli::{Cli, Commands};
use pkgmap::commands::scan::{run_scan, ScanOptions};
use pkgmap::config::PkgmapConfig;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            path,
            format,
            output,
            config,
            skip_dirs,
            repo_url,
        } => {
            let config = load_config(&config, skip_dirs, repo_url)?;
            run_scan(ScanOptions {
                path,
                format: format.into(),
                output,
                config,
            })
        }
        Commands::Modules {
            path,
            config,
            skip_dirs,
        } => {
            let config = load_config(&config, skip_dirs, None)?;
            pkgmap::commands::modules::run_modules(&path, &config)
        }
    }
}

/// File config layers on defaults; CLI flags layer on file config.
fn load_config(
    path: &Path,
    skip_dirs: Vec<String>,
    repo_url: Option<String>,
) -> Result<PkgmapConfig> {
    let mut config = PkgmapConfig::load(path)?;
    config.skip.extend(skip_dirs);
    if let Some(url) = repo_url {
        config.repo_url = url;
    }
    Ok(config)
}
