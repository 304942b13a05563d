//! aging-site: website generator for the monocyte epigenetic aging paper
//!
//! Fills the HTML templates of the `site` folder with tables of genome
//! browser sessions, peak files and bigwig tracks, and writes the pages
//! together with the static resources into the `out` folder.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

mod config;
mod page;
mod site;
mod tables;
mod template;
mod urls;
mod workspace;

use crate::config::Config;
use crate::site::Site;

/// Generate the supplementary data website
#[derive(Parser, Debug)]
#[command(name = "aging-site")]
#[command(version)]
#[command(about = "Generate the epigenetic aging supplementary data website")]
struct Args {
    /// Folder with the page templates and static resources
    #[arg(long)]
    site: Option<PathBuf>,

    /// Output folder, deleted and recreated on every run
    #[arg(long)]
    out: Option<PathBuf>,

    /// YAML file with a `samples` map (histone label -> GEO accession)
    /// replacing the built-in one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Folder next to the generator sources
fn default_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(name)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("aging-site v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration: {}", path.display());
            Config::from_yaml(path)?
        }
        None => Config::default(),
    };
    info!("{} samples: {}", config.samples.len(), config.labels().join(", "));

    let site = Site::new(
        args.site.unwrap_or_else(|| default_dir("site")),
        args.out.unwrap_or_else(|| default_dir("out")),
        config,
    );
    site.generate()?;

    Ok(())
}
