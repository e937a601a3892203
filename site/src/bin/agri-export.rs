//! # agri-export
//!
//! Renders the A.S. Agri landing page to a static `index.html`.
//!
//! ## Usage
//!
//! ```bash
//! # Embedded content, written to ./dist/index.html
//! agri-export
//!
//! # Custom content file (.toml or .json)
//! agri-export --content site.toml --out public
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use agri_site::render_site;
use agri_site::types::SiteContent;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "agri-export")]
#[command(about = "Render the A.S. Agri landing page to static HTML")]
#[command(version)]
struct Args {
    /// Content file (.toml or .json); the embedded content is used when omitted
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Output directory; index.html is written inside it
    #[arg(long, value_name = "DIR", default_value = "dist")]
    out: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_content(path: Option<&PathBuf>) -> Result<SiteContent> {
    match path {
        Some(path) => {
            info!("Loading content from {}", path.display());
            SiteContent::load_from_path(path)
                .with_context(|| format!("cannot use content file {}", path.display()))
        }
        None => {
            debug!("Using embedded content");
            SiteContent::builtin().context("embedded content is invalid")
        }
    }
}

fn run(args: Args) -> Result<PathBuf> {
    let content = load_content(args.content.as_ref())?;
    info!(
        slides = content.hero.slides.len(),
        products = content.products.items.len(),
        "Content validated"
    );

    let html = render_site(&content);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("cannot create output directory {}", args.out.display()))?;
    let target = args.out.join("index.html");
    std::fs::write(&target, html).with_context(|| format!("cannot write {}", target.display()))?;

    Ok(target)
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting agri-export v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(target) => {
            info!("Wrote {}", target.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[agri-export] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
