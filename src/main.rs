//! blogmeta - frontmatter derivation and sitemap generation for a markdown blog.

mod build;
mod cli;
mod config;
mod content;
mod generator;
mod hooks;
mod logger;
mod utils;

use anyhow::{Context, Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::Document;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => {
            log!("build"; "using {}", config.config_path.display());
            let report = build_site(config).await;
            log!("build"; "derived {} documents, {} failed", report.documents.len(), report.failed);
            if report.failed > 0 {
                bail!("{} documents failed to parse", report.failed);
            }
            Ok(())
        }
        Commands::Derive { file } => derive_file(config, file),
        Commands::Sitemap => {
            hooks::on_build_done(config).await;
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli
        .root
        .as_deref()
        .map(config::expand_tilde)
        .unwrap_or_else(|| Path::new("./").to_path_buf());
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Print the derived frontmatter of one file as JSON.
fn derive_file(config: &SiteConfig, file: &Path) -> Result<()> {
    let path = file
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", file.display()))?;
    let mut doc = Document::from_file(&path)?;
    hooks::transform(config, &mut doc);

    let json = serde_json::to_string_pretty(&doc.frontmatter)?;
    println!("{json}");
    Ok(())
}
