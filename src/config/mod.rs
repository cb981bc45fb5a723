//! Site configuration management for `blogmeta.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[site]`    | Site identity (title, fallbacks, base URL, repo) |
//! | `[build]`   | Content/output paths, layout, sitemap           |
//! | `[weekly]`  | Weekly variant (repo, start date, card images)  |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! description = "A personal blog"
//! pic = "https://example.com/cover.png"
//! website = "https://example.com"
//! repo = "alice/blog"
//!
//! [build]
//! content = "src/content"
//! output = "dist"
//!
//! [weekly]
//! start_date = "2025-04-07"
//! ```

mod build;
pub mod defaults;
mod error;
mod site;
mod weekly;

pub use error::ConfigError;

use build::BuildConfig;
use site::SiteIdentity;
use weekly::WeeklyConfig;

use crate::cli::{Cli, Commands};
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing blogmeta.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity
    pub site: SiteIdentity,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Weekly variant settings
    #[serde(default)]
    pub weekly: WeeklyConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Whether this site is the weekly variant (`site.repo == weekly.repo`).
    pub fn is_weekly(&self) -> bool {
        self.site.repo == self.weekly.repo
    }

    /// Absolute path of the sitemap file.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .map(|root| expand_tilde(root))
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.update_path_with_root(&root, &cli.config);

        match &cli.command {
            Commands::Build { sitemap } => {
                Self::update_option(&mut self.build.sitemap.enable, sitemap.as_ref());
            }
            Commands::Sitemap => self.build.sitemap.enable = true,
            Commands::Derive { .. } => {}
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_file));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.build.sitemap.enable && self.site.website.trim().is_empty() {
            return Err(ConfigError::Validation(
                "`site.website` is required when `[build.sitemap].enable = true`".into(),
            ));
        }

        if self.is_weekly() && self.weekly.start().is_none() {
            return Err(ConfigError::Validation(format!(
                "`weekly.start_date` must be YYYY-MM-DD, got `{}`",
                self.weekly.start_date
            )));
        }

        Ok(())
    }
}

/// Expand a leading `~` in a CLI path.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}
