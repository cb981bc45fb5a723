//! `[build]` section configuration.
//!
//! Content and output locations, the post layout, and sitemap settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in blogmeta.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "src/content"
/// output = "dist"
///
/// [build.sitemap]
/// stylesheet = "sitemap.xsl"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content directory holding `posts/` and `daily_article/`.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Layout identifier written into every post's frontmatter.
    #[serde(default = "defaults::build::layout")]
    #[educe(Default = defaults::build::layout())]
    pub layout: String,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.sitemap]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output file, relative to `build.output`.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,

    /// Relative href of the XSL stylesheet referenced by the sitemap.
    #[serde(default = "defaults::build::sitemap::stylesheet")]
    #[educe(Default = defaults::build::sitemap::stylesheet())]
    pub stylesheet: String,
}
