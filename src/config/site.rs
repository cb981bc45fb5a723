//! `[site]` section configuration.
//!
//! The site identity: read-only metadata every derived frontmatter and the
//! sitemap fall back on.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in blogmeta.toml - site identity.
///
/// # Example
/// ```toml
/// [site]
/// title = "机械键盘选购"
/// description = "机械键盘选购攻略，数码产品介绍"
/// pic = "https://img.example.com/cover.png"
/// website = "https://keyboard.herotops.xyz"
/// repo = "dxzyw/keyboard"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteIdentity {
    /// Site title.
    pub title: String,

    /// Author name for meta tags.
    #[serde(default = "defaults::site::author")]
    #[educe(Default = defaults::site::author())]
    pub author: String,

    /// Fallback description for posts without one.
    pub description: String,

    /// Keywords for meta tags.
    #[serde(default)]
    pub keywords: String,

    /// Favicon URL.
    #[serde(default)]
    pub icon: String,

    /// Fallback preview image for posts without one.
    pub pic: String,

    #[serde(default)]
    pub home_page: String,

    #[serde(default)]
    pub blog_page: String,

    /// Base URL used for sitemap `<loc>` entries.
    #[serde(default = "defaults::site::website")]
    #[educe(Default = defaults::site::website())]
    pub website: String,

    #[serde(default)]
    pub twitter_id: String,

    #[serde(default)]
    pub github_id: String,

    /// Repository identifier, e.g. `dxzyw/weekly`. Selects the weekly variant.
    #[serde(default)]
    pub repo: String,
}
