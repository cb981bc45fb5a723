//! `[weekly]` section configuration.
//!
//! Settings for the weekly site variant, where post dates are derived from
//! the issue number instead of the filesystem.

use super::defaults;
use chrono::NaiveDate;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[weekly]` section in blogmeta.toml.
///
/// # Example
/// ```toml
/// [weekly]
/// repo = "dxzyw/weekly"
/// start_date = "2025-04-07"
/// asset_url = "https://herotops.xyz/assets"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct WeeklyConfig {
    /// `site.repo` value that turns on the weekly variant.
    #[serde(default = "defaults::weekly::repo")]
    #[educe(Default = defaults::weekly::repo())]
    pub repo: String,

    /// Date of issue 100, `YYYY-MM-DD`.
    #[serde(default = "defaults::weekly::start_date")]
    #[educe(Default = defaults::weekly::start_date())]
    pub start_date: String,

    /// Base URL of the social-card images.
    #[serde(default = "defaults::weekly::asset_url")]
    #[educe(Default = defaults::weekly::asset_url())]
    pub asset_url: String,
}

impl WeeklyConfig {
    /// Parsed `start_date`; `None` when it is not `YYYY-MM-DD`.
    pub fn start(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()
    }
}
