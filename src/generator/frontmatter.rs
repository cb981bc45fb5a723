//! Frontmatter derivation.
//!
//! Fills the frontmatter fields a post did not set itself:
//!
//! | Field        | Source                                             |
//! |--------------|----------------------------------------------------|
//! | `layout`     | `build.layout`, always overwritten                 |
//! | `pic`        | first `<img src>` in block 0, else `site.pic`      |
//! | `desc`       | block 1, child 1 text, else `site.description`     |
//! | `date`       | weekly index rule or file creation date            |
//! | `twitterImg` | weekly variant only, index >= 110                  |
//!
//! Present fields are never replaced, except `layout`, `twitterImg` and a
//! `desc` the body text provides. Deriving an already derived document
//! changes nothing.

use super::post_index::{coerce_number, post_index_from_path};
use crate::{
    config::SiteConfig,
    content::{Document, Node},
    log,
    utils::{
        date::{file_created, format_date, weeks_before},
        xml::first_img_src,
    },
};
use std::path::Path;

pub const LAYOUT: &str = "layout";
pub const PIC: &str = "pic";
pub const DESC: &str = "desc";
pub const DATE: &str = "date";
pub const TWITTER_IMG: &str = "twitterImg";

/// Issues below this number get a date counted back from the start date.
const WEEKLY_ANCHOR: f64 = 100.0;
/// Issues from this number on have a social-card image.
const SOCIAL_CARD_FROM: f64 = 110.0;

/// Derives frontmatter for one site.
#[derive(Debug, Clone, Copy)]
pub struct FrontmatterDeriver<'a> {
    config: &'a SiteConfig,
}

impl<'a> FrontmatterDeriver<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Fill the missing frontmatter fields of `doc` in place.
    pub fn derive(&self, doc: &mut Document) {
        let Document {
            path,
            root,
            frontmatter,
        } = doc;
        let site = &self.config.site;

        frontmatter.set(LAYOUT, self.config.build.layout.as_str());

        if !frontmatter.is_present(PIC)
            && let Some(src) = root.block(0).and_then(Node::text).and_then(first_img_src)
        {
            frontmatter.set(PIC, src);
        }

        if let Some(desc) = root
            .block(1)
            .and_then(|block| block.child(1))
            .and_then(Node::text)
        {
            frontmatter.set(DESC, desc);
        }

        frontmatter.set_if_absent(DESC, site.description.as_str());
        frontmatter.set_if_absent(PIC, site.pic.as_str());

        if !frontmatter.is_present(DATE) {
            let index = post_index_from_path(path);
            let date = if self.config.is_weekly() {
                self.weekly_date(&index, path)
            } else {
                file_created(path)
            };
            frontmatter.set(DATE, date);
        }

        if self.config.is_weekly() {
            let index = post_index_from_path(path);
            match self.social_card(&index) {
                Some(url) => frontmatter.set(TWITTER_IMG, url),
                None => {
                    frontmatter.remove(TWITTER_IMG);
                }
            }
        }
    }

    /// Publish date of weekly issue `index`.
    ///
    /// Issues below 100 are dated `100 - index` weeks before the start date;
    /// later issues, and indexes that are not numbers, use the creation date
    /// of `path`.
    pub fn weekly_date(&self, index: &str, path: &Path) -> String {
        let Some(n) = coerce_number(index).filter(|n| *n < WEEKLY_ANCHOR) else {
            return file_created(path);
        };

        let Some(start) = self.config.weekly.start() else {
            log!("error"; "invalid weekly start date `{}`", self.config.weekly.start_date);
            return file_created(path);
        };

        match weeks_before(start, WEEKLY_ANCHOR - n) {
            Some(date) => format_date(date),
            None => file_created(path),
        }
    }

    /// Social-card image URL of issue `index`, from issue 110 on.
    pub fn social_card(&self, index: &str) -> Option<String> {
        coerce_number(index)
            .filter(|n| *n >= SOCIAL_CARD_FROM)
            .map(|_| {
                let base = self.config.weekly.asset_url.trim_end_matches('/');
                format!("{base}/{index}.jpg")
            })
    }
}
