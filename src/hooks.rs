//! Entry points for the host build pipeline.
//!
//! ```text
//! host parses file ──► transform(doc)      once per document
//! host writes output ─► on_build_done()    once per build
//! ```

use crate::{
    config::SiteConfig,
    content::Document,
    generator::{FrontmatterDeriver, build_sitemap},
    log,
};

/// Markdown-tree hook: derive the frontmatter of one parsed document.
pub fn transform(config: &SiteConfig, doc: &mut Document) {
    FrontmatterDeriver::new(config).derive(doc);
}

/// Post-build hook: write the sitemap.
///
/// Failures are reported and swallowed; the sitemap never fails a build.
pub async fn on_build_done(config: &SiteConfig) {
    log!("sitemap"; "starting sitemap generation...");
    if let Err(err) = build_sitemap(config).await {
        log!("error"; "error generating sitemap: {err:#}");
    }
}
