//! Site build orchestration.
//!
//! Stands in for the host pipeline: every markdown file under the content
//! directory goes through the transform hook, then the post-build hook runs.
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_markdown_files(content)
//!     ├── Document::from_file() ──► hooks::transform()   per file
//!     └── hooks::on_build_done() ──► sitemap.xml
//! ```

use crate::{
    config::SiteConfig,
    content::Document,
    hooks, log,
    utils::files::collect_markdown_files,
};
use std::path::Path;

/// Outcome of a build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Documents with derived frontmatter, in file name order.
    pub documents: Vec<Document>,
    /// Files that could not be read or parsed.
    pub failed: usize,
}

/// Derive frontmatter for every post, then run the post-build hook.
///
/// Unparsable files are logged and counted; they never stop the build.
pub async fn build_site(config: &SiteConfig) -> BuildReport {
    let content = &config.build.content;
    let files = collect_markdown_files(content, usize::MAX);
    log!("build"; "found {} markdown files in {}", files.len(), content.display());

    let mut report = BuildReport::default();
    for path in files {
        match Document::from_file(&path) {
            Ok(mut doc) => {
                hooks::transform(config, &mut doc);
                let date = doc.frontmatter.get_str("date").unwrap_or_default();
                log!("derive"; "{} ({date})", relative(&path, content));
                report.documents.push(doc);
            }
            Err(err) => {
                log!("error"; "{}: {err}", path.display());
                report.failed += 1;
            }
        }
    }

    hooks::on_build_done(config).await;
    report
}

/// Path relative to the content directory, for logging.
fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
