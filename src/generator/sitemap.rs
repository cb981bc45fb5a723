//! Sitemap generation.
//!
//! Lists the home page and every markdown post for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <?xml-stylesheet type="text/xsl" href="sitemap.xsl"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!     <url>
//!         <loc>https://example.com/</loc>
//!         <lastmod>2025/01/01</lastmod>
//!         <changefreq>daily</changefreq>
//!         <priority>1.0</priority>
//!     </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    utils::{
        date::{file_modified, today},
        files::{MARKDOWN_EXT, collect_markdown_files},
        xml::common::{XmlWriter, create_xml_writer, write_text_element},
    },
};
use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, Event};
use std::{fs, path::Path};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Content directories listed in the sitemap, in output order
pub const CONTENT_TYPES: [&str; 2] = ["posts", "daily_article"];

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
///
/// Declared async for the post-build hook; all I/O inside is blocking.
pub async fn build_sitemap(config: &SiteConfig) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::collect(config)?;
        sitemap.write(config)?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// How often a URL is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Full URL location
    pub loc: String,
    /// Last modification date, `YYYY/MM/DD`
    pub lastmod: String,
    pub changefreq: ChangeFreq,
    pub priority: &'static str,
}

impl UrlEntry {
    /// The site root, modified "now".
    fn home(base_url: &str) -> Self {
        Self {
            loc: base_url.to_owned(),
            lastmod: today(),
            changefreq: ChangeFreq::Daily,
            priority: "1.0",
        }
    }

    /// A post at `<base>/<kind>/<stem>`, with the base used as written.
    fn post(base_url: &str, kind: &str, path: &Path) -> Result<Self> {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let stem = name.strip_suffix(MARKDOWN_EXT).unwrap_or(&name);
        Ok(Self {
            loc: format!("{base_url}/{kind}/{stem}"),
            lastmod: file_modified(path)?,
            changefreq: ChangeFreq::Weekly,
            priority: "0.8",
        })
    }
}

/// Sitemap data structure
#[derive(Debug, Default)]
pub struct Sitemap {
    /// List of URL entries
    pub urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Home entry followed by every `*.md` under each content type directory.
    ///
    /// Missing directories are skipped.
    pub fn collect(config: &SiteConfig) -> Result<Self> {
        let content = &config.build.content;
        let base_url = &config.site.website;

        log!("sitemap"; "content directory: {}", content.display());
        let mut urls = vec![UrlEntry::home(base_url)];

        for kind in CONTENT_TYPES {
            let dir = content.join(kind);
            if !dir.is_dir() {
                log!("sitemap"; "directory not found: {}", dir.display());
                continue;
            }

            let files = collect_markdown_files(&dir, 1);
            log!("sitemap"; "found {} files in {kind}", files.len());

            for path in files {
                urls.push(UrlEntry::post(base_url, kind, &path)?);
            }
        }

        Ok(Self { urls })
    }

    /// Generate sitemap XML string.
    pub fn into_xml(self, stylesheet: &str) -> Result<String> {
        let mut writer = create_xml_writer(4096, 4);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::PI(BytesPI::new(format!(
            r#"xml-stylesheet type="text/xsl" href="{}""#,
            escape_attr(stylesheet)
        ))))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        writer.write_event(Event::Start(urlset))?;

        for entry in &self.urls {
            write_url(&mut writer, entry)?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        let mut xml = String::from_utf8(writer.into_inner().into_inner())
            .context("sitemap is not valid UTF-8")?;
        xml.push('\n');
        Ok(xml)
    }

    /// Write sitemap to output file, creating the output directory.
    pub fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.sitemap_path();
        let count = self.urls.len();
        let xml = self.into_xml(&config.build.sitemap.stylesheet)?;

        if let Some(parent) = sitemap_path.parent()
            && !parent.exists()
        {
            log!("sitemap"; "creating directory: {}", parent.display());
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "generated {}", sitemap_path.display());
        log!("sitemap"; "total urls: {count}");
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn write_url(writer: &mut XmlWriter, entry: &UrlEntry) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;
    write_text_element(writer, "loc", &entry.loc)?;
    write_text_element(writer, "lastmod", &entry.lastmod)?;
    write_text_element(writer, "changefreq", entry.changefreq.as_str())?;
    write_text_element(writer, "priority", entry.priority)?;
    writer.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}

/// Escape a value placed inside a double-quoted pseudo-attribute.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Tests
// ============================================================================
