//! Derived output: per-post frontmatter and the site map.

pub mod frontmatter;
pub mod post_index;
pub mod sitemap;

pub use frontmatter::FrontmatterDeriver;
pub use sitemap::build_sitemap;
