//! Content file discovery.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
pub const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Markdown source extension.
pub const MARKDOWN_EXT: &str = ".md";

/// Collect `*.md` files under `dir`, sorted by file name.
///
/// `max_depth` of 1 lists only the direct children of `dir`.
/// Unreadable entries are skipped.
pub fn collect_markdown_files(dir: &Path, max_depth: usize) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name) && name.ends_with(MARKDOWN_EXT)
        })
        .map(|e| e.into_path())
        .collect()
}
