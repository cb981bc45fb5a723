//! Post index extraction.
//!
//! Posts are named `<index>-<slug>.md`, e.g. `posts/37-keyboard.md`. The
//! index stays a string: it is compared as a number but written verbatim into
//! social-card URLs.

use std::path::Path;

/// Directory segments whose files carry a post index, in lookup order.
const INDEXED_SEGMENTS: [&str; 2] = ["/posts/", "/daily_article/"];

/// Index used when the path carries none.
pub const DEFAULT_INDEX: &str = "0";

/// Extract the post index from a source path.
///
/// The first of `/posts/` or `/daily_article/` found in the path is used; the
/// index is the text between that segment and the next `-`. Paths outside
/// those directories, or without a `-`, yield `"0"`.
pub fn post_index_from_path(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");

    for segment in INDEXED_SEGMENTS {
        let Some((_, rest)) = path.split_once(segment) else {
            continue;
        };
        // Only up to a repeated segment, e.g. `/posts/a/posts/1-x.md` -> `a`
        let rest = rest.split(segment).next().unwrap_or_default();
        return match rest.split_once('-') {
            Some((index, _)) => index.to_owned(),
            None => DEFAULT_INDEX.to_owned(),
        };
    }

    DEFAULT_INDEX.to_owned()
}

/// Numeric value of an index with script-style coercion.
///
/// Surrounding whitespace is ignored, an empty string is `0`, `0x`/`0o`/`0b`
/// prefixes select a radix and `Infinity` is accepted. Anything else that is
/// not a decimal literal is `None`.
pub fn coerce_number(index: &str) -> Option<f64> {
    let s = index.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let digits = s
            .strip_prefix(prefix)
            .or_else(|| s.strip_prefix(&prefix.to_ascii_uppercase()));
        if let Some(digits) = digits {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // Rust also parses `inf` and `NaN`, which are not numbers here
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(path: &str) -> String {
        post_index_from_path(Path::new(path))
    }

    #[test]
    fn test_post_index_from_posts() {
        assert_eq!(index("/a/posts/37-title.md"), "37");
        assert_eq!(index("/site/src/content/posts/120-keyboard-review.md"), "120");
    }

    #[test]
    fn test_post_index_from_daily_article() {
        assert_eq!(index("/a/daily_article/5-news.md"), "5");
    }

    #[test]
    fn test_post_index_outside_content_dirs() {
        assert_eq!(index("/a/other/37-title.md"), "0");
        assert_eq!(index("posts/37-title.md"), "0");
        assert_eq!(index(""), "0");
    }

    #[test]
    fn test_post_index_without_dash() {
        assert_eq!(index("/a/posts/title.md"), "0");
    }

    #[test]
    fn test_post_index_posts_before_daily_article() {
        assert_eq!(index("/daily_article/9-x/posts/3-y.md"), "3");
    }

    #[test]
    fn test_post_index_keeps_text() {
        assert_eq!(index("/a/posts/-lead.md"), "");
        assert_eq!(index("/a/posts/draft-one.md"), "draft");
        assert_eq!(index("/a/posts/007-bond.md"), "007");
        assert_eq!(index("/a/posts/sub/12-x.md"), "sub/12");
    }

    #[test]
    fn test_post_index_windows_separators() {
        assert_eq!(index(r"C:\site\posts\42-win.md"), "42");
    }

    #[test]
    fn test_coerce_number_decimal() {
        assert_eq!(coerce_number("37"), Some(37.0));
        assert_eq!(coerce_number(" 42 "), Some(42.0));
        assert_eq!(coerce_number("007"), Some(7.0));
        assert_eq!(coerce_number("1.5"), Some(1.5));
        assert_eq!(coerce_number("1e2"), Some(100.0));
        assert_eq!(coerce_number(""), Some(0.0));
    }

    #[test]
    fn test_coerce_number_radix_and_infinity() {
        assert_eq!(coerce_number("0x1A"), Some(26.0));
        assert_eq!(coerce_number("0b11"), Some(3.0));
        assert_eq!(coerce_number("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn test_coerce_number_not_a_number() {
        assert_eq!(coerce_number("draft"), None);
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("NaN"), None);
        assert_eq!(coerce_number("sub/12"), None);
        assert_eq!(coerce_number("1.2.3"), None);
    }
}
