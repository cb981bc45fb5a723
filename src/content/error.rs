//! Content parsing error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a markdown file into a [`Document`](super::Document).
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("markdown parse error: {0}")]
    Markdown(String),

    #[error("YAML frontmatter error: {0}")]
    Yaml(String),

    #[error("TOML frontmatter error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("frontmatter conversion error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frontmatter must be a mapping, got {0}")]
    NotMapping(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_display_carries_cause() {
        let toml_err = toml::from_str::<toml::Table>("title = ").unwrap_err();
        let cause = toml_err.to_string();
        let err = ContentError::from(toml_err);
        assert_eq!(err.to_string(), format!("TOML frontmatter error: {cause}"));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ContentError::from(json_err);
        assert!(matches!(err, ContentError::Json(_)));
        assert!(err.to_string().starts_with("frontmatter conversion error: "));
    }
}
