//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("blogmeta.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("blogmeta.toml"));

        let toml_err = toml::from_str::<toml::Table>("title = ").unwrap_err();
        let cause = toml_err.to_string();
        let parse_err = ConfigError::from(toml_err);
        assert_eq!(format!("{parse_err}"), format!("Config file parsing error: {cause}"));

        let validation_err = ConfigError::Validation("`site.website` is empty".to_string());
        assert!(format!("{validation_err}").contains("`site.website` is empty"));
    }
}
