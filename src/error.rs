use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the pattern illustrations themselves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("{0} format not supported")]
    UnsupportedFormat(String),

    #[error("unknown card kind '{0}' (expected credit or debit)")]
    UnknownCardKind(String),

    #[error("pizza is missing its {0}")]
    MissingPart(&'static str),
}

/// Failures raised while loading or checking the catalog document.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let error = PatternError::UnsupportedFormat("avi".to_string());
        assert_eq!(error.to_string(), "avi format not supported");
    }

    #[test]
    fn test_io_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = CatalogError::io("docs/missing.md", source);
        let display = error.to_string();
        assert!(display.contains("docs/missing.md"));
        assert!(display.contains("gone"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<PatternError>();
        assert_sync::<PatternError>();
        assert_send::<CatalogError>();
        assert_sync::<CatalogError>();
    }
}
