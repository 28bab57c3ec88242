//! Error types for templink
//!
//! Resolution itself never fails; these cover loading documents, symbol
//! indexes and configuration around it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported host document: {0}. Expected a .ts, .tsx or .js file.")]
    UnsupportedLanguage(String),

    #[error("File too large ({size_kb}KB > {limit_kb}KB limit): {path}")]
    FileTooLarge {
        path: String,
        size_kb: u64,
        limit_kb: u64,
    },

    #[error("Failed to parse {0}")]
    Parse(PathBuf),

    #[error("Invalid position {line}:{column}: {reason}")]
    InvalidPosition {
        line: u32,
        column: u32,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DocumentError {
    pub fn invalid_position(line: u32, column: u32, reason: impl Into<String>) -> Self {
        Self::InvalidPosition {
            line,
            column,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Invalid symbol index: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Symbol index not found: {0}")]
    NotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_position_message() {
        let err = DocumentError::invalid_position(3, 40, "column exceeds line length");
        assert_eq!(
            err.to_string(),
            "Invalid position 3:40: column exceeds line length"
        );
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = DocumentError::Parse(PathBuf::from("src/a.ts"));
        assert_eq!(err.to_string(), "Failed to parse src/a.ts");
    }

    #[test]
    fn test_error_messages() {
        let err = DocumentError::UnsupportedLanguage("py".to_string());
        assert!(err.to_string().starts_with("Unsupported host document: py"));

        let err = ConfigError::InvalidValue {
            key: "templates.extensions".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'templates.extensions': must not be empty"
        );
    }
}
