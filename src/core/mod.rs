use std::{fmt, path::Path, path::PathBuf};

use thiserror::Error;

/// Error types for the appwrap tool.
///
/// Covers failures while loading the tool's own settings and while
/// validating configuration input outside of an editor session.
#[derive(Error, Debug)]
pub enum AppwrapError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// JSON payload could not be read
    #[error("failed to parse JSON at '{location}': {details}")]
    JsonParseError {
        /// Location of the JSON being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for appwrap operations.
pub type Result<T> = std::result::Result<T, AppwrapError>;

impl AppwrapError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        AppwrapError::TomlParseError {
            location: location_of(path),
            details: error.to_string(),
        }
    }

    /// Creates a JSON parsing error with optional file path context.
    pub fn json_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        AppwrapError::JsonParseError {
            location: location_of(path),
            details: error.to_string(),
        }
    }

    /// Wraps an I/O failure together with the path it happened on.
    pub fn io_at(error: impl fmt::Display, path: &Path) -> Self {
        AppwrapError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}

fn location_of(path: Option<&Path>) -> String {
    match path {
        Some(p) => {
            let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
            clean_path.to_string_lossy().to_string()
        }
        None => "string".to_string(),
    }
}
