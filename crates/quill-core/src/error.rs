//! Error types for Quill Core
//!
//! Command execution reports plain `bool` results. These types cover the
//! infrastructure around it: configuration, clipboard backends and lookups.

use thiserror::Error;

/// Result type for Quill Core operations
pub type Result<T> = std::result::Result<T, QuillError>;

/// Unified error type for Quill Core
#[derive(Error, Debug)]
pub enum QuillError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard backend error
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// No command is registered under the given name
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl QuillError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        QuillError::Config(msg.into())
    }

    /// Create an unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        QuillError::UnknownCommand(name.into())
    }
}

/// Clipboard backend errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard backend failure: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for QuillError {
    fn from(err: serde_json::Error) -> Self {
        QuillError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for QuillError {
    fn from(err: toml::de::Error) -> Self {
        QuillError::config(err.to_string())
    }
}

impl From<crate::config::ConfigError> for QuillError {
    fn from(err: crate::config::ConfigError) -> Self {
        match err {
            crate::config::ConfigError::ReadError(io) => QuillError::Io(io),
            other => QuillError::config(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: QuillError = io_err.into();
        assert!(matches!(err, QuillError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_unknown_command_display() {
        let err = QuillError::unknown_command("redo");
        assert_eq!(err.to_string(), "Unknown command: redo");
    }

    #[test]
    fn test_clipboard_conversion_keeps_source() {
        let err: QuillError = ClipboardError::Unavailable("no display".to_string()).into();
        assert!(matches!(err, QuillError::Clipboard(_)));
        assert_eq!(
            err.to_string(),
            "Clipboard error: Clipboard unavailable: no display"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_toml_error_becomes_config() {
        let parse_err = toml::from_str::<toml::Value>("history = [").unwrap_err();
        let err: QuillError = parse_err.into();
        assert!(matches!(err, QuillError::Config(_)));
    }

    #[test]
    fn test_config_error_read_maps_to_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: QuillError = crate::config::ConfigError::ReadError(io_err).into();
        assert!(matches!(err, QuillError::Io(_)));
    }
}
