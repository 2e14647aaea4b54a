//! Configuration module for Quill
//!
//! Handles loading and parsing of `.quill.toml` configuration files
//! with environment variable overrides.

mod loader;
mod types;

pub use loader::{load_config, load_from_file, sample_config, ConfigError};
pub use types::{ClipboardBackend, ClipboardConfig, HistoryConfig, QuillConfig};
