//! Configuration types for Quill
//!
//! Defines the structure of `.quill.toml` configuration.

use crate::history::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuillConfig {
    /// Command history settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Clipboard settings
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Command history section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of commands kept for undo
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

/// Which clipboard store backs Copy, Cut and Paste
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// In-process string slot
    #[default]
    Memory,

    /// Operating system clipboard
    System,
}

impl std::str::FromStr for ClipboardBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(ClipboardBackend::Memory),
            "system" => Ok(ClipboardBackend::System),
            other => Err(format!("unknown clipboard backend '{}'", other)),
        }
    }
}

/// Clipboard section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}
