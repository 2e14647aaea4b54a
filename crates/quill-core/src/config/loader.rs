//! Configuration loader with environment variable overrides
//!
//! Loads configuration from `.quill.toml` in the project root or the user
//! config directory.

use super::types::{ClipboardBackend, QuillConfig};
use std::path::{Path, PathBuf};

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

const PROJECT_CONFIG: &str = ".quill.toml";
const ENV_HISTORY_CAPACITY: &str = "QUILL_HISTORY_CAPACITY";
const ENV_CLIPBOARD: &str = "QUILL_CLIPBOARD";

/// Load configuration from various sources
///
/// Priority order:
/// 1. Project-level `.quill.toml`
/// 2. User-level `~/.config/quill/config.toml`
/// 3. Default configuration
///
/// Environment overrides are applied on top of whichever source won.
pub fn load_config(project_dir: &Path) -> Result<QuillConfig, ConfigError> {
    let project_config = project_dir.join(PROJECT_CONFIG);
    if project_config.exists() {
        return load_from_file(&project_config);
    }

    if let Some(user_config) = get_user_config_path() {
        if user_config.exists() {
            return load_from_file(&user_config);
        }
    }

    let config = apply_env_overrides(QuillConfig::default(), env_lookup)?;
    validate(&config)?;
    Ok(config)
}

/// Get user config directory path
fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("quill").join("config.toml"))
}

/// Load configuration from a specific file
pub fn load_from_file(path: &Path) -> Result<QuillConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: QuillConfig = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");

    let config = apply_env_overrides(config, env_lookup)?;
    validate(&config)?;
    Ok(config)
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Apply environment variable overrides
///
/// - QUILL_HISTORY_CAPACITY -> history.capacity
/// - QUILL_CLIPBOARD -> clipboard.backend ("memory" or "system")
fn apply_env_overrides<F>(mut config: QuillConfig, lookup: F) -> Result<QuillConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_HISTORY_CAPACITY) {
        config.history.capacity = raw.trim().parse::<usize>().map_err(|e| {
            ConfigError::InvalidValue {
                key: ENV_HISTORY_CAPACITY.to_string(),
                message: e.to_string(),
            }
        })?;
    }

    if let Some(raw) = lookup(ENV_CLIPBOARD) {
        config.clipboard.backend = raw.parse::<ClipboardBackend>().map_err(|message| {
            ConfigError::InvalidValue {
                key: ENV_CLIPBOARD.to_string(),
                message,
            }
        })?;
    }

    Ok(config)
}

fn validate(config: &QuillConfig) -> Result<(), ConfigError> {
    if config.history.capacity == 0 {
        return Err(ConfigError::InvalidValue {
            key: "history.capacity".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Create a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# Quill Configuration
# Place this file in your project root as .quill.toml
# or in ~/.config/quill/config.toml for global settings

[history]
# Maximum number of commands kept for undo
capacity = 100

[clipboard]
# memory: private to the editor, system: the OS clipboard
backend = "memory"
"#
}
