//! Configuration schema types for `penrose.toml`
//!
//! Defines the structure and validation rules for the command-line tool's
//! optional configuration file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log levels accepted by `[log] level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// What the CLI emits for each minted token
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SVG markup
    #[default]
    Svg,
    /// `data:image/svg+xml;base64,...` URI
    Uri,
    /// The 64 raw grid rows
    Raw,
    /// JSON token record (id, seed, schemes, image URI)
    Json,
}

impl OutputFormat {
    /// File extension used when writing this format to a directory.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Uri | Self::Raw => "txt",
            Self::Json => "json",
        }
    }
}

/// Output section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory to write `<id>.<ext>` files into; stdout when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default tracing level, overridden by `RUST_LOG`
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Full `penrose.toml` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PenroseConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "log.level")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "penrose.toml: '{}' {}", self.field, self.message)
    }
}

impl PenroseConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Some(dir) = &self.output.dir {
            if dir.as_os_str().is_empty() {
                errors.push(ConfigValidationError {
                    field: "output.dir".to_string(),
                    message: "must be a non-empty path".to_string(),
                });
            }
        }

        if !LOG_LEVELS.contains(&self.log.level.to_ascii_lowercase().as_str()) {
            errors.push(ConfigValidationError {
                field: "log.level".to_string(),
                message: format!("must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        errors
    }
}
