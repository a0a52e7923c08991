//! Error types for button configuration.

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a [`ButtonConfig`](crate::ButtonConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read button config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the expected layout.
    #[error("button config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color field is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color for '{field}': {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// A numeric field is outside its allowed range.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a color error.
    pub fn invalid_color(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field,
            value: value.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
