use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{RenderOptions, MAX_INDENT};

/// Configuration for an [`InMemoryDocumentStore`](crate::InMemoryDocumentStore).
///
/// Loaded from TOML; any missing table or key falls back to its default.
///
/// ```toml
/// [render]
/// indent = 2
/// trailing_comma = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub render: RenderOptions,
}

/// Errors from loading a [`StoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

impl StoreConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the TOML types alone do not constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.indent > MAX_INDENT {
            return Err(ConfigError::Invalid {
                key: "render.indent".into(),
                reason: format!("{} exceeds maximum of {MAX_INDENT}", self.render.indent),
            });
        }
        Ok(())
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
