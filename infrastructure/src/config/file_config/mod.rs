//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;

pub use api::{DEFAULT_BASE_URL, FileApiConfig};
pub use output::FileOutputConfig;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("api.base_url '{url}' is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("api.base_url '{0}' must use http or https")]
    UnsupportedScheme(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote conference service
    pub api: FileApiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration and return the parsed base URL.
    pub fn validate(&self) -> Result<Url, ConfigValidationError> {
        let raw = self.api.base_url.trim();
        if raw.is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        let url = Url::parse(raw).map_err(|e| ConfigValidationError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigValidationError::UnsupportedScheme(raw.to_string())),
        }
    }
}
