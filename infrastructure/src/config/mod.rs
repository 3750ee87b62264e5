//! Configuration file loading for conference-agenda
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AGENDA_*` environment variables (`AGENDA_API__BASE_URL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./agenda.toml` or `./.agenda.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/conference-agenda/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileApiConfig, FileConfig, FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
