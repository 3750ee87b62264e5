//! `[output]` section: how results are rendered when no flag says otherwise

use agenda_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Rendering preferences from the config file
///
/// `--output` and `--no-color` on the command line win over these. An unset
/// `format` leaves the choice to the CLI, which falls back to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    /// `false` strips ANSI colors from text output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Resolve the format: explicit choice, then this section, then text.
    pub fn resolve_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }
}
