//! Output format value object

use serde::{Deserialize, Serialize};

/// How agenda and session views are rendered
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored terminal text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Escaped HTML fragment
    Html,
}
