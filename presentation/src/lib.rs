//! Presentation layer for conference-agenda
//!
//! This crate contains CLI definitions and the text, JSON and HTML
//! renderers for agenda views.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::html::HtmlFormatter;
pub use output::json::JsonFormatter;
