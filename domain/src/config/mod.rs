//! Configuration value objects for the domain layer
//!
//! Settings read from config files that the CLI also accepts as flags.

mod output_format;

pub use output_format::OutputFormat;
