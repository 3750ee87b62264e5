//! CLI command definitions

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for agenda views
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal text
    Text,
    /// Pretty-printed JSON
    Json,
    /// HTML fragment with escaped content
    Html,
}

impl From<OutputFormat> for agenda_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
            OutputFormat::Html => Self::Html,
        }
    }
}

/// CLI arguments for conference-agenda
#[derive(Parser, Debug)]
#[command(name = "conference-agenda")]
#[command(author, version, about = "Browse a conference agenda from the command line")]
#[command(long_about = r#"
Conference Agenda talks to a conference back-end over HTTP and shows its
sessions grouped by day and start time.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./agenda.toml       Project-level config
3. ~/.config/conference-agenda/config.toml   Global config

Environment variables such as AGENDA_API__BASE_URL override files, and
--base-url overrides everything.

Example:
  conference-agenda agenda --day 1
  conference-agenda session 42 --output html
  conference-agenda add-to-agenda ada 42
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base URL of the conference service
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the sessions of one conference day, grouped by start time
    Agenda {
        /// Day offset from the first conference day
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        day: i64,

        /// Only show sessions on this attendee's personal agenda
        #[arg(short, long, value_name = "NAME")]
        attendee: Option<String>,
    },

    /// Show one session with its abstract
    Session { id: i64 },

    /// List all speakers
    Speakers,

    /// Show one speaker
    Speaker { id: i64 },

    /// Search sessions and speakers
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Show an attendee
    Attendee { name: String },

    /// Register an attendee
    Register {
        name: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long, value_name = "ADDRESS")]
        email: Option<String>,
    },

    /// Add a session to an attendee's personal agenda
    AddToAgenda { name: String, session_id: i64 },

    /// Remove a session from an attendee's personal agenda
    RemoveFromAgenda { name: String, session_id: i64 },

    /// Move a session to a new time range
    Reschedule {
        id: i64,

        /// New start time (RFC 3339)
        #[arg(long, value_parser = parse_timestamp)]
        start: DateTime<FixedOffset>,

        /// New end time (RFC 3339)
        #[arg(long, value_parser = parse_timestamp)]
        end: DateTime<FixedOffset>,
    },

    /// Delete a session
    DeleteSession { id: i64 },

    /// Check that the conference service is reachable
    Health,
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| format!("expected an RFC 3339 timestamp like 2026-05-04T09:00:00+02:00: {e}"))
}
