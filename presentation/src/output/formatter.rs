//! Output formatter trait

use super::{console::ConsoleFormatter, html::HtmlFormatter, json::JsonFormatter};
use agenda_application::{SearchOutcome, SessionDetail};
use agenda_domain::{Agenda, Attendee, OutputFormat, Session, Speaker};

/// Trait for rendering agenda views
pub trait OutputFormatter {
    /// Render the agenda for the selected day
    fn agenda(&self, agenda: &Agenda, day: i64) -> String;

    /// Render a session detail view
    fn session(&self, detail: &SessionDetail) -> String;

    fn speakers(&self, speakers: &[Speaker]) -> String;

    fn speaker(&self, speaker: &Speaker) -> String;

    fn search(&self, outcome: &SearchOutcome) -> String;

    /// Render an attendee together with their personal agenda
    fn attendee(&self, attendee: &Attendee, sessions: &[Session]) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Html => Box::new(HtmlFormatter::new()),
    }
}
