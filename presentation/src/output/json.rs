//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use agenda_application::{SearchOutcome, SessionDetail};
use agenda_domain::{Agenda, Attendee, Session, Speaker};
use serde::Serialize;
use serde_json::json;

/// Renders agenda views as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn agenda(&self, agenda: &Agenda, day: i64) -> String {
        Self::pretty(&json!({
            "day": day,
            "dayOffsets": agenda.day_offsets,
            "timeSlots": agenda.time_slots,
        }))
    }

    fn session(&self, detail: &SessionDetail) -> String {
        Self::pretty(detail)
    }

    fn speakers(&self, speakers: &[Speaker]) -> String {
        Self::pretty(speakers)
    }

    fn speaker(&self, speaker: &Speaker) -> String {
        Self::pretty(speaker)
    }

    fn search(&self, outcome: &SearchOutcome) -> String {
        Self::pretty(outcome)
    }

    fn attendee(&self, attendee: &Attendee, sessions: &[Session]) -> String {
        Self::pretty(&json!({
            "attendee": attendee,
            "sessions": sessions,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::Value;

    #[test]
    fn test_agenda_json_shape() {
        let start = DateTime::parse_from_rfc3339("2026-05-04T09:00:00Z").unwrap();
        let sessions = vec![Session::new(1, "Opening").with_times(start, start)];
        let agenda = Agenda::build(&sessions, 0);

        let value: Value = serde_json::from_str(&JsonFormatter.agenda(&agenda, 0)).unwrap();
        assert_eq!(value["day"], 0);
        assert_eq!(value["dayOffsets"][0]["weekday"], "Mon");
        assert_eq!(value["timeSlots"][0]["sessions"][0]["title"], "Opening");
    }

    #[test]
    fn test_session_uses_wire_field_names() {
        let detail = SessionDetail {
            session: Session::new(2, "Talk").with_abstract("Hello"),
            abstract_html: Some("<p>Hello</p>".to_string()),
            day_offset: None,
        };

        let value: Value = serde_json::from_str(&JsonFormatter.session(&detail)).unwrap();
        assert_eq!(value["session"]["abstract"], "Hello");
        assert_eq!(value["abstract_html"], "<p>Hello</p>");
        assert!(value["day_offset"].is_null());
    }

    #[test]
    fn test_attendee_bundles_sessions() {
        let output = JsonFormatter.attendee(&Attendee::new("ada"), &[Session::new(3, "Engines")]);

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["attendee"]["name"], "ada");
        assert_eq!(value["sessions"][0]["id"], 3);
    }
}
