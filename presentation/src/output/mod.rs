//! Output formatting for agenda views

pub mod console;
pub mod formatter;
pub mod html;
pub mod json;

use agenda_domain::Session;

/// "09:00-10:00", or just the start when there is no end
pub(crate) fn time_range(session: &Session) -> Option<String> {
    let start = session.start_time?;
    Some(match session.end_time {
        Some(end) => format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")),
        None => start.format("%H:%M").to_string(),
    })
}

/// Speaker names joined for a one-line listing
pub(crate) fn speaker_names(session: &Session) -> String {
    session
        .speakers
        .iter()
        .map(|speaker| speaker.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_domain::Speaker;
    use chrono::DateTime;

    #[test]
    fn test_time_range() {
        let start = DateTime::parse_from_rfc3339("2026-05-04T09:00:00+02:00").unwrap();
        let end = DateTime::parse_from_rfc3339("2026-05-04T10:30:00+02:00").unwrap();
        let session = Session::new(1, "Opening").with_times(start, end);
        assert_eq!(time_range(&session).as_deref(), Some("09:00-10:30"));
        assert_eq!(time_range(&Session::new(2, "Undated")), None);
    }

    #[test]
    fn test_speaker_names() {
        let session = Session::new(1, "Pairing")
            .with_speaker(Speaker::new(1, "Ada"))
            .with_speaker(Speaker::new(2, "Charles"));
        assert_eq!(speaker_names(&session), "Ada, Charles");
    }
}
