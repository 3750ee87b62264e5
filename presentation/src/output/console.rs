//! Console output formatter for agenda views

use super::{speaker_names, time_range};
use crate::output::formatter::OutputFormatter;
use agenda_application::{SearchOutcome, SessionDetail};
use agenda_domain::{Agenda, Attendee, PARAGRAPH_DELIMITER, Session, Speaker};
use colored::Colorize;

/// Formats agenda views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one day of the agenda
    pub fn format_agenda(agenda: &Agenda, day: i64) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Conference Agenda"));
        output.push('\n');

        if agenda.day_offsets.is_empty() {
            output.push_str(&format!("\n{}\n", "No sessions scheduled.".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        let days = agenda
            .day_offsets
            .iter()
            .map(|d| {
                if d.offset == day {
                    format!("[{}]", d.weekday).yellow().bold().to_string()
                } else {
                    format!(" {} ", d.weekday)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&format!("{} {}\n", "Days:".cyan().bold(), days));

        if agenda.time_slots.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "No sessions scheduled for this day.".dimmed()
            ));
        }

        for slot in &agenda.time_slots {
            output.push_str(&Self::section_header(
                &slot.starts_at.format("%H:%M").to_string(),
            ));
            for session in &slot.sessions {
                output.push_str(&Self::session_line(session));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a session with its metadata and abstract
    pub fn format_session(detail: &SessionDetail) -> String {
        let session = &detail.session;
        let mut output = String::new();

        output.push_str(&Self::header(&session.title));
        output.push('\n');

        output.push_str(&format!("{} #{}\n", "Session:".cyan().bold(), session.id));

        if let Some(start) = session.start_time {
            let mut when = format!(
                "{} {}",
                start.format("%a %Y-%m-%d"),
                time_range(session).unwrap_or_default()
            );
            if let Some(offset) = detail.day_offset {
                when.push_str(&format!(" (day {})", offset));
            }
            output.push_str(&format!("{} {}\n", "When:".cyan().bold(), when));
        }

        if let Some(track) = &session.track {
            output.push_str(&format!("{} {}\n", "Track:".cyan().bold(), track.name));
        }

        if !session.speakers.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Speakers:".cyan().bold(),
                speaker_names(session)
            ));
        }

        let paragraphs: Vec<&str> = session
            .abstract_text
            .as_deref()
            .map(|text| {
                text.split(PARAGRAPH_DELIMITER)
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if !paragraphs.is_empty() {
            output.push_str(&Self::section_header("Abstract"));
            output.push_str(&format!("\n{}\n", paragraphs.join("\n\n")));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_speakers(speakers: &[Speaker]) -> String {
        if speakers.is_empty() {
            return format!("{}\n", "No speakers.".dimmed());
        }

        let mut output = format!("{}\n", "Speakers".cyan().bold());
        for speaker in speakers {
            output.push_str(&format!(
                "  {} {}\n",
                format!("#{:<4}", speaker.id).dimmed(),
                speaker.name
            ));
        }
        output
    }

    pub fn format_speaker(speaker: &Speaker) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&speaker.name));
        output.push('\n');

        if let Some(web_site) = &speaker.web_site {
            output.push_str(&format!("{} {}\n", "Web:".cyan().bold(), web_site));
        }
        if let Some(bio) = &speaker.bio {
            output.push_str(&format!("\n{}\n", bio));
        }

        if !speaker.sessions.is_empty() {
            output.push_str(&Self::section_header("Sessions"));
            for session in &speaker.sessions {
                output.push_str(&format!(
                    "  {} {}\n",
                    format!("#{:<4}", session.id).dimmed(),
                    session.title
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_search(outcome: &SearchOutcome) -> String {
        let mut output = format!(
            "{} {:?} ({} results)\n",
            "Search:".cyan().bold(),
            outcome.query,
            outcome.len()
        );

        if outcome.is_empty() {
            output.push_str(&format!("\n{}\n", "Nothing found.".dimmed()));
            return output;
        }

        if !outcome.sessions.is_empty() {
            output.push_str(&Self::section_header("Sessions"));
            for session in &outcome.sessions {
                output.push_str(&Self::session_line(session));
            }
        }

        if !outcome.speakers.is_empty() {
            output.push_str(&Self::section_header("Speakers"));
            for speaker in &outcome.speakers {
                output.push_str(&format!(
                    "  {} {}\n",
                    format!("#{:<4}", speaker.id).dimmed(),
                    speaker.name
                ));
            }
        }

        output
    }

    pub fn format_attendee(attendee: &Attendee, sessions: &[Session]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&attendee.display_name()));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Name:".cyan().bold(), attendee.name));
        if let Some(email) = &attendee.email_address {
            output.push_str(&format!("{} {}\n", "Email:".cyan().bold(), email));
        }

        output.push_str(&Self::section_header("Personal Agenda"));
        if sessions.is_empty() {
            output.push_str(&format!("  {}\n", "No sessions selected.".dimmed()));
        }
        for session in sessions {
            output.push_str(&Self::session_line(session));
        }

        output.push_str(&Self::footer());
        output
    }

    fn session_line(session: &Session) -> String {
        let mut line = format!(
            "  {} {}",
            format!("#{:<4}", session.id).dimmed(),
            session.title.bold()
        );
        if let Some(range) = time_range(session) {
            line.push_str(&format!("  {}", range));
        }
        if let Some(track) = &session.track {
            line.push_str(&format!("  [{}]", track.name).yellow().to_string());
        }
        line.push('\n');

        if !session.speakers.is_empty() {
            line.push_str(&format!("        {}\n", speaker_names(session).dimmed()));
        }
        line
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn agenda(&self, agenda: &Agenda, day: i64) -> String {
        Self::format_agenda(agenda, day)
    }

    fn session(&self, detail: &SessionDetail) -> String {
        Self::format_session(detail)
    }

    fn speakers(&self, speakers: &[Speaker]) -> String {
        Self::format_speakers(speakers)
    }

    fn speaker(&self, speaker: &Speaker) -> String {
        Self::format_speaker(speaker)
    }

    fn search(&self, outcome: &SearchOutcome) -> String {
        Self::format_search(outcome)
    }

    fn attendee(&self, attendee: &Attendee, sessions: &[Session]) -> String {
        Self::format_attendee(attendee, sessions)
    }
}
