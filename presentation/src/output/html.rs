//! HTML fragment formatter
//!
//! Every service-provided string goes through the escaper before it is
//! embedded. Abstracts arrive already rendered as escaped paragraphs.

use super::{speaker_names, time_range};
use crate::output::formatter::OutputFormatter;
use agenda_application::{SearchOutcome, SessionDetail};
use agenda_domain::{Agenda, Attendee, HtmlEscaper, Session, Speaker, TextEscaper};

/// Renders agenda views as HTML fragments
pub struct HtmlFormatter {
    escaper: Box<dyn TextEscaper>,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self {
            escaper: Box::new(HtmlEscaper),
        }
    }

    fn esc(&self, text: &str) -> String {
        self.escaper.escape(text)
    }

    fn session_item(&self, session: &Session) -> String {
        let mut item = format!(
            "<li><a href=\"/sessions/{}\">{}</a>",
            session.id,
            self.esc(&session.title)
        );
        if let Some(range) = time_range(session) {
            item.push_str(&format!(" <time>{}</time>", range));
        }
        if let Some(track) = &session.track {
            item.push_str(&format!(
                " <span class=\"track\">{}</span>",
                self.esc(&track.name)
            ));
        }
        if !session.speakers.is_empty() {
            item.push_str(&format!(
                " <span class=\"speakers\">{}</span>",
                self.esc(&speaker_names(session))
            ));
        }
        item.push_str("</li>");
        item
    }

    fn speaker_item(&self, speaker: &Speaker) -> String {
        format!(
            "<li><a href=\"/speakers/{}\">{}</a></li>",
            speaker.id,
            self.esc(&speaker.name)
        )
    }

    fn list(items: impl IntoIterator<Item = String>) -> String {
        let mut out = String::from("<ul>");
        for item in items {
            out.push_str(&item);
        }
        out.push_str("</ul>");
        out
    }
}

/// Only `http` and `https` URLs become links; anything else (`javascript:`,
/// `data:`, relative paths) is shown as text.
fn is_web_link(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for HtmlFormatter {
    fn agenda(&self, agenda: &Agenda, day: i64) -> String {
        let mut out = String::from("<nav class=\"days\">");
        for d in &agenda.day_offsets {
            let class = if d.offset == day { " class=\"active\"" } else { "" };
            out.push_str(&format!(
                "<a href=\"?day={}\"{}>{}</a>",
                d.offset, class, d.weekday
            ));
        }
        out.push_str("</nav>");

        for slot in &agenda.time_slots {
            out.push_str(&format!(
                "<section class=\"slot\"><h3>{}</h3>{}</section>",
                slot.starts_at.format("%H:%M"),
                Self::list(slot.sessions.iter().map(|s| self.session_item(s)))
            ));
        }
        out
    }

    fn session(&self, detail: &SessionDetail) -> String {
        let session = &detail.session;
        let mut out = format!("<article><h1>{}</h1>", self.esc(&session.title));

        if let Some(range) = time_range(session) {
            out.push_str(&format!("<p class=\"when\"><time>{}</time>", range));
            if let Some(offset) = detail.day_offset {
                out.push_str(&format!(" <a href=\"/?day={}\">back to day</a>", offset));
            }
            out.push_str("</p>");
        }
        if let Some(track) = &session.track {
            out.push_str(&format!(
                "<p class=\"track\">{}</p>",
                self.esc(&track.name)
            ));
        }
        if !session.speakers.is_empty() {
            out.push_str(&Self::list(
                session.speakers.iter().map(|s| self.speaker_item(s)),
            ));
        }
        if let Some(abstract_html) = &detail.abstract_html {
            out.push_str(abstract_html);
        }

        out.push_str("</article>");
        out
    }

    fn speakers(&self, speakers: &[Speaker]) -> String {
        Self::list(speakers.iter().map(|s| self.speaker_item(s)))
    }

    fn speaker(&self, speaker: &Speaker) -> String {
        let mut out = format!("<article><h1>{}</h1>", self.esc(&speaker.name));
        if let Some(web_site) = &speaker.web_site {
            let text = self.esc(web_site);
            if is_web_link(web_site) {
                out.push_str(&format!("<p><a href=\"{}\">{}</a></p>", text, text));
            } else {
                out.push_str(&format!("<p>{}</p>", text));
            }
        }
        if let Some(bio) = &speaker.bio {
            out.push_str(&format!("<p>{}</p>", self.esc(bio)));
        }
        if !speaker.sessions.is_empty() {
            out.push_str(&Self::list(speaker.sessions.iter().map(|s| {
                format!(
                    "<li><a href=\"/sessions/{}\">{}</a></li>",
                    s.id,
                    self.esc(&s.title)
                )
            })));
        }
        out.push_str("</article>");
        out
    }

    fn search(&self, outcome: &SearchOutcome) -> String {
        let mut out = format!(
            "<section class=\"search\"><h2>Results for &quot;{}&quot;</h2>",
            self.esc(&outcome.query)
        );
        if !outcome.sessions.is_empty() {
            out.push_str("<h3>Sessions</h3>");
            out.push_str(&Self::list(
                outcome.sessions.iter().map(|s| self.session_item(s)),
            ));
        }
        if !outcome.speakers.is_empty() {
            out.push_str("<h3>Speakers</h3>");
            out.push_str(&Self::list(
                outcome.speakers.iter().map(|s| self.speaker_item(s)),
            ));
        }
        out.push_str("</section>");
        out
    }

    fn attendee(&self, attendee: &Attendee, sessions: &[Session]) -> String {
        format!(
            "<article><h1>{}</h1>{}</article>",
            self.esc(&attendee.display_name()),
            Self::list(sessions.iter().map(|s| self.session_item(s)))
        )
    }
}
