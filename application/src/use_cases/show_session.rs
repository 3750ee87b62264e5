//! Show Session use case
//!
//! Loads one session for its detail view: the session itself, its abstract
//! as escaped paragraph markup, and the agenda day it belongs to.

use crate::ports::conference_api::{ApiResult, ConferenceApi};
use agenda_domain::{HtmlEscaper, Session, TextEscaper, day_offset_of, format_abstract};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Everything the session detail view needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionDetail {
    pub session: Session,
    /// Escaped `<p>` paragraphs, absent when the session has no abstract
    pub abstract_html: Option<String>,
    /// Agenda day of the session, for linking back to it
    pub day_offset: Option<i64>,
}

/// Use case for loading a session detail view
pub struct ShowSessionUseCase {
    api: Arc<dyn ConferenceApi>,
    escaper: Arc<dyn TextEscaper + Send + Sync>,
}

impl ShowSessionUseCase {
    /// Create the use case with the default HTML escaper
    pub fn new(api: Arc<dyn ConferenceApi>) -> Self {
        Self {
            api,
            escaper: Arc::new(HtmlEscaper),
        }
    }

    pub fn with_escaper(mut self, escaper: Arc<dyn TextEscaper + Send + Sync>) -> Self {
        self.escaper = escaper;
        self
    }

    /// Returns `None` when the session does not exist.
    pub async fn execute(&self, id: i64) -> ApiResult<Option<SessionDetail>> {
        let (session, all_sessions) =
            futures::try_join!(self.api.get_session(id), self.api.list_sessions())?;

        let Some(session) = session else {
            debug!("Session {} not found", id);
            return Ok(None);
        };

        let abstract_html = format_abstract(session.abstract_text.as_deref(), &*self.escaper);
        let day_offset = day_offset_of(&all_sessions, &session);

        Ok(Some(SessionDetail {
            session,
            abstract_html,
            day_offset,
        }))
    }
}
