//! Show Agenda use case
//!
//! Fetches sessions and buckets them into conference days and time slots.
//! Either the whole conference or one attendee's personal selection can be
//! shown.

use crate::ports::conference_api::{ApiResult, ConferenceApi};
use agenda_domain::Agenda;
use std::sync::Arc;
use tracing::info;

/// Input for the ShowAgenda use case
#[derive(Debug, Clone, Default)]
pub struct ShowAgendaInput {
    /// Day offset from the first conference day
    pub day: i64,
    /// Restrict to the sessions this attendee picked
    pub attendee: Option<String>,
}

impl ShowAgendaInput {
    pub fn new(day: i64) -> Self {
        Self {
            day,
            attendee: None,
        }
    }

    pub fn for_attendee(mut self, name: impl Into<String>) -> Self {
        self.attendee = Some(name.into());
        self
    }
}

/// Use case for computing an agenda day
pub struct ShowAgendaUseCase {
    api: Arc<dyn ConferenceApi>,
}

impl ShowAgendaUseCase {
    pub fn new(api: Arc<dyn ConferenceApi>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, input: ShowAgendaInput) -> ApiResult<Agenda> {
        let sessions = match &input.attendee {
            Some(name) => self.api.sessions_by_attendee(name).await?,
            None => self.api.list_sessions().await?,
        };

        let agenda = Agenda::build(&sessions, input.day);
        info!(
            "Agenda day {} of {}: {} time slots from {} sessions",
            input.day,
            agenda.number_of_days(),
            agenda.time_slots.len(),
            sessions.len()
        );
        Ok(agenda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conference_api::ApiError;
    use crate::use_cases::test_support::{FakeConferenceApi, session_at};

    #[tokio::test]
    async fn test_full_agenda() {
        let api = FakeConferenceApi::new().with_sessions(vec![
            session_at(1, "2026-05-04T09:00:00Z", Some(2)),
            session_at(2, "2026-05-04T09:00:00Z", Some(1)),
            session_at(3, "2026-05-05T10:00:00Z", Some(1)),
        ]);
        let use_case = ShowAgendaUseCase::new(Arc::new(api));

        let agenda = use_case.execute(ShowAgendaInput::new(0)).await.unwrap();
        assert_eq!(agenda.number_of_days(), 2);
        assert_eq!(agenda.time_slots.len(), 1);
        let ids: Vec<i64> = agenda.time_slots[0].sessions.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_personal_agenda_uses_attendee_sessions() {
        let api = FakeConferenceApi::new()
            .with_sessions(vec![
                session_at(1, "2026-05-04T09:00:00Z", Some(1)),
                session_at(2, "2026-05-04T11:00:00Z", Some(1)),
            ])
            .with_attendee_sessions("ada", vec![2]);
        let api = Arc::new(api);
        let use_case = ShowAgendaUseCase::new(api.clone());

        let agenda = use_case
            .execute(ShowAgendaInput::new(0).for_attendee("ada"))
            .await
            .unwrap();
        assert_eq!(agenda.time_slots.len(), 1);
        assert_eq!(agenda.time_slots[0].sessions[0].id, 2);
        assert_eq!(api.calls(), vec!["sessions_by_attendee:ada".to_string()]);
    }

    #[tokio::test]
    async fn test_api_failure_propagates() {
        let api = FakeConferenceApi::new().failing_with(500);
        let use_case = ShowAgendaUseCase::new(Arc::new(api));

        let err = use_case.execute(ShowAgendaInput::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
    }
}
