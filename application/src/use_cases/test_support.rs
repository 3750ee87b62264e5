//! In-memory conference API for use case tests.

use crate::ports::conference_api::{ApiError, ApiResult, ConferenceApi};
use agenda_domain::{Attendee, SearchResult, Session, Speaker, Track};
use async_trait::async_trait;
use chrono::{DateTime, Duration};
use std::collections::HashMap;
use std::sync::Mutex;

/// Session starting at `start` (RFC 3339) and lasting one hour.
pub(crate) fn session_at(id: i64, start: &str, track: Option<i64>) -> Session {
    let start = DateTime::parse_from_rfc3339(start).unwrap();
    let mut session =
        Session::new(id, format!("Session {}", id)).with_times(start, start + Duration::hours(1));
    if let Some(track) = track {
        session = session.with_track(Track::new(track, format!("Track {}", track)));
    }
    session
}

/// Records every call and answers from fixed data
#[derive(Default)]
pub(crate) struct FakeConferenceApi {
    sessions: Vec<Session>,
    speakers: Vec<Speaker>,
    search_results: Vec<SearchResult>,
    attendee_sessions: HashMap<String, Vec<i64>>,
    failure: Option<u16>,
    calls: Mutex<Vec<String>>,
}

impl FakeConferenceApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_sessions(mut self, sessions: Vec<Session>) -> Self {
        self.sessions = sessions;
        self
    }

    pub(crate) fn with_search_results(mut self, results: Vec<SearchResult>) -> Self {
        self.search_results = results;
        self
    }

    pub(crate) fn with_attendee_sessions(mut self, name: &str, ids: Vec<i64>) -> Self {
        self.attendee_sessions.insert(name.to_string(), ids);
        self
    }

    /// Every call fails with this status
    pub(crate) fn failing_with(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call.clone());
        match self.failure {
            Some(status) => Err(ApiError::UnexpectedStatus {
                status,
                url: format!("fake://{}", call),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ConferenceApi for FakeConferenceApi {
    async fn list_sessions(&self) -> ApiResult<Vec<Session>> {
        self.record("list_sessions".into())?;
        Ok(self.sessions.clone())
    }

    async fn get_session(&self, id: i64) -> ApiResult<Option<Session>> {
        self.record(format!("get_session:{}", id))?;
        Ok(self.sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn put_session(&self, session: &Session) -> ApiResult<()> {
        self.record(format!("put_session:{}", session.id))
    }

    async fn delete_session(&self, id: i64) -> ApiResult<()> {
        self.record(format!("delete_session:{}", id))
    }

    async fn list_speakers(&self) -> ApiResult<Vec<Speaker>> {
        self.record("list_speakers".into())?;
        Ok(self.speakers.clone())
    }

    async fn get_speaker(&self, id: i64) -> ApiResult<Option<Speaker>> {
        self.record(format!("get_speaker:{}", id))?;
        Ok(self.speakers.iter().find(|s| s.id == id).cloned())
    }

    async fn add_attendee(&self, attendee: &Attendee) -> ApiResult<()> {
        self.record(format!("add_attendee:{}", attendee.name))
    }

    async fn get_attendee(&self, name: &str) -> ApiResult<Option<Attendee>> {
        self.record(format!("get_attendee:{}", name))?;
        Ok(self
            .attendee_sessions
            .contains_key(name)
            .then(|| Attendee::new(name)))
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<SearchResult>> {
        self.record(format!("search:{}", query))?;
        Ok(self.search_results.clone())
    }

    async fn sessions_by_attendee(&self, name: &str) -> ApiResult<Vec<Session>> {
        self.record(format!("sessions_by_attendee:{}", name))?;
        let ids = self.attendee_sessions.get(name).cloned().unwrap_or_default();
        Ok(self
            .sessions
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn add_session_to_attendee(&self, name: &str, session_id: i64) -> ApiResult<()> {
        self.record(format!("add_session_to_attendee:{}:{}", name, session_id))
    }

    async fn remove_session_from_attendee(&self, name: &str, session_id: i64) -> ApiResult<()> {
        self.record(format!(
            "remove_session_from_attendee:{}:{}",
            name, session_id
        ))
    }

    async fn check_health(&self) -> ApiResult<bool> {
        self.record("check_health".into())?;
        Ok(true)
    }
}
