//! Conference API port
//!
//! Defines the interface for fetching and updating conference data on the
//! remote service. The HTTP adapter lives in the infrastructure layer.
//!
//! # Not-found policy
//!
//! | Operation | 404 means |
//! |-----------|-----------|
//! | single-resource lookups (`get_*`) | `Ok(None)` |
//! | `delete_session`, `remove_session_from_attendee` | `Ok(())` (already gone) |
//! | `sessions_by_attendee` | `Ok(vec![])` |
//! | everything else | [`ApiError::UnexpectedStatus`] |
//!
//! Nothing is retried. Dropping a returned future cancels its request.

use agenda_domain::{Attendee, DomainError, SearchResult, Session, Speaker};
use async_trait::async_trait;
use thiserror::Error;

/// Result alias for conference API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the conference API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Refusing to send invalid session: {0}")]
    InvalidSession(#[from] DomainError),
}

impl ApiError {
    /// Transport-class failure: the exchange itself failed or its body was unusable.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }

    /// HTTP status code, if the server answered with an unexpected one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Remote conference service
///
/// Each call is independent; implementations hold no per-call state and may
/// be shared across concurrent tasks.
#[async_trait]
pub trait ConferenceApi: Send + Sync {
    /// `GET /api/sessions`
    async fn list_sessions(&self) -> ApiResult<Vec<Session>>;

    /// `GET /api/sessions/{id}`
    async fn get_session(&self, id: i64) -> ApiResult<Option<Session>>;

    /// `PUT /api/sessions/{id}` with the full session as body
    async fn put_session(&self, session: &Session) -> ApiResult<()>;

    /// `DELETE /api/sessions/{id}`; idempotent
    async fn delete_session(&self, id: i64) -> ApiResult<()>;

    /// `GET /api/speakers`
    async fn list_speakers(&self) -> ApiResult<Vec<Speaker>>;

    /// `GET /api/speakers/{id}`
    async fn get_speaker(&self, id: i64) -> ApiResult<Option<Speaker>>;

    /// `POST /api/attendees`
    async fn add_attendee(&self, attendee: &Attendee) -> ApiResult<()>;

    /// `GET /api/attendees/{name}`; a blank name is `None` without a request
    async fn get_attendee(&self, name: &str) -> ApiResult<Option<Attendee>>;

    /// `POST /api/search` with `{"query": ...}`; an empty query is still sent
    async fn search(&self, query: &str) -> ApiResult<Vec<SearchResult>>;

    /// `GET /api/attendees/{name}/sessions`; a blank name is empty without a request
    async fn sessions_by_attendee(&self, name: &str) -> ApiResult<Vec<Session>>;

    /// `POST /api/attendees/{name}/session/{session_id}`
    async fn add_session_to_attendee(&self, name: &str, session_id: i64) -> ApiResult<()>;

    /// `DELETE /api/attendees/{name}/session/{session_id}`; idempotent
    async fn remove_session_from_attendee(&self, name: &str, session_id: i64) -> ApiResult<()>;

    /// `GET /health`; `true` on any 2xx
    async fn check_health(&self) -> ApiResult<bool>;
}
