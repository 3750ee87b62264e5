//! `reqwest` adapter for the conference API port.
//!
//! Each operation states its own 404 policy when matching on [`Reply`].
//! There are no retries and no client-side timeout; a failed exchange is
//! returned to the caller as-is.

use super::codec::{JSON_CONTENT_TYPE, JsonCodec};
use agenda_application::{ApiError, ApiResult, ConferenceApi};
use agenda_domain::{Attendee, SearchResult, SearchTerm, Session, Speaker};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

const USER_AGENT: &str = concat!("conference-agenda/", env!("CARGO_PKG_VERSION"));

/// A response with a 2xx status, or a 404
enum Reply {
    Success(Response),
    NotFound,
}

/// HTTP client for the remote conference API
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpConferenceApi {
    client: Client,
    base_url: Url,
}

impl HttpConferenceApi {
    pub fn new(base_url: Url) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use an existing `reqwest::Client` (and its connection pool).
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn parse(base_url: &str) -> ApiResult<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Self::new(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute(
        &self,
        method: Method,
        url: &Url,
        body: Option<Vec<u8>>,
    ) -> ApiResult<Response> {
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, url.clone());
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!("{} <- {}", response.status(), url);
        Ok(response)
    }

    async fn send(&self, method: Method, url: &Url, body: Option<Vec<u8>>) -> ApiResult<Reply> {
        let response = self.execute(method, url, body).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            Ok(Reply::NotFound)
        } else if status.is_success() {
            Ok(Reply::Success(response))
        } else {
            Err(unexpected(status, url))
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(JsonCodec::decode(&bytes)?)
    }

    /// GET a collection; 404 is an error.
    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> ApiResult<Vec<T>> {
        match self.send(Method::GET, &url, None).await? {
            Reply::Success(response) => Self::read_json(response).await,
            Reply::NotFound => Err(unexpected(StatusCode::NOT_FOUND, &url)),
        }
    }

    /// GET a single resource; 404 is `None`.
    async fn get_optional<T: DeserializeOwned>(&self, url: Url) -> ApiResult<Option<T>> {
        match self.send(Method::GET, &url, None).await? {
            Reply::Success(response) => Self::read_json(response).await.map(Some),
            Reply::NotFound => Ok(None),
        }
    }

    /// Send a request whose response body is ignored.
    async fn send_command(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        not_found_is_success: bool,
    ) -> ApiResult<()> {
        match self.send(method, &url, body).await? {
            Reply::Success(_) => Ok(()),
            Reply::NotFound if not_found_is_success => {
                debug!("{} already absent", url);
                Ok(())
            }
            Reply::NotFound => Err(unexpected(StatusCode::NOT_FOUND, &url)),
        }
    }
}

fn unexpected(status: StatusCode, url: &Url) -> ApiError {
    ApiError::UnexpectedStatus {
        status: status.as_u16(),
        url: url.to_string(),
    }
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

#[async_trait]
impl ConferenceApi for HttpConferenceApi {
    async fn list_sessions(&self) -> ApiResult<Vec<Session>> {
        self.get_list(self.endpoint(&["api", "sessions"])?).await
    }

    async fn get_session(&self, id: i64) -> ApiResult<Option<Session>> {
        let id = id.to_string();
        self.get_optional(self.endpoint(&["api", "sessions", &id])?).await
    }

    async fn put_session(&self, session: &Session) -> ApiResult<()> {
        session.validate()?;
        let id = session.id.to_string();
        let url = self.endpoint(&["api", "sessions", &id])?;
        let body = JsonCodec::encode(session)?;
        self.send_command(Method::PUT, url, Some(body), false).await
    }

    async fn delete_session(&self, id: i64) -> ApiResult<()> {
        let id = id.to_string();
        let url = self.endpoint(&["api", "sessions", &id])?;
        self.send_command(Method::DELETE, url, None, true).await
    }

    async fn list_speakers(&self) -> ApiResult<Vec<Speaker>> {
        self.get_list(self.endpoint(&["api", "speakers"])?).await
    }

    async fn get_speaker(&self, id: i64) -> ApiResult<Option<Speaker>> {
        let id = id.to_string();
        self.get_optional(self.endpoint(&["api", "speakers", &id])?).await
    }

    async fn add_attendee(&self, attendee: &Attendee) -> ApiResult<()> {
        let url = self.endpoint(&["api", "attendees"])?;
        let body = JsonCodec::encode(attendee)?;
        self.send_command(Method::POST, url, Some(body), false).await
    }

    async fn get_attendee(&self, name: &str) -> ApiResult<Option<Attendee>> {
        if is_blank(name) {
            debug!("Blank attendee name, skipping lookup");
            return Ok(None);
        }
        self.get_optional(self.endpoint(&["api", "attendees", name])?).await
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<SearchResult>> {
        let url = self.endpoint(&["api", "search"])?;
        let body = JsonCodec::encode(&SearchTerm::new(query))?;
        match self.send(Method::POST, &url, Some(body)).await? {
            Reply::Success(response) => Self::read_json(response).await,
            Reply::NotFound => Err(unexpected(StatusCode::NOT_FOUND, &url)),
        }
    }

    async fn sessions_by_attendee(&self, name: &str) -> ApiResult<Vec<Session>> {
        if is_blank(name) {
            debug!("Blank attendee name, no sessions");
            return Ok(Vec::new());
        }
        let url = self.endpoint(&["api", "attendees", name, "sessions"])?;
        Ok(self.get_optional(url).await?.unwrap_or_default())
    }

    async fn add_session_to_attendee(&self, name: &str, session_id: i64) -> ApiResult<()> {
        let session_id = session_id.to_string();
        let url = self.endpoint(&["api", "attendees", name, "session", &session_id])?;
        self.send_command(Method::POST, url, None, false).await
    }

    async fn remove_session_from_attendee(&self, name: &str, session_id: i64) -> ApiResult<()> {
        let session_id = session_id.to_string();
        let url = self.endpoint(&["api", "attendees", name, "session", &session_id])?;
        self.send_command(Method::DELETE, url, None, true).await
    }

    async fn check_health(&self) -> ApiResult<bool> {
        let url = self.endpoint(&["health"])?;
        let response = self.execute(Method::GET, &url, None).await?;
        Ok(response.status().is_success())
    }
}
