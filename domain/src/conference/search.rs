//! Search request and result types.
//!
//! The remote API returns each hit as a flat record with a `type` tag and one
//! populated payload field. [`SearchResult`] is the typed form; conversion to
//! and from the wire record goes through [`SearchResultRecord`].

use super::entities::{Session, Speaker};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Request body for the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    pub query: String,
}

impl SearchTerm {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Which entity a search hit refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchResultKind {
    Session,
    Speaker,
}

impl std::fmt::Display for SearchResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResultKind::Session => write!(f, "Session"),
            SearchResultKind::Speaker => write!(f, "Speaker"),
        }
    }
}

/// Flat wire record for a search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultRecord {
    #[serde(rename = "type")]
    pub kind: SearchResultKind,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub speaker: Option<Speaker>,
}

/// A single search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SearchResultRecord", into = "SearchResultRecord")]
pub enum SearchResult {
    Session(Session),
    Speaker(Speaker),
}

impl SearchResult {
    pub fn kind(&self) -> SearchResultKind {
        match self {
            SearchResult::Session(_) => SearchResultKind::Session,
            SearchResult::Speaker(_) => SearchResultKind::Speaker,
        }
    }
}

impl TryFrom<SearchResultRecord> for SearchResult {
    type Error = DomainError;

    fn try_from(record: SearchResultRecord) -> Result<Self, Self::Error> {
        let kind = record.kind;
        let missing = || DomainError::MissingSearchPayload {
            kind: kind.to_string(),
        };
        match kind {
            SearchResultKind::Session => record
                .session
                .map(SearchResult::Session)
                .ok_or_else(missing),
            SearchResultKind::Speaker => record
                .speaker
                .map(SearchResult::Speaker)
                .ok_or_else(missing),
        }
    }
}

impl From<SearchResult> for SearchResultRecord {
    fn from(result: SearchResult) -> Self {
        match result {
            SearchResult::Session(session) => Self {
                kind: SearchResultKind::Session,
                session: Some(session),
                speaker: None,
            },
            SearchResult::Speaker(speaker) => Self {
                kind: SearchResultKind::Speaker,
                session: None,
                speaker: Some(speaker),
            },
        }
    }
}
