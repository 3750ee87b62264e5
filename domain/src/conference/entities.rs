//! Conference entities as they travel over the wire.
//!
//! Every value here is an owned snapshot of an API payload. Tracks and
//! speakers embedded in a [`Session`] are copies, not handles into a shared
//! store, so two concurrent fetches never alias each other's data.

use crate::core::error::DomainError;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A conference track (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: i64,
    pub name: String,
}

impl Track {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Minimal session reference carried inside a [`Speaker`] payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: i64,
    pub title: String,
}

/// A conference speaker (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub web_site: Option<String>,
    /// Sessions this speaker presents (only populated by speaker endpoints)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<SessionSummary>,
}

impl Speaker {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bio: None,
            web_site: None,
            sessions: Vec::new(),
        }
    }
}

/// A scheduled conference session (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub track_id: Option<i64>,
    #[serde(default)]
    pub track: Option<Track>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
}

impl Session {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            abstract_text: None,
            start_time: None,
            end_time: None,
            track_id: None,
            track: None,
            speakers: Vec::new(),
        }
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = Some(text.into());
        self
    }

    pub fn with_times(
        mut self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Set the track; `track_id` follows the track's id.
    pub fn with_track(mut self, track: Track) -> Self {
        self.track_id = Some(track.id);
        self.track = Some(track);
        self
    }

    pub fn with_speaker(mut self, speaker: Speaker) -> Self {
        self.speakers.push(speaker);
        self
    }

    /// Calendar date of the start time, in the timestamp's own offset.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_time.map(|t| t.date_naive())
    }

    /// Calendar date of the end time, in the timestamp's own offset.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_time.map(|t| t.date_naive())
    }

    /// Length of the session when both ends are known.
    pub fn duration(&self) -> Option<Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Check that the session does not end before it starts.
    pub fn validate(&self) -> Result<(), DomainError> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if start > end => Err(DomainError::InvalidTimeRange {
                session_id: self.id,
            }),
            _ => Ok(()),
        }
    }
}

/// A registered conference attendee (Entity)
///
/// `name` is the unique lookup key used by the attendee endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
}

impl Attendee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first_name: None,
            last_name: None,
            email_address: None,
        }
    }

    /// "First Last" when both parts are known, otherwise the lookup name.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => self.name.clone(),
        }
    }
}
