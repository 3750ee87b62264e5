//! Conference data model.
//!
//! - [`entities::Session`]: a scheduled talk with optional times, track and speakers
//! - [`entities::Speaker`], [`entities::Track`], [`entities::Attendee`]
//! - [`search::SearchResult`]: a search hit referencing a session or a speaker

pub mod entities;
pub mod search;
