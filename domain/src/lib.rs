//! Domain layer for conference-agenda
//!
//! This crate contains the conference entities, the agenda grouping
//! algorithm and abstract formatting. It has no dependencies on
//! infrastructure or presentation concerns, performs no I/O and does not log.
//!
//! # Core Concepts
//!
//! ## Agenda
//!
//! Sessions are bucketed into conference days (offsets from the first day)
//! and, within the selected day, into time slots sharing a start time.
//!
//! ## Abstracts
//!
//! Abstracts are plain text with CR/LF paragraph breaks. They are escaped
//! with an injected [`TextEscaper`] before being wrapped in paragraphs.

pub mod agenda;
pub mod conference;
pub mod config;
pub mod core;
pub mod markup;

// Re-export commonly used types
pub use agenda::grouping::{Agenda, DayOffset, TimeSlot, day_offset_of, number_of_days};
pub use conference::{
    entities::{Attendee, Session, SessionSummary, Speaker, Track},
    search::{SearchResult, SearchResultKind, SearchResultRecord, SearchTerm},
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use markup::{
    abstract_text::{PARAGRAPH_DELIMITER, format_abstract},
    escape::{HtmlEscaper, TextEscaper},
};
