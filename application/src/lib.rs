//! Application layer for conference-agenda
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::conference_api::{ApiError, ApiResult, ConferenceApi};
pub use use_cases::search::{SearchOutcome, SearchUseCase};
pub use use_cases::show_agenda::{ShowAgendaInput, ShowAgendaUseCase};
pub use use_cases::show_session::{SessionDetail, ShowSessionUseCase};
