//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Session {session_id} ends before it starts")]
    InvalidTimeRange { session_id: i64 },

    #[error("Search result of type {kind} carries no {kind} payload")]
    MissingSearchPayload { kind: String },
}

impl DomainError {
    /// Check if this error comes from a malformed wire payload
    pub fn is_payload_error(&self) -> bool {
        matches!(self, DomainError::MissingSearchPayload { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_range_display() {
        let error = DomainError::InvalidTimeRange { session_id: 7 };
        assert_eq!(error.to_string(), "Session 7 ends before it starts");
    }

    #[test]
    fn test_is_payload_error_check() {
        assert!(
            DomainError::MissingSearchPayload {
                kind: "Session".to_string()
            }
            .is_payload_error()
        );
        assert!(!DomainError::InvalidTimeRange { session_id: 1 }.is_payload_error());
    }
}
