//! JSON body encoding and decoding.

use agenda_application::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Content type sent with every request body
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Errors from encoding or decoding JSON bodies
#[derive(Error, Debug)]
pub enum JsonCodecError {
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Response body is empty")]
    Empty,

    #[error("Malformed response body: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl From<JsonCodecError> for ApiError {
    fn from(err: JsonCodecError) -> Self {
        match err {
            JsonCodecError::Encode(_) => ApiError::Transport(err.to_string()),
            JsonCodecError::Empty | JsonCodecError::Malformed(_) => {
                ApiError::Decode(err.to_string())
            }
        }
    }
}

/// Converts typed values to and from UTF-8 JSON bytes
pub struct JsonCodec;

impl JsonCodec {
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, JsonCodecError> {
        serde_json::to_vec(value).map_err(JsonCodecError::Encode)
    }

    pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, JsonCodecError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(JsonCodecError::Empty);
        }
        serde_json::from_slice(bytes).map_err(JsonCodecError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_domain::{SearchTerm, Session};

    #[test]
    fn test_encode_search_term() {
        let bytes = JsonCodec::encode(&SearchTerm::new("async")).unwrap();
        assert_eq!(bytes, br#"{"query":"async"}"#);
    }

    #[test]
    fn test_decode_sessions() {
        let sessions: Vec<Session> =
            JsonCodec::decode(br#"[{"id": 1, "title": "Opening"}]"#).unwrap();
        assert_eq!(sessions, vec![Session::new(1, "Opening")]);
    }

    #[test]
    fn test_decode_empty_body() {
        let err = JsonCodec::decode::<Vec<Session>>(b"").unwrap_err();
        assert!(matches!(err, JsonCodecError::Empty));

        let err = JsonCodec::decode::<Vec<Session>>(b"  \n").unwrap_err();
        assert!(matches!(err, JsonCodecError::Empty));
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = JsonCodec::decode::<Session>(b"{\"id\": ").unwrap_err();
        assert!(matches!(err, JsonCodecError::Malformed(_)));
    }

    #[test]
    fn test_decode_error_is_transport_class() {
        let api_err: ApiError = JsonCodecError::Empty.into();
        assert!(matches!(api_err, ApiError::Decode(_)));
        assert!(api_err.is_transport());
    }
}
