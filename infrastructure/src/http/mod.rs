//! HTTP adapter for the conference API.
//!
//! - [`codec::JsonCodec`]: JSON request/response bodies
//! - [`client::HttpConferenceApi`]: [`ConferenceApi`](agenda_application::ConferenceApi)
//!   over `reqwest`

pub mod client;
pub mod codec;

pub use client::HttpConferenceApi;
pub use codec::{JSON_CONTENT_TYPE, JsonCodec, JsonCodecError};
