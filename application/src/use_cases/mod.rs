//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod search;
pub mod show_agenda;
pub mod show_session;

#[cfg(test)]
pub(crate) mod test_support;
