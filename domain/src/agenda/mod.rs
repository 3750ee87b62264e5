//! Agenda view computation.
//!
//! - [`grouping::Agenda`]: day navigation plus the selected day's time slots

pub mod grouping;
