//! Day and time-slot bucketing for the agenda view.
//!
//! The conference runs from the earliest session start date to the latest
//! session end date. Each day in that span gets an offset (0 = first day).
//! For a selected offset, the sessions starting that day are grouped by exact
//! start time, and each group is ordered by track.

use crate::conference::entities::Session;
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the day navigation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOffset {
    pub offset: i64,
    pub weekday: Weekday,
}

/// Sessions sharing one exact start timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub starts_at: DateTime<FixedOffset>,
    pub sessions: Vec<Session>,
}

/// Computed view data for one agenda day (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agenda {
    /// Every conference day, independent of the selected one
    pub day_offsets: Vec<DayOffset>,
    /// Time slots of the selected day, ascending by start time
    pub time_slots: Vec<TimeSlot>,
}

impl Agenda {
    /// Bucket `sessions` and select the day at `day` offsets from the first day.
    ///
    /// An offset outside the conference span (including negative offsets)
    /// yields no time slots; the day list is still complete.
    pub fn build(sessions: &[Session], day: i64) -> Self {
        let Some(start_date) = first_date(sessions) else {
            return Self::default();
        };

        let day_offsets = (0..number_of_days(sessions))
            .filter_map(|offset| {
                add_days(start_date, offset).map(|date| DayOffset {
                    offset,
                    weekday: date.weekday(),
                })
            })
            .collect();

        let time_slots = match add_days(start_date, day) {
            Some(filter_date) => slots_for_date(sessions, filter_date),
            None => Vec::new(),
        };

        Self {
            day_offsets,
            time_slots,
        }
    }

    pub fn number_of_days(&self) -> usize {
        self.day_offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_slots.is_empty()
    }
}

/// Inclusive day span from the earliest start date to the latest end date.
///
/// Zero when no session has a start time or none has an end time. A span
/// that would be negative (every end before the first start) is also zero.
pub fn number_of_days(sessions: &[Session]) -> i64 {
    match (first_date(sessions), last_date(sessions)) {
        (Some(start), Some(end)) => ((end - start).num_days() + 1).max(0),
        _ => 0,
    }
}

/// Day offset of `session` relative to the first day of `sessions`.
pub fn day_offset_of(sessions: &[Session], session: &Session) -> Option<i64> {
    let start = first_date(sessions)?;
    let date = session.start_date()?;
    Some((date - start).num_days())
}

fn first_date(sessions: &[Session]) -> Option<NaiveDate> {
    sessions.iter().filter_map(Session::start_date).min()
}

fn last_date(sessions: &[Session]) -> Option<NaiveDate> {
    sessions.iter().filter_map(Session::end_date).max()
}

fn add_days(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

fn slots_for_date(sessions: &[Session], date: NaiveDate) -> Vec<TimeSlot> {
    let mut selected: Vec<&Session> = sessions
        .iter()
        .filter(|s| s.start_date() == Some(date))
        .collect();
    // Stable sort: equal track ids keep their input order. `None` sorts first.
    selected.sort_by_key(|s| s.track_id);

    let mut slots: BTreeMap<DateTime<FixedOffset>, Vec<Session>> = BTreeMap::new();
    for session in selected {
        if let Some(starts_at) = session.start_time {
            slots.entry(starts_at).or_default().push(session.clone());
        }
    }

    slots
        .into_iter()
        .map(|(starts_at, sessions)| TimeSlot {
            starts_at,
            sessions,
        })
        .collect()
}
