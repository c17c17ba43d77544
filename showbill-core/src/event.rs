//! Feed-neutral show types.
//!
//! The feed serializes dates as strings. Values that don't parse are
//! kept as `EventDate::Invalid` so the record can still be listed; they
//! fail every date comparison instead of aborting the pipeline.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single show record from the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub date: EventDate,
    pub title: String,
    pub venue: String,
}

/// The `date` field of a feed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventDate {
    /// A plain calendar date ("2024-06-01")
    Day(NaiveDate),
    /// A date with a clock time ("2024-06-01T20:00:00")
    DateTime(NaiveDateTime),
    /// Unparseable input, source text preserved for display
    Invalid(String),
}

impl EventDate {
    /// Parse an ISO-ish date string the way the feed writes them.
    /// Timestamps keep the calendar date as written (offsets are not
    /// re-applied), so a record groups under the day its feed row shows.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();

        if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return EventDate::Day(d);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return EventDate::DateTime(dt.naive_local());
        }

        for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return EventDate::DateTime(dt);
            }
        }

        EventDate::Invalid(s.to_string())
    }

    /// The calendar day, if the date parsed.
    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            EventDate::Day(d) => Some(*d),
            EventDate::DateTime(dt) => Some(dt.date()),
            EventDate::Invalid(_) => None,
        }
    }

    /// The clock time, for records that carry one.
    pub fn time(&self) -> Option<chrono::NaiveTime> {
        match self {
            EventDate::DateTime(dt) => Some(dt.time()),
            _ => None,
        }
    }
}

impl From<String> for EventDate {
    fn from(s: String) -> Self {
        EventDate::parse(&s)
    }
}

impl From<EventDate> for String {
    fn from(date: EventDate) -> Self {
        match date {
            EventDate::Day(d) => d.format("%Y-%m-%d").to_string(),
            EventDate::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            EventDate::Invalid(s) => s,
        }
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventDate::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventDate::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
            EventDate::Invalid(s) => write!(f, "{}", s),
        }
    }
}
