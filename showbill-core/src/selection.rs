//! Filter selection for a single listing invocation.
//!
//! The presentation layer owns this state and passes it into the
//! pipeline as plain arguments; nothing here is persisted.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{ShowbillError, ShowbillResult};
use crate::event::{Event, EventDate};

/// The active filters for one listing render.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Venues to keep. Empty means no venue restriction.
    pub venues: HashSet<String>,
    pub bounds: DateBounds,
}

impl Selection {
    pub fn matches(&self, event: &Event) -> bool {
        let venue_ok = self.venues.is_empty() || self.venues.contains(&event.venue);
        venue_ok && self.bounds.contains(&event.date)
    }
}

/// Date restriction for the listing.
///
/// The bound shape is a declared variant: a single on-or-after jump or
/// a two-ended inclusive range, never inferred from which fields happen
/// to be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateBounds {
    #[default]
    Unbounded,
    OnOrAfter(NaiveDate),
    Between(NaiveDate, NaiveDate),
}

impl DateBounds {
    /// Build bounds from optional CLI-style date strings (YYYY-MM-DD).
    /// An end date without a start date is rejected rather than guessed at.
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> ShowbillResult<Self> {
        match (from, to) {
            (None, None) => Ok(DateBounds::Unbounded),
            (Some(f), None) => Ok(DateBounds::OnOrAfter(parse_date(f)?)),
            (Some(f), Some(t)) => {
                let from = parse_date(f)?;
                let to = parse_date(t)?;
                if from > to {
                    return Err(ShowbillError::InvalidRange(format!(
                        "start date {} is after end date {}",
                        from, to
                    )));
                }
                Ok(DateBounds::Between(from, to))
            }
            (None, Some(_)) => Err(ShowbillError::InvalidRange(
                "an end date requires a start date".to_string(),
            )),
        }
    }

    /// Whether an event date satisfies the bounds, inclusive on both
    /// ends. Invalid dates fail every comparison, so they only pass
    /// `Unbounded`.
    pub fn contains(&self, date: &EventDate) -> bool {
        match self {
            DateBounds::Unbounded => true,
            DateBounds::OnOrAfter(lo) => date.day().is_some_and(|d| d >= *lo),
            DateBounds::Between(lo, hi) => date.day().is_some_and(|d| d >= *lo && d <= *hi),
        }
    }
}

fn parse_date(s: &str) -> ShowbillResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ShowbillError::InvalidDate(s.to_string()))
}
