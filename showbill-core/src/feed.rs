//! Feed payload parsing.
//!
//! The feed is a JSON array of records with `date`, `title`, `venue`.
//! A malformed payload is one failure; a malformed `date` inside an
//! otherwise valid payload becomes `EventDate::Invalid` instead.

use crate::error::{ShowbillError, ShowbillResult};
use crate::event::Event;

/// Parse the raw feed body into events, feed order preserved.
pub fn parse_feed(body: &str) -> ShowbillResult<Vec<Event>> {
    serde_json::from_str(body).map_err(|e| ShowbillError::Feed(e.to_string()))
}
