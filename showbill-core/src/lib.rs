//! Core types for showbill.
//!
//! This crate provides everything the showbill CLI needs short of I/O:
//! - `Event` and `EventDate` for feed records
//! - `feed` for parsing the JSON feed payload
//! - `Selection` and `DateBounds` for filter state
//! - `pipeline` for filtering, grouping, and venue options

pub mod app_config;
pub mod error;
pub mod event;
pub mod feed;
pub mod label;
pub mod pipeline;
pub mod selection;

pub use app_config::{GlobalConfig, ThemeChoice};
pub use error::{ShowbillError, ShowbillResult};
pub use event::{Event, EventDate};
pub use feed::parse_feed;
pub use label::DateLabelFormat;
pub use pipeline::{DayGroup, filter_events, group_by_date, upcoming_events, venue_options};
pub use selection::{DateBounds, Selection};
