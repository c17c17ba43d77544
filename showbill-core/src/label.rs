//! Date label formatting for group headers.

use std::fmt;

use serde::Deserialize;

use crate::event::EventDate;

/// How group headers render a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateLabelFormat {
    /// "JUNE 1, 2024"
    #[default]
    LongUpper,
    /// "6/1/2024"
    Short,
}

impl DateLabelFormat {
    /// Render the group header for an event's date. Invalid dates keep
    /// their source text so the record still lists under something.
    pub fn label(&self, date: &EventDate) -> String {
        match date.day() {
            Some(d) => match self {
                DateLabelFormat::LongUpper => {
                    d.format("%B %-d, %Y").to_string().to_uppercase()
                }
                DateLabelFormat::Short => d.format("%-m/%-d/%Y").to_string(),
            },
            None => date.to_string(),
        }
    }
}

impl fmt::Display for DateLabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DateLabelFormat::LongUpper => write!(f, "long-upper"),
            DateLabelFormat::Short => write!(f, "short"),
        }
    }
}
