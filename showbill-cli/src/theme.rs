//! Light/dark palettes for the listing.
//!
//! Theming is a display-style lookup keyed by the theme choice; the
//! filtering pipeline never sees it.

use owo_colors::Style;
use showbill_core::ThemeChoice;

/// Display styles for one listing render.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Style,
    pub title: Style,
    pub venue: Style,
    pub empty: Style,
}

impl Theme {
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Theme {
                header: Style::new().bright_white().bold(),
                title: Style::new().white(),
                venue: Style::new().dimmed(),
                empty: Style::new().dimmed(),
            },
            ThemeChoice::Light => Theme {
                header: Style::new().black().bold(),
                title: Style::new().black(),
                venue: Style::new().bright_black(),
                empty: Style::new().bright_black(),
            },
        }
    }

    /// No styling at all, for pipes and tests.
    pub fn plain() -> Self {
        Theme {
            header: Style::new(),
            title: Style::new(),
            venue: Style::new(),
            empty: Style::new(),
        }
    }
}
