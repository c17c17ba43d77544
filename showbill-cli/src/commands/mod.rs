pub mod config;
pub mod shows;
pub mod venues;

use std::time::Duration;

use indicatif::ProgressBar;

/// The single-select "no restriction" option: shown at the top of the
/// venues list, and accepted (and ignored) as a --venue value.
pub const ALL_VENUES: &str = "All Venues";

/// Spinner shown while the feed request is in flight.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
