use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use showbill_core::{GlobalConfig, upcoming_events, venue_options};

use super::shows::resolve_url;
use super::{ALL_VENUES, create_spinner};
use crate::feed::fetch_events;

pub async fn run(config: &GlobalConfig, url: Option<&str>, past: bool) -> Result<()> {
    let url = resolve_url(config, url)?;

    let spinner = create_spinner("Fetching shows...");
    let events = fetch_events(&url).await;
    spinner.finish_and_clear();

    // Past-only venues drop out of the selector unless asked for.
    let events = if past || config.show_past {
        events
    } else {
        upcoming_events(&events, Local::now().date_naive())
    };

    println!("{}", ALL_VENUES.dimmed());
    for venue in venue_options(&events) {
        println!("{venue}");
    }

    Ok(())
}
