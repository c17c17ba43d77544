use std::io::IsTerminal;

use anyhow::{Context, Result};
use chrono::Local;
use owo_colors::OwoColorize;
use showbill_core::{
    DateBounds, GlobalConfig, Selection, ThemeChoice, filter_events, group_by_date,
    upcoming_events,
};
use url::Url;

use super::{ALL_VENUES, create_spinner};
use crate::ShowsArgs;
use crate::feed::fetch_events;
use crate::render::render_groups;
use crate::theme::Theme;

pub async fn run(config: &GlobalConfig, args: ShowsArgs) -> Result<()> {
    let bounds = DateBounds::from_args(args.from.as_deref(), args.to.as_deref())?;
    let url = resolve_url(config, args.url.as_deref())?;

    // Single-select UIs send the sentinel to mean "no restriction".
    let selection = Selection {
        venues: args
            .venue
            .iter()
            .filter(|v| v.as_str() != ALL_VENUES)
            .cloned()
            .collect(),
        bounds,
    };

    let spinner = create_spinner("Fetching shows...");
    let events = fetch_events(&url).await;
    spinner.finish_and_clear();

    let events = if args.past || config.show_past {
        events
    } else {
        upcoming_events(&events, Local::now().date_naive())
    };

    let filtered = filter_events(&events, &selection);
    let groups = group_by_date(&filtered, config.date_label);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    let theme = resolve_theme(config, &args);

    if groups.is_empty() {
        println!("{}", "No shows found".style(theme.empty));
        return Ok(());
    }

    println!("{}", render_groups(&groups, &theme));
    Ok(())
}

pub(crate) fn resolve_url(config: &GlobalConfig, flag: Option<&str>) -> Result<Url> {
    let raw = flag.unwrap_or(&config.feed_url);
    Url::parse(raw).with_context(|| format!("Invalid feed URL '{raw}'"))
}

fn resolve_theme(config: &GlobalConfig, args: &ShowsArgs) -> Theme {
    if !std::io::stdout().is_terminal() {
        return Theme::plain();
    }

    let choice = if args.light {
        ThemeChoice::Light
    } else if args.dark {
        ThemeChoice::Dark
    } else {
        config.theme
    };

    Theme::from_choice(choice)
}
