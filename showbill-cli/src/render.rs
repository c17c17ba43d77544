//! Terminal rendering for the grouped listing.

use owo_colors::OwoColorize;
use showbill_core::DayGroup;

use crate::theme::Theme;

/// Render groups as date-headed blocks with a blank line between days,
/// in group order.
pub fn render_groups(groups: &[DayGroup], theme: &Theme) -> String {
    let mut lines = Vec::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(group.label.style(theme.header).to_string());

        for event in &group.events {
            let venue_tag = format!("[{}]", event.venue);
            lines.push(format!(
                "  {} {}",
                event.title.style(theme.title),
                venue_tag.style(theme.venue)
            ));
        }
    }

    lines.join("\n")
}
