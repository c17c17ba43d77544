//! The filter-and-group pipeline behind every listing render.
//!
//! Pure functions over the fetched collection: the CLI recomputes all
//! of these from scratch whenever the inputs change. Feed order is
//! never re-sorted, so groups come out in first-occurrence order.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::Event;
use crate::label::DateLabelFormat;
use crate::selection::Selection;

/// One date's worth of shows, under its display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub label: String,
    pub events: Vec<Event>,
}

/// Distinct venue names, lexicographically sorted. The CLI prepends
/// its "All Venues" sentinel at the presentation edge, not here.
pub fn venue_options(events: &[Event]) -> Vec<String> {
    let set: HashSet<String> = events.iter().map(|e| e.venue.clone()).collect();
    let mut venues: Vec<String> = set.into_iter().collect();
    venues.sort();
    venues
}

/// Events matching the selection, feed order preserved.
pub fn filter_events(events: &[Event], selection: &Selection) -> Vec<Event> {
    events.iter().filter(|e| selection.matches(e)).cloned().collect()
}

/// Events on or after `today`. Invalid dates fail the comparison and
/// drop out. The caller supplies `today`; the CLI passes the current
/// local date, which makes the cutoff midnight local time.
pub fn upcoming_events(events: &[Event], today: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.date.day().is_some_and(|d| d >= today))
        .cloned()
        .collect()
}

/// Partition events by date label, keys in first-seen order, events in
/// feed order within each group. No cross-day sorting happens here; if
/// the feed isn't chronological, neither are the groups.
pub fn group_by_date(events: &[Event], format: DateLabelFormat) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for event in events {
        let label = format.label(&event.date);
        match index.get(&label) {
            Some(&i) => groups[i].events.push(event.clone()),
            None => {
                index.insert(label.clone(), groups.len());
                groups.push(DayGroup {
                    label,
                    events: vec![event.clone()],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDate;
    use crate::selection::DateBounds;

    fn event(date: &str, title: &str, venue: &str) -> Event {
        Event {
            date: EventDate::parse(date),
            title: title.to_string(),
            venue: venue.to_string(),
        }
    }

    fn titles(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    fn sample() -> Vec<Event> {
        vec![
            event("2024-06-01", "A", "X"),
            event("2024-06-01", "B", "Y"),
            event("2024-06-02", "C", "X"),
        ]
    }

    fn venue_selection(venues: &[&str]) -> Selection {
        Selection {
            venues: venues.iter().map(|v| v.to_string()).collect(),
            bounds: DateBounds::Unbounded,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_venue_options_sorted_and_distinct() {
        let events = vec![
            event("2024-06-01", "A", "Roseland"),
            event("2024-06-02", "B", "Aladdin"),
            event("2024-06-03", "C", "Roseland"),
        ];
        assert_eq!(venue_options(&events), vec!["Aladdin", "Roseland"]);
        assert_eq!(venue_options(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_filter_by_venue_preserves_order() {
        let filtered = filter_events(&sample(), &venue_selection(&["X"]));
        assert_eq!(titles(&filtered), vec!["A", "C"]);
    }

    #[test]
    fn test_empty_venue_set_matches_all() {
        let filtered = filter_events(&sample(), &venue_selection(&[]));
        assert_eq!(titles(&filtered), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_lower_bound_only() {
        let selection = Selection {
            venues: HashSet::new(),
            bounds: DateBounds::OnOrAfter(day(2024, 6, 2)),
        };
        let filtered = filter_events(&sample(), &selection);
        assert_eq!(titles(&filtered), vec!["C"]);
    }

    #[test]
    fn test_widening_bounds_never_drops_a_match() {
        let narrow = Selection {
            venues: HashSet::new(),
            bounds: DateBounds::Between(day(2024, 6, 1), day(2024, 6, 1)),
        };
        let wide = Selection {
            venues: HashSet::new(),
            bounds: DateBounds::Between(day(2024, 5, 1), day(2024, 7, 1)),
        };
        let narrow_matches = filter_events(&sample(), &narrow);
        let wide_matches = filter_events(&sample(), &wide);
        for title in titles(&narrow_matches) {
            assert!(titles(&wide_matches).contains(&title));
        }
    }

    #[test]
    fn test_invalid_dates_excluded_from_bounded_filters() {
        let mut events = sample();
        events.push(event("TBA", "D", "X"));

        let bounded = Selection {
            venues: HashSet::new(),
            bounds: DateBounds::Between(day(2024, 1, 1), day(2024, 12, 31)),
        };
        assert_eq!(titles(&filter_events(&events, &bounded)), vec!["A", "B", "C"]);

        // Unbounded listings still include the record.
        let unbounded = venue_selection(&[]);
        assert_eq!(titles(&filter_events(&events, &unbounded)), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_group_by_date_venue_filtered() {
        let filtered = filter_events(&sample(), &venue_selection(&["X"]));
        let groups = group_by_date(&filtered, DateLabelFormat::LongUpper);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "JUNE 1, 2024");
        assert_eq!(titles(&groups[0].events), vec!["A"]);
        assert_eq!(groups[1].label, "JUNE 2, 2024");
        assert_eq!(titles(&groups[1].events), vec!["C"]);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let events = vec![
            event("2024-06-02", "C", "X"),
            event("2024-06-01", "A", "X"),
            event("2024-06-02", "D", "Y"),
            event("2024-06-01", "B", "Y"),
        ];
        let groups = group_by_date(&events, DateLabelFormat::Short);

        // Keys in first-seen order, not chronological.
        assert_eq!(groups[0].label, "6/2/2024");
        assert_eq!(groups[1].label, "6/1/2024");

        // Concatenating the groups reproduces the input, per-group
        // order preserved.
        let concatenated: Vec<Event> =
            groups.into_iter().flat_map(|g| g.events).collect();
        assert_eq!(titles(&concatenated), vec!["C", "D", "A", "B"]);
    }

    #[test]
    fn test_upcoming_is_midnight_inclusive() {
        let today = day(2024, 6, 1);
        let events = vec![
            event("2024-05-31", "Past", "X"),
            event("2024-06-01", "Today", "X"),
            event("2024-06-02", "Soon", "Y"),
            event("TBA", "Unknown", "Z"),
        ];
        let upcoming = upcoming_events(&events, today);
        assert_eq!(titles(&upcoming), vec!["Today", "Soon"]);

        // Past-only venues disappear from the selector when the
        // horizon is applied first.
        assert_eq!(venue_options(&upcoming), vec!["X", "Y"]);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let events = sample();
        let selection = Selection {
            venues: ["X".to_string()].into_iter().collect(),
            bounds: DateBounds::OnOrAfter(day(2024, 6, 1)),
        };

        let first = group_by_date(&filter_events(&events, &selection), DateLabelFormat::LongUpper);
        let second = group_by_date(&filter_events(&events, &selection), DateLabelFormat::LongUpper);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_collection_yields_empty_everything() {
        let selection = venue_selection(&["X"]);
        assert!(venue_options(&[]).is_empty());
        assert!(filter_events(&[], &selection).is_empty());
        assert!(group_by_date(&[], DateLabelFormat::LongUpper).is_empty());
        assert!(upcoming_events(&[], day(2024, 6, 1)).is_empty());
    }
}
