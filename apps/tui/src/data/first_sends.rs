//! Extraction of first sends: the earliest clean lead ascent of each route.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::data::models::{Tick, TickDataset};

/// Lead-style values that do not count as a send.
const NON_SENDS: [&str; 2] = ["fell/hung", ""];

/// Return the first send of every route in the dataset, sorted ascending by
/// date.
///
/// A tick qualifies when its style is "lead" and its lead style is neither
/// "fell/hung" nor empty. Per route only the earliest qualifying tick is
/// kept; on a date tie the one encountered first in dataset order wins.
/// With `route_type_filter` set, only routes whose type contains the filter
/// as a case-insensitive substring are returned. The input is not mutated.
pub fn first_sends(dataset: &TickDataset, route_type_filter: Option<&str>) -> Vec<Tick> {
    let mut earliest: HashMap<&str, &Tick> = HashMap::new();
    let mut route_order: Vec<&str> = Vec::new();

    for tick in &dataset.ticks {
        if tick.style != "lead" || NON_SENDS.contains(&tick.lead_style.as_str()) {
            continue;
        }
        match earliest.entry(tick.route.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(tick);
                route_order.push(tick.route.as_str());
            }
            Entry::Occupied(mut slot) => {
                // Strictly earlier only, so the first-encountered tick wins
                // a date tie.
                if tick.date < slot.get().date {
                    slot.insert(tick);
                }
            }
        }
    }

    let mut sends: Vec<Tick> = route_order
        .iter()
        .filter_map(|route| earliest.get(route))
        .map(|tick| (*tick).clone())
        .collect();

    // Stable, so equal dates keep their first-seen route order.
    sends.sort_by_key(|tick| tick.date);

    if let Some(filter) = route_type_filter {
        let needle = filter.to_lowercase();
        sends.retain(|tick| tick.route_type.to_lowercase().contains(&needle));
    }

    sends
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tick(date: &str, route: &str, style: &str, lead_style: &str, route_type: &str) -> Tick {
        Tick {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            route: route.to_string(),
            style: style.to_string(),
            lead_style: lead_style.to_string(),
            route_type: route_type.to_string(),
            grade: 10,
            subgrade: None,
        }
    }

    fn dataset(ticks: Vec<Tick>) -> TickDataset {
        TickDataset { ticks }
    }

    #[test]
    fn keeps_the_earliest_send_per_route() {
        // The later row carries the earlier date; it must win regardless of
        // row order.
        let data = dataset(vec![
            tick("2023-06-02", "Moonshine", "lead", "redpoint", "sport"),
            tick("2023-05-14", "Moonshine", "lead", "onsight", "sport"),
        ]);

        let sends = first_sends(&data, None);
        assert_eq!(sends.len(), 1);
        assert_eq!(sends[0].date, NaiveDate::from_ymd_opt(2023, 5, 14).unwrap());
        assert_eq!(sends[0].lead_style, "onsight");
    }

    #[test]
    fn date_tie_keeps_the_first_encountered_tick() {
        let data = dataset(vec![
            tick("2023-05-14", "Moonshine", "lead", "onsight", "sport"),
            tick("2023-05-14", "Moonshine", "lead", "redpoint", "sport"),
        ]);

        let sends = first_sends(&data, None);
        assert_eq!(sends.len(), 1);
        assert_eq!(sends[0].lead_style, "onsight");
    }

    #[test]
    fn excludes_falls_hangs_and_non_leads() {
        let data = dataset(vec![
            tick("2023-05-14", "Moonshine", "lead", "fell/hung", "sport"),
            tick("2023-05-15", "Moonshine", "lead", "", "sport"),
            tick("2023-05-16", "Moonshine", "tr", "onsight", "sport"),
            tick("2023-05-17", "Moonshine", "lead", "redpoint", "sport"),
        ]);

        let sends = first_sends(&data, None);
        assert_eq!(sends.len(), 1);
        assert_eq!(sends[0].date, NaiveDate::from_ymd_opt(2023, 5, 17).unwrap());
    }

    #[test]
    fn result_is_sorted_by_date() {
        let data = dataset(vec![
            tick("2023-08-01", "Late Route", "lead", "onsight", "sport"),
            tick("2023-02-01", "Early Route", "lead", "flash", "trad"),
            tick("2023-05-01", "Middle Route", "lead", "redpoint", "sport"),
        ]);

        let routes: Vec<String> = first_sends(&data, None)
            .into_iter()
            .map(|send| send.route)
            .collect();
        assert_eq!(routes, ["Early Route", "Middle Route", "Late Route"]);
    }

    #[test]
    fn route_type_filter_is_a_case_insensitive_substring() {
        let data = dataset(vec![
            tick("2023-02-01", "Crack Line", "lead", "onsight", "trad"),
            tick("2023-03-01", "Bolted Face", "lead", "onsight", "sport"),
            tick("2023-04-01", "Mixed Line", "lead", "onsight", "sport, trad"),
        ]);

        let routes: Vec<String> = first_sends(&data, Some("Trad"))
            .into_iter()
            .map(|send| send.route)
            .collect();
        assert_eq!(routes, ["Crack Line", "Mixed Line"]);
    }

    #[test]
    fn input_dataset_is_untouched() {
        let data = dataset(vec![
            tick("2023-06-02", "Moonshine", "lead", "redpoint", "sport"),
            tick("2023-05-14", "Moonshine", "lead", "onsight", "sport"),
        ]);
        let before = data.clone();

        let _ = first_sends(&data, Some("sport"));
        assert_eq!(data, before);
    }
}
