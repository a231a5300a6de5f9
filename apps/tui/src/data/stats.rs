//! Pure chart/summary helpers over a set of first sends, shared by the
//! chart widgets and the headless stats output so both can be tested
//! without a terminal.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::data::models::Tick;

/// Send counts per grade, zero-filled across the min..=max grade range so
/// histogram bars line up on a contiguous axis.
pub fn grade_histogram(sends: &[Tick]) -> Vec<(u8, u64)> {
    let Some(min) = sends.iter().map(|send| send.grade).min() else {
        return Vec::new();
    };
    let max = sends.iter().map(|send| send.grade).max().unwrap_or(min);

    let mut counts: BTreeMap<u8, u64> = (min..=max).map(|grade| (grade, 0)).collect();
    for send in sends {
        *counts.entry(send.grade).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Send counts per calendar year, ascending.
pub fn sends_by_year(sends: &[Tick]) -> Vec<(i32, u64)> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for send in sends {
        *counts.entry(send.date.year()).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Send counts per (year, grade) cell, ascending by year then grade. This
/// is the flattened form of the year-by-grade surface.
pub fn year_grade_counts(sends: &[Tick]) -> Vec<(i32, u8, u64)> {
    let mut counts: BTreeMap<(i32, u8), u64> = BTreeMap::new();
    for send in sends {
        *counts.entry((send.date.year(), send.grade)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((year, grade), count)| (year, grade, count))
        .collect()
}

/// Occurrence counts per route type, most frequent first.
pub fn route_type_counts(ticks: &[Tick]) -> Vec<(String, u64)> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for tick in ticks {
        *counts.entry(tick.route_type.as_str()).or_insert(0) += 1;
    }
    let mut sorted: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(route_type, count)| (route_type.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn send(date: &str, route: &str, route_type: &str, grade: u8) -> Tick {
        Tick {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            route: route.to_string(),
            style: "lead".to_string(),
            lead_style: "redpoint".to_string(),
            route_type: route_type.to_string(),
            grade,
            subgrade: None,
        }
    }

    #[test]
    fn histogram_is_zero_filled_between_min_and_max() {
        let sends = vec![
            send("2022-03-01", "A", "sport", 9),
            send("2022-04-01", "B", "sport", 11),
            send("2022-05-01", "C", "sport", 11),
        ];

        assert_eq!(grade_histogram(&sends), vec![(9, 1), (10, 0), (11, 2)]);
    }

    #[test]
    fn histogram_of_no_sends_is_empty() {
        assert!(grade_histogram(&[]).is_empty());
    }

    #[test]
    fn sends_are_counted_per_year_in_ascending_order() {
        let sends = vec![
            send("2023-03-01", "A", "sport", 10),
            send("2021-04-01", "B", "sport", 10),
            send("2023-05-01", "C", "sport", 10),
        ];

        assert_eq!(sends_by_year(&sends), vec![(2021, 1), (2023, 2)]);
    }

    #[test]
    fn year_grade_cells_are_counted() {
        let sends = vec![
            send("2022-03-01", "A", "sport", 10),
            send("2022-04-01", "B", "sport", 10),
            send("2023-05-01", "C", "sport", 12),
        ];

        assert_eq!(
            year_grade_counts(&sends),
            vec![(2022, 10, 2), (2023, 12, 1)]
        );
    }

    #[test]
    fn route_types_are_ranked_by_count() {
        let ticks = vec![
            send("2022-03-01", "A", "sport", 10),
            send("2022-04-01", "B", "trad", 10),
            send("2022-05-01", "C", "sport", 10),
        ];

        assert_eq!(
            route_type_counts(&ticks),
            vec![("sport".to_string(), 2), ("trad".to_string(), 1)]
        );
    }
}
