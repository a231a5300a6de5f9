use chrono::NaiveDate;
use serde::Serialize;

/// Canonical column set of the dataset, in display order.
pub const COLUMNS: [&str; 7] = [
    "Date",
    "Route",
    "Style",
    "Lead Style",
    "Route Type",
    "Grade",
    "Subgrade",
];

/// One logged ascent, projected down from the raw export row.
///
/// `style`, `lead_style` and `route_type` are lowercased during the build.
/// `grade` is the roped decimal number or the V-scale number depending on
/// `route_type`; `subgrade` is the a/b/c/d letter of a roped grade when the
/// rating carried one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tick {
    pub date: NaiveDate,
    pub route: String,
    pub style: String,
    pub lead_style: String,
    pub route_type: String,
    pub grade: u8,
    pub subgrade: Option<char>,
}

impl Tick {
    /// Display form of the grade, e.g. "5.11a" or "V3".
    pub fn grade_label(&self) -> String {
        if self.route_type.contains("boulder") {
            format!("V{}", self.grade)
        } else {
            match self.subgrade {
                Some(letter) => format!("5.{}{letter}", self.grade),
                None => format!("5.{}", self.grade),
            }
        }
    }
}

/// Ordered collection of ticks, in source export row order.
///
/// Rebuilt from scratch on every refresh and never mutated in place; an
/// empty dataset (no profile loaded) still carries the canonical columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickDataset {
    pub ticks: Vec<Tick>,
}

impl TickDataset {
    pub const fn columns() -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(route_type: &str, grade: u8, subgrade: Option<char>) -> Tick {
        Tick {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            route: "Some Route".to_string(),
            style: "lead".to_string(),
            lead_style: "onsight".to_string(),
            route_type: route_type.to_string(),
            grade,
            subgrade,
        }
    }

    #[test]
    fn grade_label_for_roped_routes() {
        assert_eq!(tick("sport", 11, Some('a')).grade_label(), "5.11a");
        assert_eq!(tick("trad", 9, None).grade_label(), "5.9");
    }

    #[test]
    fn grade_label_for_boulders() {
        assert_eq!(tick("boulder", 4, None).grade_label(), "V4");
    }

    #[test]
    fn empty_dataset_keeps_the_canonical_columns() {
        let dataset = TickDataset::default();
        assert!(dataset.is_empty());
        assert_eq!(TickDataset::columns().len(), 7);
        assert_eq!(TickDataset::columns()[0], "Date");
    }
}
