//! Rebuilds the canonical tick dataset from the raw CSV export.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::data::models::{Tick, TickDataset};
use crate::error::DataError;
use crate::grades::parse_grade;

/// Raw export column names, as emitted by the site. Every other column in
/// the export is ignored.
const COL_DATE: &str = "Date";
const COL_ROUTE: &str = "Route";
const COL_RATING: &str = "Rating";
const COL_STYLE: &str = "Style";
const COL_LEAD_STYLE: &str = "Lead Style";
const COL_ROUTE_TYPE: &str = "Route Type";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build a [`TickDataset`] from the raw CSV text of a tick export.
///
/// The first record is the header. Rows come out in input order. The build
/// is fail-fast: the first unrecognized rating or malformed date aborts it,
/// and no partial dataset is produced.
pub fn build_dataset(csv_text: &str) -> Result<TickDataset, DataError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::locate(&headers)?;

    let mut ticks = Vec::new();
    for record in reader.records() {
        let record = record?;
        ticks.push(columns.tick_from(&record)?);
    }

    Ok(TickDataset { ticks })
}

/// Positions of the required columns within the export header.
struct ColumnIndex {
    date: usize,
    route: usize,
    rating: usize,
    style: usize,
    lead_style: usize,
    route_type: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self, DataError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DataError::MissingColumn { name })
        };

        Ok(Self {
            date: position(COL_DATE)?,
            route: position(COL_ROUTE)?,
            rating: position(COL_RATING)?,
            style: position(COL_STYLE)?,
            lead_style: position(COL_LEAD_STYLE)?,
            route_type: position(COL_ROUTE_TYPE)?,
        })
    }

    fn tick_from(&self, record: &StringRecord) -> Result<Tick, DataError> {
        let field = |index: usize| record.get(index).unwrap_or("");

        let parsed = parse_grade(field(self.rating))?;
        let raw_date = field(self.date).trim();
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| {
            DataError::MalformedDate {
                value: raw_date.to_string(),
            }
        })?;

        Ok(Tick {
            date,
            route: field(self.route).to_string(),
            style: field(self.style).to_lowercase(),
            lead_style: field(self.lead_style).to_lowercase(),
            route_type: field(self.route_type).to_lowercase(),
            grade: parsed.grade,
            subgrade: parsed.subgrade,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradeError;

    const EXPORT: &str = "\
Date,Route,Rating,Notes,URL,Pitches,Location,Avg Stars,Your Stars,Style,Lead Style,Route Type
2023-05-14,Moonshine,5.11a,,,1,Somewhere,3.2,-1,Lead,Onsight,Sport
2023-05-20,Gritstone Arete,V3,,,1,Somewhere,2.8,-1,Send,,Boulder
2023-06-02,Moonshine,5.11a,,,1,Somewhere,3.2,-1,Lead,Fell/Hung,Sport
";

    #[test]
    fn builds_ticks_in_export_order() {
        let dataset = build_dataset(EXPORT).unwrap();
        assert_eq!(dataset.len(), 3);

        let first = &dataset.ticks[0];
        assert_eq!(first.route, "Moonshine");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 5, 14).unwrap());
        assert_eq!(first.grade, 11);
        assert_eq!(first.subgrade, Some('a'));
        assert_eq!(first.style, "lead");
        assert_eq!(first.lead_style, "onsight");
        assert_eq!(first.route_type, "sport");

        let boulder = &dataset.ticks[1];
        assert_eq!(boulder.grade, 3);
        assert_eq!(boulder.subgrade, None);
        assert_eq!(boulder.lead_style, "");
    }

    #[test]
    fn rebuild_is_deterministic() {
        let first = build_dataset(EXPORT).unwrap();
        let second = build_dataset(EXPORT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_rating_aborts_the_build() {
        let text = "\
Date,Route,Rating,Style,Lead Style,Route Type
2023-05-14,Mystery,purple,Lead,Onsight,Sport
";
        match build_dataset(text) {
            Err(DataError::Grade(GradeError::Unrecognized { rating })) => {
                assert_eq!(rating, "purple");
            }
            other => panic!("expected a grade error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_aborts_the_build() {
        let text = "\
Date,Route,Rating,Style,Lead Style,Route Type
05/14/2023,Moonshine,5.11a,Lead,Onsight,Sport
";
        match build_dataset(text) {
            Err(DataError::MalformedDate { value }) => assert_eq!(value, "05/14/2023"),
            other => panic!("expected a date error, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_column_is_reported_by_name() {
        let text = "Date,Route,Style,Lead Style,Route Type\n";
        match build_dataset(text) {
            Err(DataError::MissingColumn { name }) => assert_eq!(name, "Rating"),
            other => panic!("expected a missing column error, got {other:?}"),
        }
    }

    #[test]
    fn header_only_export_yields_an_empty_dataset() {
        let text = "Date,Route,Rating,Style,Lead Style,Route Type\n";
        let dataset = build_dataset(text).unwrap();
        assert!(dataset.is_empty());
    }
}
