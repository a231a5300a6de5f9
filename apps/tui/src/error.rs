use thiserror::Error;

/// Failure mode of the grade parser: the rating string matched neither the
/// roped-climbing nor the bouldering dialect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GradeError {
    #[error("unrecognized grade format: {rating:?}")]
    Unrecognized { rating: String },
}

/// Errors raised while fetching or rebuilding the tick dataset.
///
/// A grade or date that fails to parse aborts the whole build; no partial
/// dataset is ever produced. Fetch errors are surfaced to the refresh cycle,
/// which keeps the previous dataset and reports the failure.
#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Grade(#[from] GradeError),

    #[error("tick export is missing the {name:?} column")]
    MissingColumn { name: &'static str },

    #[error("malformed date {value:?} (expected YYYY-MM-DD)")]
    MalformedDate { value: String },

    #[error("failed to fetch tick export: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("malformed tick export: {0}")]
    Csv(#[from] csv::Error),
}
