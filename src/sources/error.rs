use crate::series::error::SeriesError;
use crate::types::traits::types::StartEndDate;
use chrono::NaiveDate;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read daily CSV file '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("CSV column count ({found}) does not match daily schema length ({expected}) in '{path}'")]
    SchemaMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Could not parse '{0}' as a YYYY-MM-DD date")]
    DateParse(String),

    #[error("Missing '{column}' value on {date}, the series must be gap-filled")]
    MissingValue { date: NaiveDate, column: String },

    #[error("Daily data does not cover {requested} (found {found:?})")]
    Coverage {
        requested: StartEndDate,
        found: Option<StartEndDate>,
    },

    #[error(transparent)]
    Series(#[from] SeriesError),
}
