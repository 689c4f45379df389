use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("Daily series {start}..={end} must start on January 1 and end on December 31")]
    UnalignedSpan { start: NaiveDate, end: NaiveDate },

    #[error("{len} days remain after leap-day removal, {remainder} more than a whole number of 365-day years")]
    Shape { len: usize, remainder: usize },

    #[error("Climate grid needs at least one full year of data")]
    Empty,
}
