use crate::types::variable::Variable;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("Daily series contains no records")]
    Empty,

    #[error("Daily series is not contiguous: expected {expected}, found {found}")]
    Gap {
        expected: NaiveDate,
        found: NaiveDate,
    },

    #[error("Non-finite {variable} value on {date}")]
    NonFinite { date: NaiveDate, variable: Variable },

    #[error("Daily series would run past the last representable date")]
    DateOverflow,
}
