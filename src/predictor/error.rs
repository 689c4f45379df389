use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("February 29 has no cohort, leap days are removed from the climate grid")]
    LeapDay,

    #[error("{month:02}-{day:02} is not a calendar day")]
    InvalidDate { month: u32, day: u32 },

    #[error("Could not resolve '{0}' to a calendar day")]
    Unresolvable(String),
}
