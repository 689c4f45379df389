use crate::predictor::error::QueryError;
use crate::types::month_day::MonthDay;
use chrono::{Datelike, NaiveDate};

/// Any non-leap year; month/day pairs are resolved against it.
pub const REFERENCE_YEAR: i32 = 2023;

/// Day-of-year in `1..=365` under the leap-day-excluded calendar.
///
/// # Errors
///
/// [`QueryError::LeapDay`] for February 29.
pub fn day_of_year(month_day: MonthDay) -> Result<usize, QueryError> {
    if month_day.is_leap_day() {
        return Err(QueryError::LeapDay);
    }
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, month_day.month(), month_day.day())
        .map(|date| date.ordinal() as usize)
        .ok_or(QueryError::InvalidDate {
            month: month_day.month(),
            day: month_day.day(),
        })
}
