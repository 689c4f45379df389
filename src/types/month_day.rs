//! Year-agnostic calendar day used to query the climate grid.

use crate::types::traits::utils::is_leap_year;
use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar month and day with no year attached.
///
/// Any month/day that exists in *some* year is representable, February 29 included.
/// Whether a day can actually be queried is decided by the predictor, which rejects
/// February 29 because the leap day has no cohort in the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a `MonthDay`, returning `None` when no year contains this day
    /// (e.g. April 31 or February 30).
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year so February 29 passes validation here.
        NaiveDate::from_ymd_opt(2000, month, day)?;
        Some(Self { month, day })
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    pub fn is_leap_day(self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// The same month/day in `year`, `None` for February 29 of a non-leap year.
    pub fn in_year(self, year: i32) -> Option<NaiveDate> {
        if self.is_leap_day() && !is_leap_year(year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
