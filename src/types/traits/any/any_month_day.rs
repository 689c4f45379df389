use crate::types::month_day::MonthDay;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that can be reduced to a year-agnostic calendar day.
///
/// The year component of the input, if any, is discarded.
pub trait AnyMonthDay {
    fn get_month_day(self) -> Option<MonthDay>;
}

impl AnyMonthDay for MonthDay {
    fn get_month_day(self) -> Option<MonthDay> {
        Some(self)
    }
}

impl AnyMonthDay for NaiveDate {
    fn get_month_day(self) -> Option<MonthDay> {
        MonthDay::new(self.month(), self.day())
    }
}

impl AnyMonthDay for NaiveDateTime {
    fn get_month_day(self) -> Option<MonthDay> {
        self.date().get_month_day()
    }
}

impl<Tz: TimeZone> AnyMonthDay for DateTime<Tz> {
    fn get_month_day(self) -> Option<MonthDay> {
        self.date_naive().get_month_day()
    }
}

/// `(month, day)`
impl AnyMonthDay for (u32, u32) {
    fn get_month_day(self) -> Option<MonthDay> {
        MonthDay::new(self.0, self.1)
    }
}

impl AnyMonthDay for &str {
    fn get_month_day(self) -> Option<MonthDay> {
        let trimmed = self.trim();
        if let Ok(naive_date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return naive_date.get_month_day();
        }
        // "MM-DD"; chrono can't parse a date without a year
        let (month, day) = trimmed.split_once('-')?;
        MonthDay::new(month.parse().ok()?, day.parse().ok()?)
    }
}

impl AnyMonthDay for String {
    fn get_month_day(self) -> Option<MonthDay> {
        self.as_str().get_month_day()
    }
}
