use chrono::{Datelike, NaiveDate};

pub(crate) fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

pub(crate) fn is_leap_day(date: NaiveDate) -> bool {
    date.month() == 2 && date.day() == 29
}
