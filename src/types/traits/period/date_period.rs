use crate::types::traits::types::{StartEndDate, Year};
use chrono::NaiveDate;

/// Resolves a span of whole calendar years into an inclusive date range.
pub trait DatePeriod {
    fn get_date_period(self) -> Option<StartEndDate>;
}

impl DatePeriod for Year {
    fn get_date_period(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl DatePeriod for (Year, Year) {
    fn get_date_period(self) -> Option<StartEndDate> {
        if self.0 > self.1 {
            return None;
        }
        Some(StartEndDate {
            start: self.0.get_date_period()?.start,
            end: self.1.get_date_period()?.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_year_period() {
        let period = Year(1950).get_date_period().unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(1950, 1, 1).unwrap());
        assert_eq!(period.end, NaiveDate::from_ymd_opt(1950, 12, 31).unwrap());
        assert_eq!(period.num_days(), 365);
    }

    #[test]
    fn test_year_range_period() {
        let period = (Year(1950), Year(2022)).get_date_period().unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(1950, 1, 1).unwrap());
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
        // 73 years, 18 of them leap years (1952..=2020)
        assert_eq!(period.num_days(), 73 * 365 + 18);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!((Year(2000), Year(1999)).get_date_period().is_none());
    }
}
