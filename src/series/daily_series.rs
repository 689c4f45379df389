//! Contains the [`DailySeries`], the validated input of the cohort builder.

use crate::series::error::SeriesError;
use crate::types::traits::types::StartEndDate;
use crate::types::variable::Variable;
use crate::types::weather_data::daily::DailyRecord;
use chrono::NaiveDate;

/// An ordered run of daily records with exactly one record per calendar day.
///
/// The series is guaranteed non-empty, gap-free and free of `NaN`/infinite values.
/// Filling gaps in raw station data is the job of whoever supplies the records;
/// the series only checks that it was done.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    records: Vec<DailyRecord>,
}

impl DailySeries {
    /// Validates and wraps a list of records.
    ///
    /// # Errors
    ///
    /// * [`SeriesError::Empty`] if `records` is empty.
    /// * [`SeriesError::Gap`] if a record's date is not the day after its predecessor.
    /// * [`SeriesError::NonFinite`] if any value is `NaN` or infinite.
    pub fn new(records: Vec<DailyRecord>) -> Result<Self, SeriesError> {
        let first = records.first().ok_or(SeriesError::Empty)?;

        let mut expected = first.date;
        for record in &records {
            if record.date != expected {
                return Err(SeriesError::Gap {
                    expected,
                    found: record.date,
                });
            }
            if let Some(variable) = Variable::ALL
                .into_iter()
                .find(|variable| !record.value(*variable).is_finite())
            {
                return Err(SeriesError::NonFinite {
                    date: record.date,
                    variable,
                });
            }
            expected = expected.succ_opt().ok_or(SeriesError::DateOverflow)?;
        }

        Ok(Self { records })
    }

    /// Builds a series from consecutive value rows, the first one dated `start`.
    ///
    /// Each row is `[avg, min, max, precipitation]`.
    pub fn from_values<I>(start: NaiveDate, values: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = [f64; Variable::COUNT]>,
    {
        let mut date = Some(start);
        let records = values
            .into_iter()
            .map(|row| {
                let current = date.ok_or(SeriesError::DateOverflow)?;
                date = current.succ_opt();
                Ok(DailyRecord::from_values(current, row))
            })
            .collect::<Result<Vec<_>, SeriesError>>()?;
        Self::new(records)
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn start(&self) -> NaiveDate {
        self.records[0].date
    }

    pub fn end(&self) -> NaiveDate {
        self.records[self.records.len() - 1].date
    }

    pub fn period(&self) -> StartEndDate {
        StartEndDate {
            start: self.start(),
            end: self.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_from_values_assigns_consecutive_dates() -> Result<(), SeriesError> {
        let series = DailySeries::from_values(date(2024, 2, 28), vec![[1.0, 0.0, 2.0, 0.5]; 3])?;
        assert_eq!(series.len(), 3);
        assert_eq!(series.start(), date(2024, 2, 28));
        assert_eq!(series.records()[1].date, date(2024, 2, 29));
        assert_eq!(series.end(), date(2024, 3, 1));
        assert_eq!(series.period().num_days(), 3);
        Ok(())
    }

    #[test]
    fn test_empty_series_is_rejected() {
        assert_eq!(DailySeries::new(vec![]), Err(SeriesError::Empty));
        assert_eq!(
            DailySeries::from_values(date(2000, 1, 1), Vec::new()),
            Err(SeriesError::Empty)
        );
    }

    #[test]
    fn test_gap_is_rejected() {
        let records = vec![
            DailyRecord::from_values(date(2001, 1, 1), [0.0; 4]),
            DailyRecord::from_values(date(2001, 1, 2), [0.0; 4]),
            DailyRecord::from_values(date(2001, 1, 4), [0.0; 4]),
        ];
        assert_eq!(
            DailySeries::new(records),
            Err(SeriesError::Gap {
                expected: date(2001, 1, 3),
                found: date(2001, 1, 4),
            })
        );
    }

    #[test]
    fn test_duplicate_day_is_rejected() {
        let records = vec![
            DailyRecord::from_values(date(2001, 1, 1), [0.0; 4]),
            DailyRecord::from_values(date(2001, 1, 1), [0.0; 4]),
        ];
        assert!(matches!(
            DailySeries::new(records),
            Err(SeriesError::Gap { .. })
        ));
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let result = DailySeries::from_values(
            date(2001, 1, 1),
            vec![[0.0, 0.0, 0.0, 0.0], [0.0, 0.0, f64::NAN, 0.0]],
        );
        assert_eq!(
            result,
            Err(SeriesError::NonFinite {
                date: date(2001, 1, 2),
                variable: Variable::MaxTemp,
            })
        );
    }
}
