//! Turns a [`DailySeries`] into a [`ClimateGrid`].
//!
//! February 29 is removed by walking the calendar: every record dated on a leap day
//! is dropped, whatever its offset in the series. A span of whole calendar years then
//! leaves exactly 365 records per year, aligned by day-of-year.

use crate::cohort::error::GridError;
use crate::cohort::grid::{ClimateGrid, DAYS_PER_YEAR};
use crate::series::daily_series::DailySeries;
use crate::types::traits::utils::{is_leap_day, is_leap_year};
use crate::types::variable::Variable;
use chrono::{Datelike, NaiveDate};
use log::debug;

/// Offsets, relative to `start`, of every February 29 in `start..=end`.
///
/// The first offset is the exact position of the first leap day on or after `start`;
/// within one century consecutive offsets are 1461 days apart.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meteopred::leap_day_offsets;
///
/// let start = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(1960, 12, 31).unwrap();
/// assert_eq!(leap_day_offsets(start, end), vec![789, 2250, 3711]);
/// ```
pub fn leap_day_offsets(start: NaiveDate, end: NaiveDate) -> Vec<usize> {
    if start > end {
        return Vec::new();
    }
    (start.year()..=end.year())
        .filter(|year| is_leap_year(*year))
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 2, 29))
        .filter(|leap_day| (start..=end).contains(leap_day))
        .map(|leap_day| (leap_day - start).num_days() as usize)
        .collect()
}

/// Builds the climate grid for a series covering whole calendar years.
///
/// Pure: the same series always produces an identical grid.
///
/// # Errors
///
/// * [`GridError::UnalignedSpan`] if the series does not start on January 1 and end on
///   December 31. A partial year would shift every later day-of-year.
/// * [`GridError::Shape`] if the number of records left after removing leap days is not
///   a multiple of 365.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meteopred::{build_grid, DailySeries};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let series = DailySeries::from_values(start, vec![[12.0, 8.0, 16.0, 1.5]; 365 + 366])?;
/// let grid = build_grid(&series)?;
/// assert_eq!(grid.shape(), [2, 365, 4]);
/// # Ok(())
/// # }
/// ```
pub fn build_grid(series: &DailySeries) -> Result<ClimateGrid, GridError> {
    let (start, end) = (series.start(), series.end());
    if (start.month(), start.day()) != (1, 1) || (end.month(), end.day()) != (12, 31) {
        return Err(GridError::UnalignedSpan { start, end });
    }

    let offsets = leap_day_offsets(start, end);
    let kept_days = series.len() - offsets.len();
    if kept_days % DAYS_PER_YEAR != 0 {
        return Err(GridError::Shape {
            len: kept_days,
            remainder: kept_days % DAYS_PER_YEAR,
        });
    }

    let mut values = Vec::with_capacity(kept_days * Variable::COUNT);
    let mut removed = 0;
    for record in series.records() {
        if is_leap_day(record.date) {
            removed += 1;
            continue;
        }
        values.extend_from_slice(&record.values());
    }
    debug_assert_eq!(removed, offsets.len());

    let grid = ClimateGrid::from_values(start.year(), values)?;
    debug!(
        "Built climate grid {:?} for {}..={}, removed {} leap days (first at offset {:?})",
        grid.shape(),
        start,
        end,
        removed,
        offsets.first()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::error::SeriesError;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Every field of a record encodes its own date as `year * 1000 + ordinal`, so a
    /// grid cell reveals which raw record ended up in it.
    fn dated_series(first_year: i32, last_year: i32) -> Result<DailySeries, SeriesError> {
        let start = date(first_year, 1, 1);
        let days = (date(last_year, 12, 31) - start).num_days() + 1;
        let values = start.iter_days().take(days as usize).map(|day| {
            let code = (day.year() * 1000 + day.ordinal() as i32) as f64;
            [code, code + 0.1, code + 0.2, code + 0.3]
        });
        DailySeries::from_values(start, values)
    }

    fn march_first_code(year: i32) -> f64 {
        (year * 1000 + date(year, 3, 1).ordinal() as i32) as f64
    }

    #[test]
    fn test_offsets_from_non_leap_start() {
        let offsets = leap_day_offsets(date(1950, 1, 1), date(2022, 12, 31));
        assert_eq!(offsets.len(), 18);
        // 1950 and 1951 are full years, then January and February 1..28 of 1952
        assert_eq!(offsets[0], 365 + 365 + 31 + 28);
        assert!(offsets.windows(2).all(|pair| pair[1] - pair[0] == 1461));
    }

    #[test]
    fn test_offsets_from_leap_start() {
        assert_eq!(leap_day_offsets(date(2024, 1, 1), date(2027, 12, 31)), vec![59]);
        assert_eq!(
            leap_day_offsets(date(2021, 1, 1), date(2024, 12, 31)),
            vec![365 * 3 + 59]
        );
    }

    #[test]
    fn test_offsets_skip_century_non_leap_year() {
        let offsets = leap_day_offsets(date(1896, 1, 1), date(1904, 12, 31));
        assert_eq!(offsets.len(), 2);
        // 1900 is not a leap year, so the stride across it is 8 years plus one leap day
        assert_eq!(offsets[1] - offsets[0], 8 * 365 + 1);
    }

    #[test]
    fn test_offsets_outside_span_are_ignored() {
        assert!(leap_day_offsets(date(2024, 3, 1), date(2024, 12, 31)).is_empty());
        assert!(leap_day_offsets(date(2024, 12, 31), date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_shape_invariant() -> Result<(), Box<dyn std::error::Error>> {
        for (first_year, last_year) in [(1950, 1953), (2021, 2022), (2000, 2000), (1950, 2022)] {
            let series = dated_series(first_year, last_year)?;
            let leap_days = leap_day_offsets(series.start(), series.end()).len();
            let kept = series.len() - leap_days;
            assert_eq!(kept % 365, 0);

            let grid = build_grid(&series)?;
            assert_eq!(grid.shape(), [kept / 365, 365, 4]);
            assert_eq!(grid.years() as i32, last_year - first_year + 1);
            assert_eq!(grid.first_year(), first_year);
        }
        Ok(())
    }

    #[test]
    fn test_leap_start_aligns_march_first() -> Result<(), Box<dyn std::error::Error>> {
        let grid = build_grid(&dated_series(2024, 2027)?)?;
        for (offset, year) in (2024..=2027).enumerate() {
            // day-of-year 60 is March 1 in the non-leap reference calendar
            assert_eq!(grid.get(offset, 59, Variable::AvgTemp), Some(march_first_code(year)));
            assert_eq!(
                grid.get(offset, 59, Variable::Precipitation),
                Some(march_first_code(year) + 0.3)
            );
        }
        // February 28 stays on day-of-year 59 in the leap year
        assert_eq!(grid.get(0, 58, Variable::AvgTemp), Some(2_024_059.0));
        // December 31 of the leap year is its 366th raw day but lands on day 365
        assert_eq!(grid.get(0, 364, Variable::AvgTemp), Some(2_024_366.0));
        Ok(())
    }

    #[test]
    fn test_non_leap_start_aligns_march_first() -> Result<(), Box<dyn std::error::Error>> {
        for first_year in [1950, 1951, 1953, 2021] {
            let grid = build_grid(&dated_series(first_year, first_year + 5)?)?;
            for offset in 0..grid.years() {
                let year = first_year + offset as i32;
                assert_eq!(
                    grid.get(offset, 59, Variable::MinTemp),
                    Some(march_first_code(year) + 0.1),
                    "misaligned March 1 in {year}"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_build_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
        let series = dated_series(1996, 2004)?;
        let first = build_grid(&series)?;
        let second = build_grid(&series)?;
        assert_eq!(first, second);
        assert!(first
            .as_slice()
            .iter()
            .zip(second.as_slice())
            .all(|(a, b)| a.to_bits() == b.to_bits()));
        Ok(())
    }

    #[test]
    fn test_unaligned_span_is_rejected() -> Result<(), SeriesError> {
        let series = DailySeries::from_values(date(2021, 7, 1), vec![[0.0; 4]; 365])?;
        assert_eq!(
            build_grid(&series),
            Err(GridError::UnalignedSpan {
                start: date(2021, 7, 1),
                end: date(2022, 6, 30),
            })
        );

        let short = DailySeries::from_values(date(2021, 1, 1), vec![[0.0; 4]; 364])?;
        assert!(matches!(
            build_grid(&short),
            Err(GridError::UnalignedSpan { .. })
        ));
        Ok(())
    }
}
