//! Contains the [`ClimateGrid`], the year × day-of-year × variable array every
//! prediction is computed from.

use crate::cohort::error::GridError;
use crate::types::variable::Variable;

/// Days per year once February 29 has been removed.
pub const DAYS_PER_YEAR: usize = 365;

/// An immutable `[years, 365, 4]` array of daily values.
///
/// Element `[y, d, v]` holds variable `v` on day-of-year `d + 1` (leap day excluded)
/// of the `y`-th covered year. Storage is a single row-major `Vec<f64>`.
///
/// Grids are produced by [`crate::build_grid`] or [`ClimateGrid::from_values`] and are
/// never mutated afterwards, so a grid can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateGrid {
    first_year: i32,
    years: usize,
    values: Vec<f64>,
}

impl ClimateGrid {
    /// Wraps a flat row-major buffer of `years * 365 * 4` values.
    ///
    /// # Errors
    ///
    /// * [`GridError::Empty`] if `values` is empty.
    /// * [`GridError::Shape`] if the number of day rows is not a multiple of 365
    ///   (or `values` does not hold whole rows of four variables).
    pub fn from_values(first_year: i32, values: Vec<f64>) -> Result<Self, GridError> {
        if values.is_empty() {
            return Err(GridError::Empty);
        }
        let year_len = DAYS_PER_YEAR * Variable::COUNT;
        if values.len() % year_len != 0 {
            // Reported in days, rounding a partial trailing row up.
            let days = values.len().div_ceil(Variable::COUNT);
            return Err(GridError::Shape {
                len: days,
                remainder: days % DAYS_PER_YEAR,
            });
        }
        Ok(Self {
            first_year,
            years: values.len() / year_len,
            values,
        })
    }

    /// `[years, 365, 4]`
    pub fn shape(&self) -> [usize; 3] {
        [self.years, DAYS_PER_YEAR, Variable::COUNT]
    }

    /// Number of covered years (the first axis).
    pub fn years(&self) -> usize {
        self.years
    }

    /// Calendar year of the first row.
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Calendar year of the last row.
    pub fn last_year(&self) -> i32 {
        self.first_year + self.years as i32 - 1
    }

    /// The value at `[year_offset, day_index, variable]`, `None` when out of range.
    ///
    /// `day_index` is zero-based: day-of-year minus one.
    pub fn get(&self, year_offset: usize, day_index: usize, variable: Variable) -> Option<f64> {
        if year_offset >= self.years || day_index >= DAYS_PER_YEAR {
            return None;
        }
        self.values
            .get(Self::flat_index(year_offset, day_index, variable))
            .copied()
    }

    /// The cohort of `variable` on zero-based `day_index`: one value per covered year,
    /// oldest first.
    ///
    /// # Panics
    ///
    /// Panics if `day_index >= 365`.
    pub fn cohort(&self, day_index: usize, variable: Variable) -> impl Iterator<Item = f64> + '_ {
        assert!(day_index < DAYS_PER_YEAR, "day index {day_index} out of range");
        (0..self.years).map(move |year| self.values[Self::flat_index(year, day_index, variable)])
    }

    /// The raw row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    fn flat_index(year_offset: usize, day_index: usize, variable: Variable) -> usize {
        (year_offset * DAYS_PER_YEAR + day_index) * Variable::COUNT + variable.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_year_grid() -> ClimateGrid {
        // value = year * 10_000 + day * 10 + variable
        let values = (0..2)
            .flat_map(|year| {
                (0..DAYS_PER_YEAR).flat_map(move |day| {
                    (0..Variable::COUNT).map(move |var| (year * 10_000 + day * 10 + var) as f64)
                })
            })
            .collect();
        ClimateGrid::from_values(1990, values).unwrap()
    }

    #[test]
    fn test_shape_and_years() {
        let grid = two_year_grid();
        assert_eq!(grid.shape(), [2, 365, 4]);
        assert_eq!(grid.first_year(), 1990);
        assert_eq!(grid.last_year(), 1991);
        assert_eq!(grid.as_slice().len(), 2 * 365 * 4);
    }

    #[test]
    fn test_indexing() {
        let grid = two_year_grid();
        assert_eq!(grid.get(0, 0, Variable::AvgTemp), Some(0.0));
        assert_eq!(grid.get(1, 59, Variable::MaxTemp), Some(10_592.0));
        assert_eq!(grid.get(1, 364, Variable::Precipitation), Some(13_643.0));
        assert_eq!(grid.get(2, 0, Variable::AvgTemp), None);
        assert_eq!(grid.get(0, 365, Variable::AvgTemp), None);
    }

    #[test]
    fn test_cohort_selects_one_value_per_year() {
        let grid = two_year_grid();
        let cohort: Vec<f64> = grid.cohort(100, Variable::MinTemp).collect();
        assert_eq!(cohort, vec![1_001.0, 11_001.0]);
    }

    #[test]
    fn test_rejects_partial_years() {
        assert_eq!(ClimateGrid::from_values(2000, vec![]), Err(GridError::Empty));
        assert_eq!(
            ClimateGrid::from_values(2000, vec![0.0; 366 * 4]),
            Err(GridError::Shape {
                len: 366,
                remainder: 1
            })
        );
    }
}
