//! Contains the [`ClimatePredictor`], which answers "what is the historical
//! distribution of a variable on this calendar day".

use crate::cohort::builder::build_grid;
use crate::cohort::grid::ClimateGrid;
use crate::error::PredictorError;
use crate::predictor::day_of_year::day_of_year;
use crate::predictor::error::QueryError;
use crate::series::daily_series::DailySeries;
use crate::sources::daily_source::DailySource;
use crate::types::lat_lon::LatLon;
use crate::types::month_day::MonthDay;
use crate::types::prediction::{DayStatistics, PrecipitationPrediction, TemperaturePrediction};
use crate::types::traits::any::any_month_day::AnyMonthDay;
use crate::types::traits::period::date_period::DatePeriod;
use crate::types::traits::types::Year;
use crate::types::variable::Variable;
use bon::bon;
use log::info;

/// First year fetched by [`ClimatePredictor::from_source`] when none is given.
pub const DEFAULT_START_YEAR: i32 = 1950;
/// Last year fetched by [`ClimatePredictor::from_source`] when none is given.
pub const DEFAULT_END_YEAR: i32 = 2022;

/// Climatological statistics per calendar day, computed over an immutable [`ClimateGrid`].
///
/// Every query picks the cohort of one day-of-year (one value per historical year) and
/// reduces it to a mean and a population standard deviation. The year of the query date
/// is ignored. February 29 cannot be queried because leap days are not part of the grid.
///
/// The predictor holds no mutable state, so a single instance can serve concurrent
/// queries from many threads (e.g. behind an `Arc`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meteopred::{ClimatePredictor, DailySeries};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let mut values = vec![[0.0, -5.0, 5.0, 0.0]; 365];
/// values.extend(vec![[10.0, 5.0, 15.0, 4.0]; 365]);
/// let predictor = ClimatePredictor::from_series(&DailySeries::from_values(start, values)?)?;
///
/// let june_18 = NaiveDate::from_ymd_opt(2023, 6, 18).unwrap();
/// let temperature = predictor.predict_temperature(june_18)?;
/// assert_eq!(temperature.avg, 5.0);
/// assert_eq!(temperature.avg_std, 5.0);
///
/// let rain = predictor.predict_precipitation(june_18)?;
/// assert_eq!(rain.avg, 2.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClimatePredictor {
    grid: ClimateGrid,
}

#[bon]
impl ClimatePredictor {
    /// Wraps an already built grid.
    pub fn from_grid(grid: ClimateGrid) -> Self {
        Self { grid }
    }

    /// Builds the grid from `series` and wraps it.
    ///
    /// # Errors
    ///
    /// [`PredictorError::Grid`] if the series does not cover whole calendar years.
    pub fn from_series(series: &DailySeries) -> Result<Self, PredictorError> {
        Ok(Self::from_grid(build_grid(series)?))
    }

    /// Fetches the daily series for a location from `source` and builds a predictor.
    ///
    /// This method starts a builder. You must provide the location; optionally:
    /// *   `.start_year(i32)`: first historical year (default: 1950).
    /// *   `.end_year(i32)`: last historical year, inclusive (default: 2022).
    ///
    /// Finish with `.call()`.
    ///
    /// # Errors
    ///
    /// * [`PredictorError::InvalidLocation`] if the coordinates are not a valid latitude/longitude.
    /// * [`PredictorError::InvalidPeriod`] if `start_year` is after `end_year`.
    /// * [`PredictorError::Source`] if the source cannot supply the series.
    /// * [`PredictorError::Grid`] if the supplied series cannot be shaped into whole years.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use meteopred::{ClimatePredictor, CsvSource, LatLon, PredictorError};
    ///
    /// # fn main() -> Result<(), PredictorError> {
    /// let source = CsvSource::new("data/29634.csv");
    /// let predictor = ClimatePredictor::from_source(&source)
    ///     .location(LatLon(55.00835, 82.93573))
    ///     .start_year(1960)
    ///     .call()?;
    /// println!("{:?}", predictor.predict_temperature((6, 18))?);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = from_source)]
    #[doc(hidden)]
    pub fn build_from_source<S: DailySource + ?Sized>(
        #[builder(start_fn)] source: &S,
        location: LatLon,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Result<Self, PredictorError> {
        if !location.is_valid() {
            return Err(PredictorError::InvalidLocation(location));
        }
        let start_year = start_year.unwrap_or(DEFAULT_START_YEAR);
        let end_year = end_year.unwrap_or(DEFAULT_END_YEAR);
        let period = (Year(start_year), Year(end_year))
            .get_date_period()
            .ok_or(PredictorError::InvalidPeriod {
                start_year,
                end_year,
            })?;

        let series = source.daily_series(location, period)?;
        let predictor = Self::from_series(&series)?;
        info!(
            "Climate predictor for {:?} ready: {} years ({}..={})",
            location,
            predictor.years(),
            predictor.grid.first_year(),
            predictor.grid.last_year()
        );
        Ok(predictor)
    }

    pub fn grid(&self) -> &ClimateGrid {
        &self.grid
    }

    /// Number of historical years behind every statistic.
    pub fn years(&self) -> usize {
        self.grid.years()
    }

    /// Mean and population standard deviation of `variable` on the calendar day of
    /// `date`, across all covered years.
    ///
    /// # Errors
    ///
    /// * [`QueryError::LeapDay`] if `date` is February 29, in any year.
    /// * [`QueryError::Unresolvable`] if `date` cannot be resolved to a calendar day.
    pub fn statistics_for_day(
        &self,
        date: impl AnyMonthDay + std::fmt::Debug + Clone,
        variable: Variable,
    ) -> Result<DayStatistics, QueryError> {
        let month_day = resolve(date)?;
        self.statistics_for_month_day(month_day, variable)
    }

    /// Minimum, average and maximum temperature on the calendar day of `date`.
    pub fn predict_temperature(
        &self,
        date: impl AnyMonthDay + std::fmt::Debug + Clone,
    ) -> Result<TemperaturePrediction, QueryError> {
        let month_day = resolve(date)?;
        Ok(TemperaturePrediction::from_statistics(
            self.statistics_for_month_day(month_day, Variable::MinTemp)?,
            self.statistics_for_month_day(month_day, Variable::AvgTemp)?,
            self.statistics_for_month_day(month_day, Variable::MaxTemp)?,
        ))
    }

    /// Precipitation on the calendar day of `date`.
    pub fn predict_precipitation(
        &self,
        date: impl AnyMonthDay + std::fmt::Debug + Clone,
    ) -> Result<PrecipitationPrediction, QueryError> {
        let month_day = resolve(date)?;
        Ok(PrecipitationPrediction::from_statistics(
            self.statistics_for_month_day(month_day, Variable::Precipitation)?,
        ))
    }

    fn statistics_for_month_day(
        &self,
        month_day: MonthDay,
        variable: Variable,
    ) -> Result<DayStatistics, QueryError> {
        let day_index = day_of_year(month_day)? - 1;
        let cohort: Vec<f64> = self.grid.cohort(day_index, variable).collect();
        Ok(DayStatistics::from_samples(&cohort))
    }
}

fn resolve(date: impl AnyMonthDay + std::fmt::Debug + Clone) -> Result<MonthDay, QueryError> {
    date.clone()
        .get_month_day()
        .ok_or_else(|| QueryError::Unresolvable(format!("{date:?}")))
}
