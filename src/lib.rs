//! Climatological statistics for a calendar day, computed from decades of daily
//! weather observations at one location.
//!
//! A gap-filled [`DailySeries`] is reshaped by [`build_grid`] into a [`ClimateGrid`]
//! of `[years, 365, 4]` values (February 29 removed), and a [`ClimatePredictor`]
//! reduces the cohort of any calendar day to a mean and population standard deviation.

mod cohort;
mod error;
mod predictor;
mod series;
mod sources;
mod types;

pub use error::PredictorError;

pub use cohort::builder::{build_grid, leap_day_offsets};
pub use cohort::error::GridError;
pub use cohort::grid::{ClimateGrid, DAYS_PER_YEAR};

pub use predictor::climate_predictor::*;
pub use predictor::day_of_year::{day_of_year, REFERENCE_YEAR};
pub use predictor::error::QueryError;
pub use predictor::stats::{mean, population_std};

pub use series::daily_series::DailySeries;
pub use series::error::SeriesError;

pub use sources::csv_source::{CsvSource, DAILY_SCHEMA};
pub use sources::daily_source::DailySource;
pub use sources::error::SourceError;
pub use sources::frame_source::{FrameSource, DEFAULT_INTERPOLATION_LIMIT};

pub use types::lat_lon::LatLon;
pub use types::month_day::MonthDay;
pub use types::prediction::{DayStatistics, PrecipitationPrediction, TemperaturePrediction};
pub use types::traits::any::any_month_day::AnyMonthDay;
pub use types::traits::period::date_period::DatePeriod;
pub use types::traits::types::{StartEndDate, Year};
pub use types::variable::{ParseVariableError, Variable};
pub use types::weather_data::daily::DailyRecord;
