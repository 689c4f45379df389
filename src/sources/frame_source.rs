//! Serves daily series out of an in-memory Polars `DataFrame`.

use crate::series::daily_series::DailySeries;
use crate::sources::daily_source::DailySource;
use crate::sources::error::SourceError;
use crate::types::lat_lon::LatLon;
use crate::types::traits::types::StartEndDate;
use crate::types::variable::Variable;
use crate::types::weather_data::daily::DailyRecord;
use chrono::NaiveDate;
use log::{debug, info, warn};
use polars::prelude::*;

const DATE_COLUMN: &str = "date";

/// Longest run of missing days filled by interpolation, matching Meteostat's
/// `Daily(...).interpolate(100)`.
pub const DEFAULT_INTERPOLATION_LIMIT: usize = 100;

/// A [`DailySource`] backed by a `DataFrame` with Meteostat daily columns.
///
/// The frame needs a `date` column (a `Date` or a `YYYY-MM-DD` string) and the numeric
/// columns `tavg`, `tmin`, `tmax` and `prcp`. Other columns are ignored. The frame holds
/// one station, so the requested location is only logged.
///
/// By default every day of the requested period must be present and complete. Call
/// [`FrameSource::interpolate`] to fill short gaps (missing rows or empty cells)
/// linearly instead.
#[derive(Debug, Clone)]
pub struct FrameSource {
    frame: DataFrame,
    interpolation_limit: Option<usize>,
}

impl FrameSource {
    pub fn new(frame: DataFrame) -> Self {
        Self {
            frame,
            interpolation_limit: None,
        }
    }

    /// Fills runs of at most `limit` consecutive missing days by linear interpolation
    /// between the surrounding observations. Longer runs and gaps at either end of the
    /// period are still reported as [`SourceError::MissingValue`].
    pub fn interpolate(mut self, limit: usize) -> Self {
        self.interpolation_limit = Some(limit);
        self
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }
}

impl DailySource for FrameSource {
    fn daily_series(
        &self,
        location: LatLon,
        period: StartEndDate,
    ) -> Result<DailySeries, SourceError> {
        info!(
            "Reading daily series {} for {:?} from a {}-row frame",
            period,
            location,
            self.frame.height()
        );
        series_from_frame(&self.frame, period, self.interpolation_limit)
    }
}

fn interpolated_name(variable: Variable) -> String {
    format!("{}_interpolated", variable.column_name())
}

/// Left-joins `data` onto one row per day of `period` and adds a linearly interpolated
/// copy of every value column.
fn reindexed(data: LazyFrame, period: StartEndDate) -> LazyFrame {
    let calendar: Vec<String> = period
        .start
        .iter_days()
        .take(period.num_days() as usize)
        .map(|day| day.format("%Y-%m-%d").to_string())
        .collect();
    let interpolated = Variable::ALL.map(|variable| {
        col(variable.column_name())
            .interpolate(InterpolationMethod::Linear)
            .alias(interpolated_name(variable))
    });

    Series::new(DATE_COLUMN.into(), calendar)
        .into_frame()
        .lazy()
        .join(
            data,
            [col(DATE_COLUMN)],
            [col(DATE_COLUMN)],
            JoinArgs::new(JoinType::Left),
        )
        .sort([DATE_COLUMN], SortMultipleOptions::default())
        .with_columns(interpolated)
}

/// Takes interpolated values for runs of at most `limit` missing entries. Runs at the
/// edges have no interpolated value and stay missing.
pub(crate) fn fill_short_gaps(
    raw: &[Option<f64>],
    interpolated: &[Option<f64>],
    limit: usize,
) -> Vec<Option<f64>> {
    let mut filled = raw.to_vec();
    let mut idx = 0;
    while idx < raw.len() {
        if raw[idx].is_some() {
            idx += 1;
            continue;
        }
        let run_start = idx;
        while idx < raw.len() && raw[idx].is_none() {
            idx += 1;
        }
        if idx - run_start <= limit {
            filled[run_start..idx].copy_from_slice(&interpolated[run_start..idx]);
        }
    }
    filled
}

/// Restricts `frame` to `period`, sorted by date, and converts it to a [`DailySeries`].
///
/// With an `interpolation_limit` the frame is first reindexed to every day of the period
/// and short gaps are filled.
pub(crate) fn series_from_frame(
    frame: &DataFrame,
    period: StartEndDate,
    interpolation_limit: Option<usize>,
) -> Result<DailySeries, SourceError> {
    for name in std::iter::once(DATE_COLUMN).chain(Variable::ALL.map(Variable::column_name)) {
        frame
            .column(name)
            .map_err(|e| SourceError::ColumnNotFound(name.to_string(), e))?;
    }

    let date = col(DATE_COLUMN).cast(DataType::String);
    let mut selection = vec![date.clone()];
    selection.extend(
        Variable::ALL
            .into_iter()
            .map(|variable| col(variable.column_name()).cast(DataType::Float64)),
    );
    let in_period = date
        .clone()
        .gt_eq(lit(period.start.format("%Y-%m-%d").to_string()))
        .and(date.lt_eq(lit(period.end.format("%Y-%m-%d").to_string())));

    let mut lazy = frame
        .clone()
        .lazy()
        .select(selection)
        .filter(in_period)
        .sort([DATE_COLUMN], SortMultipleOptions::default());
    if interpolation_limit.is_some() {
        lazy = reindexed(lazy, period);
    }
    let filtered = lazy.collect()?;

    let dates = filtered.column(DATE_COLUMN)?.str()?;
    let mut value_columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(Variable::COUNT);
    for variable in Variable::ALL {
        let raw: Vec<Option<f64>> = filtered
            .column(variable.column_name())?
            .f64()?
            .into_iter()
            .collect();
        let values = match interpolation_limit {
            Some(limit) => {
                let interpolated: Vec<Option<f64>> = filtered
                    .column(&interpolated_name(variable))?
                    .f64()?
                    .into_iter()
                    .collect();
                let filled = fill_short_gaps(&raw, &interpolated, limit);
                debug!(
                    "Interpolated {} missing '{}' values (limit {} days)",
                    filled.iter().flatten().count() - raw.iter().flatten().count(),
                    variable,
                    limit
                );
                filled
            }
            None => raw,
        };
        value_columns.push(values);
    }

    let mut records = Vec::with_capacity(filtered.height());
    for idx in 0..filtered.height() {
        let raw_date = dates.get(idx).unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| SourceError::DateParse(raw_date.to_string()))?;

        let mut values = [0.0; Variable::COUNT];
        for (variable, column) in Variable::ALL.into_iter().zip(&value_columns) {
            values[variable.index()] = column[idx].ok_or_else(|| SourceError::MissingValue {
                date,
                column: variable.column_name().to_string(),
            })?;
        }
        records.push(DailyRecord::from_values(date, values));
    }

    let found = match (records.first(), records.last()) {
        (Some(first), Some(last)) => Some(StartEndDate {
            start: first.date,
            end: last.date,
        }),
        _ => None,
    };
    if found != Some(period) {
        warn!("Daily data covers {:?}, {} was requested", found, period);
        return Err(SourceError::Coverage {
            requested: period,
            found,
        });
    }

    Ok(DailySeries::new(records)?)
}
