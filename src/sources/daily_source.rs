use crate::series::daily_series::DailySeries;
use crate::sources::error::SourceError;
use crate::types::lat_lon::LatLon;
use crate::types::traits::types::StartEndDate;

/// Supplies a gap-filled daily series for a location and date range.
///
/// Implementations own all I/O and any interpolation of missing station readings.
/// The returned series must cover `period` exactly, one record per day.
///
/// # Examples
///
/// ```
/// use meteopred::{DailySeries, DailySource, LatLon, SourceError, StartEndDate};
///
/// /// A station where every day is 20 °C and dry.
/// struct Constant;
///
/// impl DailySource for Constant {
///     fn daily_series(&self, _: LatLon, period: StartEndDate) -> Result<DailySeries, SourceError> {
///         let days = period.num_days() as usize;
///         Ok(DailySeries::from_values(period.start, vec![[20.0, 15.0, 25.0, 0.0]; days])?)
///     }
/// }
/// ```
pub trait DailySource {
    fn daily_series(
        &self,
        location: LatLon,
        period: StartEndDate,
    ) -> Result<DailySeries, SourceError>;
}
