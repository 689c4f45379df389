//! Reads Meteostat bulk daily CSV files from disk.

use crate::series::daily_series::DailySeries;
use crate::sources::daily_source::DailySource;
use crate::sources::error::SourceError;
use crate::sources::frame_source::series_from_frame;
use crate::types::lat_lon::LatLon;
use crate::types::traits::types::StartEndDate;
use log::{info, warn};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Column layout of a Meteostat bulk daily file, which has no header row.
pub const DAILY_SCHEMA: [&str; 11] = [
    "date", "tavg", "tmin", "tmax", "prcp", "snow", "wdir", "wspd", "wpgt", "pres", "tsun",
];

/// A [`DailySource`] reading one station's decompressed Meteostat daily CSV
/// (e.g. `https://bulk.meteostat.net/v2/daily/10637.csv.gz`, gunzipped).
///
/// The file is read on every call; the location is only logged. Meteostat files often
/// miss days or single values, see [`CsvSource::interpolate`].
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    interpolation_limit: Option<usize>,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            interpolation_limit: None,
        }
    }

    /// Linearly fills runs of at most `limit` missing days, like
    /// [`FrameSource::interpolate`](crate::FrameSource::interpolate).
    pub fn interpolate(mut self, limit: usize) -> Self {
        self.interpolation_limit = Some(limit);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the file into a `DataFrame` with [`DAILY_SCHEMA`] column names.
    pub fn read_frame(&self) -> Result<DataFrame, SourceError> {
        let mut df = CsvReadOptions::default()
            .with_has_header(false)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .map_err(|e| SourceError::CsvRead(self.path.clone(), e))?
            .finish()
            .map_err(|e| SourceError::CsvRead(self.path.clone(), e))?;

        if df.width() != DAILY_SCHEMA.len() {
            warn!(
                "CSV column count ({}) does not match daily schema length ({}) in {:?}",
                df.width(),
                DAILY_SCHEMA.len(),
                self.path
            );
            return Err(SourceError::SchemaMismatch {
                path: self.path.clone(),
                expected: DAILY_SCHEMA.len(),
                found: df.width(),
            });
        }
        df.set_column_names(DAILY_SCHEMA.iter().copied())?;
        Ok(df)
    }
}

impl DailySource for CsvSource {
    fn daily_series(
        &self,
        location: LatLon,
        period: StartEndDate,
    ) -> Result<DailySeries, SourceError> {
        info!(
            "Reading daily series {} for {:?} from {:?}",
            period, location, self.path
        );
        let df = self.read_frame()?;
        series_from_frame(&df, period, self.interpolation_limit)
    }
}
