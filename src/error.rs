use crate::cohort::error::GridError;
use crate::predictor::error::QueryError;
use crate::series::error::SeriesError;
use crate::sources::error::SourceError;
use crate::types::lat_lon::LatLon;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Invalid location {0:?}, expected latitude in [-90, 90] and longitude in [-180, 180]")]
    InvalidLocation(LatLon),

    #[error("Invalid year range {start_year}..={end_year}")]
    InvalidPeriod { start_year: i32, end_year: i32 },
}
