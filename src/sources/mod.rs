//! Adapters supplying the daily series a predictor is built from.

pub mod csv_source;
pub mod daily_source;
pub mod error;
pub mod frame_source;
