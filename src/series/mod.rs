pub mod daily_series;
pub mod error;
