pub mod climate_predictor;
pub mod day_of_year;
pub mod error;
pub mod stats;
