pub mod lat_lon;
pub mod month_day;
pub mod prediction;
pub mod traits;
pub mod variable;
pub mod weather_data;
