use crate::types::variable::Variable;
use chrono::NaiveDate;

/// One gap-filled day of observations.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DailyRecord {
    pub date: NaiveDate,       // date
    pub temp_avg: f64,         // tavg
    pub temp_min: f64,         // tmin
    pub temp_max: f64,         // tmax
    pub precipitation: f64,    // prcp (total mm)
}

impl DailyRecord {
    /// Builds a record from values in storage order (avg, min, max, precipitation).
    pub fn from_values(date: NaiveDate, values: [f64; Variable::COUNT]) -> Self {
        let [temp_avg, temp_min, temp_max, precipitation] = values;
        Self {
            date,
            temp_avg,
            temp_min,
            temp_max,
            precipitation,
        }
    }

    /// The four values in storage order.
    pub fn values(&self) -> [f64; Variable::COUNT] {
        [self.temp_avg, self.temp_min, self.temp_max, self.precipitation]
    }

    pub fn value(&self, variable: Variable) -> f64 {
        self.values()[variable.index()]
    }
}
