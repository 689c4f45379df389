//! Result types returned by the [`crate::ClimatePredictor`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean and population standard deviation of one cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayStatistics {
    /// Arithmetic mean over all covered years.
    pub mean: f64,
    /// Population standard deviation (divisor N) over all covered years.
    pub std: f64,
    /// Number of years in the cohort.
    pub samples: usize,
}

/// Historical temperature distribution for one calendar day, in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePrediction {
    pub min: f64,
    pub min_std: f64,
    pub avg: f64,
    pub avg_std: f64,
    pub max: f64,
    pub max_std: f64,
}

impl TemperaturePrediction {
    pub(crate) fn from_statistics(
        min: DayStatistics,
        avg: DayStatistics,
        max: DayStatistics,
    ) -> Self {
        Self {
            min: min.mean,
            min_std: min.std,
            avg: avg.mean,
            avg_std: avg.std,
            max: max.mean,
            max_std: max.std,
        }
    }

    /// The six statistics keyed by name.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("min", self.min),
            ("min_std", self.min_std),
            ("avg", self.avg),
            ("avg_std", self.avg_std),
            ("max", self.max),
            ("max_std", self.max_std),
        ])
    }
}

/// Historical precipitation distribution for one calendar day, in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationPrediction {
    pub avg: f64,
    pub avg_std: f64,
}

impl PrecipitationPrediction {
    pub(crate) fn from_statistics(statistics: DayStatistics) -> Self {
        Self {
            avg: statistics.mean,
            avg_std: statistics.std,
        }
    }

    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([("avg", self.avg), ("avg_std", self.avg_std)])
    }
}
