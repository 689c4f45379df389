use crate::types::prediction::DayStatistics;

/// Arithmetic mean, `NaN` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation (divisor N), `NaN` for an empty slice.
///
/// A single sample has a spread of zero.
pub fn population_std(samples: &[f64]) -> f64 {
    let mean = mean(samples);
    if mean.is_nan() {
        return f64::NAN;
    }
    let squared_deviations: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    (squared_deviations / samples.len() as f64).sqrt()
}

impl DayStatistics {
    pub fn from_samples(samples: &[f64]) -> Self {
        Self {
            mean: mean(samples),
            std: population_std(samples),
            samples: samples.len(),
        }
    }
}
