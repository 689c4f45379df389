//! Defines the daily weather variables stored in the climate grid.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four daily variables kept per record.
///
/// The declaration order is the storage order of the variable axis in the
/// [`crate::ClimateGrid`]: average, minimum and maximum temperature, then precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// Daily average air temperature in °C.
    AvgTemp,
    /// Daily minimum air temperature in °C.
    MinTemp,
    /// Daily maximum air temperature in °C.
    MaxTemp,
    /// Daily precipitation total in mm.
    Precipitation,
}

impl Variable {
    /// Number of variables, i.e. the length of the grid's last axis.
    pub const COUNT: usize = 4;

    /// All variables in storage order.
    pub const ALL: [Variable; Variable::COUNT] = [
        Variable::AvgTemp,
        Variable::MinTemp,
        Variable::MaxTemp,
        Variable::Precipitation,
    ];

    /// Position of this variable on the grid's variable axis.
    pub fn index(self) -> usize {
        match self {
            Variable::AvgTemp => 0,
            Variable::MinTemp => 1,
            Variable::MaxTemp => 2,
            Variable::Precipitation => 3,
        }
    }

    /// The Meteostat daily column holding this variable.
    pub fn column_name(self) -> &'static str {
        match self {
            Variable::AvgTemp => "tavg",
            Variable::MinTemp => "tmin",
            Variable::MaxTemp => "tmax",
            Variable::Precipitation => "prcp",
        }
    }
}

/// Formats a `Variable` as its Meteostat column name.
///
/// # Examples
///
/// ```
/// use meteopred::Variable;
///
/// assert_eq!(Variable::Precipitation.to_string(), "prcp");
/// ```
impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown weather variable '{0}', expected one of tavg, tmin, tmax, prcp")]
pub struct ParseVariableError(pub String);

impl FromStr for Variable {
    type Err = ParseVariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .into_iter()
            .find(|variable| variable.column_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVariableError(s.to_string()))
    }
}
