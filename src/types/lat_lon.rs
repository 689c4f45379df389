/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use meteopred::LatLon;
///
/// let novosibirsk = LatLon(55.00835, 82.93573);
/// assert_eq!(novosibirsk.0, 55.00835); // Latitude
/// assert_eq!(novosibirsk.1, 82.93573); // Longitude
/// assert!(novosibirsk.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    /// Whether both components are finite and within [-90, 90] and [-180, 180].
    pub fn is_valid(self) -> bool {
        self.0.is_finite()
            && self.1.is_finite()
            && (-90.0..=90.0).contains(&self.0)
            && (-180.0..=180.0).contains(&self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(LatLon(52.52, 13.40).is_valid());
        assert!(LatLon(-90.0, 180.0).is_valid());
        assert!(!LatLon(90.5, 0.0).is_valid());
        assert!(!LatLon(0.0, -180.1).is_valid());
        assert!(!LatLon(f64::NAN, 0.0).is_valid());
        assert!(!LatLon(0.0, f64::INFINITY).is_valid());
    }
}
