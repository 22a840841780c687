//! Coordinate keys for duplicate detection.

/// Decimal places kept when comparing coordinates.
const PRECISION: i32 = 6;

/// A latitude/longitude pair rounded to six decimal places.
///
/// Stored as scaled integers so the key is exact under `Eq` and `Hash`.
/// Two stations with equal keys are treated as the same location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey {
    lat_micro: i64,
    lon_micro: i64,
}

impl CoordKey {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            lat_micro: round_scaled(latitude),
            lon_micro: round_scaled(longitude),
        }
    }

    /// Rounded latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.lat_micro as f64 / 10f64.powi(PRECISION)
    }

    /// Rounded longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.lon_micro as f64 / 10f64.powi(PRECISION)
    }
}

/// Round to `PRECISION` places and scale to an integer.
///
/// Formatting rounds the exact binary value, so a literal such as
/// `39.9000005` (stored just below the halfway point) rounds down.
fn round_scaled(degrees: f64) -> i64 {
    let digits: String = format!("{:.*}", PRECISION as usize, degrees)
        .chars()
        .filter(|&c| c != '.')
        .collect();
    digits
        .parse()
        .unwrap_or_else(|_| (degrees * 10f64.powi(PRECISION)).round() as i64)
}
