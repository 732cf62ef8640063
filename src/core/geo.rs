//! Great-Circle Distance
//!
//! Haversine distance between two latitude/longitude points, with Earth
//! approximated as a perfect sphere.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe in degrees.
///
/// Latitude is conventionally in `[-90, 90]` and longitude in `[-180, 180]`,
/// but neither is validated here: catalog entries and globe clicks pass
/// through unchanged, and range checking is the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat_deg: f64,
    /// Longitude in degrees.
    pub lon_deg: f64,
}

impl GeoPoint {
    /// Create a point from latitude/longitude degrees.
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Great-circle distance to another point, in kilometers.
    #[inline]
    pub fn distance_km(&self, other: GeoPoint) -> f64 {
        distance_km(*self, other)
    }
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// Symmetric, exactly zero for identical points, and finite for any valid
/// latitude/longitude pair. No side effects, no error conditions.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat_deg - a.lat_deg).to_radians();
    let d_lon = (b.lon_deg - a.lon_deg).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat_deg.to_radians().cos() * b.lat_deg.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

// =============================================================================
// TESTS
// =============================================================================
