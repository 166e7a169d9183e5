//! Restaurant locations and great-circle distance.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`, matching
//! the axis convention of the `geo` crate.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Where a restaurant sits, both geographically and administratively.
///
/// # Examples
/// ```
/// use tableside_core::Location;
///
/// let location = Location::new(25.0330, 121.5654, "信義路五段7號", "台北市", "信義區");
/// assert_eq!(location.city, "台北市");
/// assert_eq!(location.coord.y, 25.0330);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Geospatial position (`x` = longitude, `y` = latitude).
    pub coord: Coord<f64>,
    /// Street address.
    pub address: String,
    /// City name.
    pub city: String,
    /// District or neighbourhood within the city.
    pub district: String,
}

impl Location {
    /// Construct a location from latitude/longitude and address parts.
    pub fn new(
        latitude: f64,
        longitude: f64,
        address: impl Into<String>,
        city: impl Into<String>,
        district: impl Into<String>,
    ) -> Self {
        Self {
            coord: Coord {
                x: longitude,
                y: latitude,
            },
            address: address.into(),
            city: city.into(),
            district: district.into(),
        }
    }
}

/// Great-circle distance between two coordinates in kilometres.
///
/// Uses the haversine formula over a spherical Earth of radius
/// [`EARTH_RADIUS_KM`]. Accurate to well under a percent for the city-scale
/// distances this engine works with.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tableside_core::haversine_km;
///
/// let taipei = Coord { x: 121.5654, y: 25.0330 };
/// let taichung = Coord { x: 120.6736, y: 24.1477 };
/// let d = haversine_km(taipei, taichung);
/// assert!(d > 125.0 && d < 140.0);
/// ```
#[must_use]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE_KM: f64 = 1e-9;

    fn taipei() -> Coord<f64> {
        Coord {
            x: 121.5654,
            y: 25.0330,
        }
    }

    fn taichung() -> Coord<f64> {
        Coord {
            x: 120.6736,
            y: 24.1477,
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert!(haversine_km(taipei(), taipei()).abs() < TOLERANCE_KM);
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = haversine_km(taipei(), taichung());
        let back = haversine_km(taichung(), taipei());
        assert!((forward - back).abs() < TOLERANCE_KM);
    }

    #[rstest]
    // Taipei 101 to Taichung railway station is roughly 131 km as the crow flies.
    #[case(taipei(), taichung(), 125.0, 140.0)]
    // One degree of latitude is about 111 km.
    #[case(
        Coord { x: 0.0, y: 0.0 },
        Coord { x: 0.0, y: 1.0 },
        110.0,
        112.5
    )]
    fn distance_lands_in_expected_band(
        #[case] a: Coord<f64>,
        #[case] b: Coord<f64>,
        #[case] low: f64,
        #[case] high: f64,
    ) {
        let d = haversine_km(a, b);
        assert!(d > low && d < high, "distance {d} outside [{low}, {high}]");
    }

    #[test]
    fn location_new_maps_latitude_to_y() {
        let location = Location::new(25.0, 121.0, "addr", "city", "district");
        assert_eq!(location.coord.y, 25.0);
        assert_eq!(location.coord.x, 121.0);
    }
}
