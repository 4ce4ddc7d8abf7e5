//! Movement direction and distance between consecutive track samples
//!
//! Both helpers work on a flat latitude/longitude plane. The distance is an
//! equirectangular approximation (111 km per degree, longitude scaled by the
//! cosine of the mean latitude), not a great-circle distance. Over six-hourly
//! legs of a few hundred kilometres the error is well below display precision.

use crate::core_types::{GeoPoint, Kilometers, KilometersPerHour, TrackSample};
use serde::Serialize;
use std::fmt;

/// Kilometres per degree of latitude
pub const KM_PER_DEGREE: f64 = 111.0;

/// Longitude changes smaller than this are treated as due north/south
pub const MERIDIONAL_EPSILON_DEGREES: f64 = 0.001;

/// Compass sector of a movement vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bearing {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    /// No sector matched; only reachable with non-finite input
    Unknown,
}

impl Bearing {
    pub fn label(self) -> &'static str {
        match self {
            Bearing::North => "North",
            Bearing::Northeast => "Northeast",
            Bearing::East => "East",
            Bearing::Southeast => "Southeast",
            Bearing::South => "South",
            Bearing::Southwest => "Southwest",
            Bearing::West => "West",
            Bearing::Northwest => "Northwest",
            Bearing::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Bucket the direction of travel from `prev` to `curr` into one of eight sectors.
///
/// The angle is `atan2(Δlat, Δlng)` in degrees, so 0° is east and 90° is north.
/// Each sector is a 45° window, lower edge inclusive and upper edge exclusive;
/// West wraps across ±180° (`angle >= 157.5 || angle < -157.5`). When
/// `|Δlng| < 0.001°` the result is North for `Δlat > 0` and South otherwise.
pub fn compute_bearing(prev: GeoPoint, curr: GeoPoint) -> Bearing {
    let d_lat = *(curr.latitude - prev.latitude);
    let d_lng = *(curr.longitude - prev.longitude);

    if d_lng.abs() < MERIDIONAL_EPSILON_DEGREES {
        return if d_lat > 0.0 {
            Bearing::North
        } else {
            Bearing::South
        };
    }

    bearing_from_angle(d_lat.atan2(d_lng).to_degrees())
}

/// Sector lookup for an angle in degrees in `[-180, 180]`
#[allow(clippy::manual_range_contains)] // A negated range would send NaN to West
pub fn bearing_from_angle(angle: f64) -> Bearing {
    if (-22.5..22.5).contains(&angle) {
        Bearing::East
    } else if (22.5..67.5).contains(&angle) {
        Bearing::Northeast
    } else if (67.5..112.5).contains(&angle) {
        Bearing::North
    } else if (112.5..157.5).contains(&angle) {
        Bearing::Northwest
    } else if angle >= 157.5 || angle < -157.5 {
        Bearing::West
    } else if (-157.5..-112.5).contains(&angle) {
        Bearing::Southwest
    } else if (-112.5..-67.5).contains(&angle) {
        Bearing::South
    } else if (-67.5..-22.5).contains(&angle) {
        Bearing::Southeast
    } else {
        Bearing::Unknown
    }
}

/// Equirectangular distance in kilometres between two points.
///
/// `dLat * 111` and `dLng * 111 * cos(mean latitude)`, combined as a Euclidean norm.
pub fn approx_distance_km(prev: GeoPoint, curr: GeoPoint) -> f64 {
    let mean_lat = (prev.latitude + curr.latitude) / 2.0;
    let d_lat_km = *(curr.latitude - prev.latitude) * KM_PER_DEGREE;
    let d_lng_km =
        *(curr.longitude - prev.longitude) * KM_PER_DEGREE * mean_lat.to_radians().cos();
    d_lat_km.hypot(d_lng_km)
}

/// Movement between two consecutive samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Movement {
    pub bearing: Bearing,
    pub distance: Kilometers,
    /// Distance over the time between samples; `None` if they share a timestamp
    pub speed: Option<KilometersPerHour>,
}

impl Movement {
    /// Movement from `prev` to `curr`. Samples come from validated tracks, so
    /// positions are finite and `curr` is later than `prev`.
    pub fn between(prev: &TrackSample, curr: &TrackSample) -> Self {
        let distance = Kilometers::new(approx_distance_km(prev.position(), curr.position()));
        Self {
            bearing: compute_bearing(prev.position(), curr.position()),
            distance,
            speed: curr.hours_since(prev).map(|hours| distance / hours),
        }
    }
}
