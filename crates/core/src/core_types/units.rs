//! Semantic unit types for track quantities
//!
//! Newtype wrappers keep positions, distances, speeds and pressures from being
//! mixed up as bare floats.
//!
//! # Design Philosophy
//! - All floating types use f64; track coordinates come straight from best-track tables
//! - `Deref` to the raw value for formatting and comparisons
//! - Total ordering via `Ord` where tracks take a maximum or minimum
//! - Validated constructors where a sign matters
//!
//! # Usage
//! ```
//! use typhoon_track_core::core_types::units::{Hours, Kilometers, KilometersPerHour};
//!
//! let leg = Kilometers::new(180.0);
//! let speed: KilometersPerHour = leg / Hours::new(6.0);
//! assert!((*speed - 30.0).abs() < 1e-9);
//! ```

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Sub};

// ============================================================================
// ANGLE TYPES
// ============================================================================

/// Angle in degrees (also used for latitude and longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Div<f64> for Degrees {
    type Output = Degrees;
    fn div(self, rhs: f64) -> Degrees {
        Degrees(self.0 / rhs)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Radians(f64);

impl Radians {
    /// Compute cosine
    #[inline]
    #[must_use]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

// ============================================================================
// DISTANCE / TIME / VELOCITY TYPES
// ============================================================================

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

impl Deref for Kilometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilometers {
    /// Create a new Kilometers value.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Kilometers::new: negative distance is invalid");
        Kilometers(value)
    }
}

// Cross-type operation: kilometers / hours = km/h
impl Div<Hours> for Kilometers {
    type Output = KilometersPerHour;
    fn div(self, rhs: Hours) -> KilometersPerHour {
        KilometersPerHour(self.0 / rhs.0)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}

/// Time duration in hours
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Hours(f64);

impl Hours {
    /// Create a new Hours value.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Hours::new: negative duration is invalid");
        Hours(value)
    }
}

/// Velocity in kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

impl Eq for KilometersPerHour {}

impl PartialOrd for KilometersPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilometersPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for KilometersPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilometersPerHour {
    /// Create a new `KilometersPerHour` value.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilometersPerHour(value)
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} km/h", self.0)
    }
}

// ============================================================================
// PRESSURE TYPES
// ============================================================================

/// Central pressure in hectopascals, reported as whole hPa
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[repr(transparent)]
pub struct Hectopascals(u16);

impl Deref for Hectopascals {
    type Target = u16;
    #[inline]
    fn deref(&self) -> &u16 {
        &self.0
    }
}

impl Hectopascals {
    /// Standard sea-level pressure
    pub const STANDARD_ATMOSPHERE: Hectopascals = Hectopascals(1013);

    /// Create a new pressure value
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Hectopascals(value)
    }
}

impl fmt::Display for Hectopascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hPa", self.0)
    }
}
