//! Core types and utilities

pub mod intensity;
pub mod track;
pub mod units;

pub use intensity::{IntensityCode, UnknownIntensityCode};
pub use track::{GeoPoint, MapBounds, StormTrack, TrackSample, TIMESTAMP_FORMAT};
pub use units::*;
