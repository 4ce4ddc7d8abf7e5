//! Error types for catalog loading and track selection
//!
//! Every variant is a configuration-shape error: it is reported once at the
//! boundary where a track is loaded or selected and never retried.

use crate::core_types::UnknownIntensityCode;
use thiserror::Error;

/// Errors raised by the storm catalog and the track animator
#[derive(Debug, Error)]
pub enum TrackError {
    /// A track name was requested that the catalog does not contain
    #[error("unknown track '{name}'")]
    UnknownTrack { name: String },

    /// A track was supplied with no samples
    #[error("track '{name}' has no samples")]
    EmptyTrack { name: String },

    /// Sample `index` is not strictly later than the sample before it
    #[error("track '{name}': sample {index} is not later than the previous sample")]
    NonMonotonicTimestamps { name: String, index: usize },

    /// A timestamp did not match `YYYY-MM-DD HH:MM`
    #[error("invalid timestamp '{value}' (expected YYYY-MM-DD HH:MM)")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Latitude/longitude outside the valid range or not finite
    #[error("invalid position {latitude}, {longitude}")]
    InvalidPosition { latitude: f64, longitude: f64 },

    /// An intensity column held a code outside the six-level scale
    #[error("invalid intensity: {0}")]
    UnknownIntensity(#[from] UnknownIntensityCode),

    /// Two catalog entries share a name
    #[error("duplicate track '{name}'")]
    DuplicateTrack { name: String },
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, TrackError>;
