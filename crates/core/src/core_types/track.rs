//! Track samples and storm tracks
//!
//! A [`StormTrack`] is an ordered, validated sequence of [`TrackSample`]s.
//! Validation happens once at construction so the rest of the crate can rely
//! on a track being non-empty and strictly chronological.

use crate::core_types::intensity::IntensityCode;
use crate::core_types::units::{Degrees, Hectopascals, Hours, KilometersPerHour};
use crate::error::{Result, TrackError};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Timestamp layout used by best-track tables
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Fraction of the track span added on each side of the map view
const MAP_MARGIN_FRACTION: f64 = 0.2;

/// Margin used when a track has no extent along an axis
const MIN_MAP_MARGIN_DEGREES: f64 = 1.0;

fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

/// A latitude/longitude pair in degrees (north and east positive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl GeoPoint {
    /// Create a point without range checks
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        }
    }
}

/// One timestamped position/intensity observation of a storm
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackSample {
    position: GeoPoint,
    pressure: Hectopascals,
    wind: KilometersPerHour,
    intensity: IntensityCode,
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: NaiveDateTime,
}

impl TrackSample {
    /// Build a sample from raw table values.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidTimestamp`] if `timestamp` is not
    /// `YYYY-MM-DD HH:MM`, or [`TrackError::InvalidPosition`] if the
    /// coordinates are not finite or out of range.
    pub fn new(
        latitude: f64,
        longitude: f64,
        pressure_hpa: u16,
        wind_kmh: u16,
        intensity: IntensityCode,
        timestamp: &str,
    ) -> Result<Self> {
        let valid_lat = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let valid_lng = longitude.is_finite() && (-180.0..=360.0).contains(&longitude);
        if !valid_lat || !valid_lng {
            return Err(TrackError::InvalidPosition {
                latitude,
                longitude,
            });
        }

        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(
            |source| TrackError::InvalidTimestamp {
                value: timestamp.to_string(),
                source,
            },
        )?;

        Ok(Self {
            position: GeoPoint::new(latitude, longitude),
            pressure: Hectopascals::new(pressure_hpa),
            wind: KilometersPerHour::new(f64::from(wind_kmh)),
            intensity,
            timestamp,
        })
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn latitude(&self) -> Degrees {
        self.position.latitude
    }

    pub fn longitude(&self) -> Degrees {
        self.position.longitude
    }

    pub fn pressure(&self) -> Hectopascals {
        self.pressure
    }

    pub fn wind(&self) -> KilometersPerHour {
        self.wind
    }

    pub fn intensity(&self) -> IntensityCode {
        self.intensity
    }

    /// Timestamp rendered back in table layout
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Elapsed time since `earlier`, or `None` if `earlier` is not before this sample
    pub fn hours_since(&self, earlier: &TrackSample) -> Option<Hours> {
        let minutes = (self.timestamp - earlier.timestamp).num_minutes();
        (minutes > 0).then(|| Hours::new(minutes as f64 / 60.0))
    }
}

/// Padded latitude/longitude window that contains a whole track
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

/// A named storm and its chronological samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StormTrack {
    name: String,
    samples: Vec<TrackSample>,
}

impl StormTrack {
    /// Validate and build a track.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EmptyTrack`] for an empty sample list and
    /// [`TrackError::NonMonotonicTimestamps`] if any sample is not strictly
    /// later than the one before it.
    pub fn new(name: impl Into<String>, samples: Vec<TrackSample>) -> Result<Self> {
        let name = name.into();
        if samples.is_empty() {
            return Err(TrackError::EmptyTrack { name });
        }

        if let Some(index) = samples
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(TrackError::NonMonotonicTimestamps {
                name,
                index: index + 1,
            });
        }

        Ok(Self { name, samples })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> &[TrackSample] {
        &self.samples
    }

    /// Number of samples (always at least one)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample(&self, index: usize) -> Option<&TrackSample> {
        self.samples.get(index)
    }

    /// Index of the last sample
    pub fn last_index(&self) -> usize {
        self.samples.len() - 1
    }

    /// Strongest classification reached
    pub fn peak_intensity(&self) -> IntensityCode {
        self.samples
            .iter()
            .map(TrackSample::intensity)
            .max()
            .unwrap_or(IntensityCode::TD)
    }

    /// Lowest central pressure reached
    pub fn min_pressure(&self) -> Hectopascals {
        self.samples
            .iter()
            .map(TrackSample::pressure)
            .min()
            .unwrap_or(Hectopascals::STANDARD_ATMOSPHERE)
    }

    /// Highest sustained wind reached
    pub fn max_wind(&self) -> KilometersPerHour {
        self.samples
            .iter()
            .map(TrackSample::wind)
            .max()
            .unwrap_or_default()
    }

    /// Map window around the whole track, padded by 20% of its span on each axis
    pub fn map_bounds(&self) -> MapBounds {
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
        for sample in &self.samples {
            min_lat = min_lat.min(*sample.latitude());
            max_lat = max_lat.max(*sample.latitude());
            min_lng = min_lng.min(*sample.longitude());
            max_lng = max_lng.max(*sample.longitude());
        }

        let margin = |span: f64| {
            let m = span * MAP_MARGIN_FRACTION;
            if m > 0.0 {
                m
            } else {
                MIN_MAP_MARGIN_DEGREES
            }
        };
        let lat_margin = margin(max_lat - min_lat);
        let lng_margin = margin(max_lng - min_lng);

        MapBounds {
            min_latitude: min_lat - lat_margin,
            max_latitude: max_lat + lat_margin,
            min_longitude: min_lng - lng_margin,
            max_longitude: max_lng + lng_margin,
        }
    }
}
