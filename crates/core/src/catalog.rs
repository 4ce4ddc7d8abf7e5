//! Built-in storm catalog
//!
//! Three western North Pacific typhoons at six-hourly resolution. Tracks are
//! validated when the catalog is built; lookups by name fail with
//! [`TrackError::UnknownTrack`] rather than panicking.

use crate::core_types::{IntensityCode, StormTrack, TrackSample};
use crate::error::{Result, TrackError};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

/// Raw table row: (lat, lng, pressure hPa, wind km/h, intensity code, timestamp)
type Row = (f64, f64, u16, u16, &'static str, &'static str);

/// Typhoon Mangkhut (2018)
const MANGKHUT: &[Row] = &[
    (14.5, 138.2, 1002, 65, "TD", "2018-09-07 00:00"),
    (15.2, 136.8, 998, 75, "TS", "2018-09-07 06:00"),
    (16.1, 135.3, 985, 95, "STS", "2018-09-07 12:00"),
    (17.0, 133.8, 970, 120, "TY", "2018-09-07 18:00"),
    (17.9, 132.3, 955, 140, "TY", "2018-09-08 00:00"),
    (18.8, 130.8, 940, 160, "STY", "2018-09-08 06:00"),
    (19.7, 129.3, 920, 185, "SuperTY", "2018-09-08 12:00"),
    (20.6, 127.8, 905, 205, "SuperTY", "2018-09-08 18:00"),
    (21.5, 126.3, 910, 195, "SuperTY", "2018-09-09 00:00"),
    (22.4, 124.8, 925, 180, "STY", "2018-09-09 06:00"),
];

/// Typhoon Haiyan (2013)
const HAIYAN: &[Row] = &[
    (6.5, 155.2, 1004, 55, "TD", "2013-11-04 00:00"),
    (7.2, 153.8, 996, 70, "TS", "2013-11-04 06:00"),
    (8.1, 152.3, 980, 100, "STS", "2013-11-04 12:00"),
    (9.0, 150.8, 960, 130, "TY", "2013-11-04 18:00"),
    (9.9, 149.3, 940, 155, "STY", "2013-11-05 00:00"),
    (10.8, 147.8, 920, 180, "SuperTY", "2013-11-05 06:00"),
    (11.7, 146.3, 895, 215, "SuperTY", "2013-11-05 12:00"),
    (12.6, 144.8, 890, 230, "SuperTY", "2013-11-05 18:00"),
    (13.5, 143.3, 895, 220, "SuperTY", "2013-11-06 00:00"),
    (14.4, 141.8, 910, 200, "SuperTY", "2013-11-06 06:00"),
];

/// Typhoon Yutu (2018)
const YUTU: &[Row] = &[
    (12.5, 147.2, 1005, 60, "TD", "2018-10-22 00:00"),
    (13.2, 145.8, 995, 75, "TS", "2018-10-22 06:00"),
    (14.1, 144.3, 980, 100, "STS", "2018-10-22 12:00"),
    (15.0, 142.8, 960, 125, "TY", "2018-10-22 18:00"),
    (15.9, 141.3, 940, 150, "STY", "2018-10-23 00:00"),
    (16.8, 139.8, 920, 175, "SuperTY", "2018-10-23 06:00"),
    (17.7, 138.3, 900, 195, "SuperTY", "2018-10-23 12:00"),
    (18.6, 136.8, 910, 185, "SuperTY", "2018-10-23 18:00"),
    (19.5, 135.3, 925, 170, "STY", "2018-10-24 00:00"),
    (20.4, 133.8, 940, 155, "STY", "2018-10-24 06:00"),
];

fn track_from_rows(name: &str, rows: &[Row]) -> Result<StormTrack> {
    let samples = rows
        .iter()
        .map(|&(lat, lng, pressure, wind, code, timestamp)| {
            let intensity = code.parse::<IntensityCode>()?;
            TrackSample::new(lat, lng, pressure, wind, intensity, timestamp)
        })
        .collect::<Result<Vec<_>>>()?;
    StormTrack::new(name, samples)
}

/// Name-indexed set of storm tracks, fixed after construction
#[derive(Debug, Clone)]
pub struct StormCatalog {
    tracks: FxHashMap<String, Arc<StormTrack>>,
    /// Insertion order, used for listings and numeric shortcuts
    order: Vec<String>,
}

impl StormCatalog {
    /// The three embedded storms: Mangkhut, Haiyan and Yutu.
    ///
    /// # Errors
    ///
    /// Propagates any validation error from the embedded tables.
    pub fn builtin() -> Result<Self> {
        Self::from_tracks([
            track_from_rows("Mangkhut", MANGKHUT)?,
            track_from_rows("Haiyan", HAIYAN)?,
            track_from_rows("Yutu", YUTU)?,
        ])
    }

    /// Build a catalog from already-validated tracks.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::DuplicateTrack`] if two tracks share a name.
    pub fn from_tracks(tracks: impl IntoIterator<Item = StormTrack>) -> Result<Self> {
        let mut catalog = Self {
            tracks: FxHashMap::default(),
            order: Vec::new(),
        };
        for track in tracks {
            let name = track.name().to_string();
            if catalog.tracks.contains_key(&name) {
                return Err(TrackError::DuplicateTrack { name });
            }
            debug!(storm = %name, samples = track.len(), "Loaded storm track");
            catalog.order.push(name.clone());
            catalog.tracks.insert(name, Arc::new(track));
        }
        Ok(catalog)
    }

    /// Look up a track by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::UnknownTrack`] if the name is not in the catalog.
    pub fn get(&self, name: &str) -> Result<&StormTrack> {
        self.tracks
            .get(name)
            .map(Arc::as_ref)
            .ok_or_else(|| TrackError::UnknownTrack {
                name: name.to_string(),
            })
    }

    /// Shared handle to a track, for holders that outlive a borrow of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::UnknownTrack`] if the name is not in the catalog.
    pub fn shared(&self, name: &str) -> Result<Arc<StormTrack>> {
        self.tracks
            .get(name)
            .cloned()
            .ok_or_else(|| TrackError::UnknownTrack {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tracks.contains_key(name)
    }

    /// Track names in load order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Tracks in load order
    pub fn tracks(&self) -> impl Iterator<Item = &StormTrack> {
        self.order
            .iter()
            .filter_map(|name| self.tracks.get(name).map(Arc::as_ref))
    }

    /// Name at position `index` in load order
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(String::as_str)
    }

    /// First track in load order, if any
    pub fn first(&self) -> Option<&StormTrack> {
        self.tracks().next()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
