//! Renderable frame snapshots
//!
//! A [`FrameState`] is everything a render surface needs to draw one frame:
//! the trail so far, the current sample, movement since the previous sample,
//! progress, the full marker set, map bounds and the pressure/wind profiles.
//! It is rebuilt from scratch on every frame; tracks are a handful of samples
//! so nothing is cached.

use crate::core_types::{MapBounds, StormTrack, TrackSample};
use crate::geo::Movement;
use serde::Serialize;

/// Percentage of the track played at `cursor`.
///
/// `cursor / (total - 1) * 100`; tracks with fewer than two samples report 0.
pub fn progress_percent(cursor: usize, total_samples: usize) -> f64 {
    if total_samples <= 1 {
        return 0.0;
    }
    cursor as f64 / (total_samples - 1) as f64 * 100.0
}

/// Pressure and wind series up to and including the cursor, as `(index, value)` points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub pressure: Vec<(f64, f64)>,
    pub wind: Vec<(f64, f64)>,
}

impl Profile {
    fn from_samples(samples: &[TrackSample]) -> Self {
        let pressure = samples
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, f64::from(*s.pressure())))
            .collect();
        let wind = samples
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, *s.wind()))
            .collect();
        Self { pressure, wind }
    }
}

/// Snapshot of one animation frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameState {
    pub storm: String,
    pub cursor: usize,
    pub total_samples: usize,
    /// Samples `0..=cursor`, the trajectory drawn so far
    pub samples_up_to_cursor: Vec<TrackSample>,
    pub current_sample: TrackSample,
    /// Movement from the previous sample; `None` on the first frame
    pub movement: Option<Movement>,
    pub progress_percent: f64,
    /// Every sample of the track, for intensity-colored markers
    pub markers: Vec<TrackSample>,
    pub bounds: MapBounds,
    pub profile: Profile,
}

impl FrameState {
    /// Build the frame for `cursor` on `track`. Cursors past the end are clamped
    /// to the last sample.
    pub fn build(track: &StormTrack, cursor: usize) -> Self {
        let samples = track.samples();
        let cursor = cursor.min(track.last_index());
        let current_sample = samples[cursor];
        let trail = &samples[..=cursor];

        let movement = cursor
            .checked_sub(1)
            .map(|prev| Movement::between(&samples[prev], &current_sample));

        Self {
            storm: track.name().to_string(),
            cursor,
            total_samples: samples.len(),
            samples_up_to_cursor: trail.to_vec(),
            current_sample,
            movement,
            progress_percent: progress_percent(cursor, samples.len()),
            markers: samples.to_vec(),
            bounds: track.map_bounds(),
            profile: Profile::from_samples(trail),
        }
    }

    /// Information panel text, one entry per line
    pub fn info_lines(&self) -> Vec<String> {
        let s = &self.current_sample;
        let mut lines = vec![
            format!("Name: {}", self.storm),
            format!("Time: {}", s.timestamp_label()),
            format!("Intensity: {}", s.intensity().full_name()),
            format!("Pressure: {}", s.pressure()),
            format!("Wind Speed: {}", s.wind()),
            format!(
                "Position: {:.1}°N, {:.1}°E",
                *s.latitude(),
                *s.longitude()
            ),
        ];
        if let Some(movement) = &self.movement {
            let speed = movement
                .speed
                .map_or_else(|| "-".to_string(), |v| format!("{:.0}", *v));
            lines.push(format!("Movement: {} km/h, {}", speed, movement.bearing));
        }
        lines
    }

    /// Progress label as shown under the progress bar
    pub fn progress_label(&self) -> String {
        format!("{:.1}%", self.progress_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StormCatalog;
    use crate::geo::Bearing;

    #[test]
    fn test_progress_guards_short_tracks() {
        assert_eq!(progress_percent(0, 0), 0.0);
        assert_eq!(progress_percent(0, 1), 0.0);
        assert_eq!(progress_percent(0, 10), 0.0);
        assert_eq!(progress_percent(9, 10), 100.0);
    }

    #[test]
    fn test_first_frame_has_no_movement() {
        let catalog = StormCatalog::builtin().unwrap();
        let frame = FrameState::build(catalog.get("Yutu").unwrap(), 0);
        assert!(frame.movement.is_none());
        assert_eq!(frame.samples_up_to_cursor.len(), 1);
        assert_eq!(frame.markers.len(), 10);
        assert_eq!(frame.info_lines().len(), 6);
    }

    #[test]
    fn test_later_frame_reports_movement() {
        let catalog = StormCatalog::builtin().unwrap();
        let frame = FrameState::build(catalog.get("Mangkhut").unwrap(), 4);
        let movement = frame.movement.unwrap();
        assert_eq!(movement.bearing, Bearing::Northwest);
        assert_eq!(frame.samples_up_to_cursor.len(), 5);
        assert_eq!(frame.profile.pressure.len(), 5);
        assert_eq!(frame.profile.wind[4], (4.0, 140.0));
        assert!(frame.info_lines()[6].starts_with("Movement: "));
        assert!(frame.info_lines()[6].ends_with("Northwest"));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let catalog = StormCatalog::builtin().unwrap();
        let frame = FrameState::build(catalog.get("Haiyan").unwrap(), 42);
        assert_eq!(frame.cursor, 9);
        assert_eq!(frame.progress_label(), "100.0%");
    }

    #[test]
    fn test_info_panel_text() {
        let catalog = StormCatalog::builtin().unwrap();
        let frame = FrameState::build(catalog.get("Mangkhut").unwrap(), 0);
        assert_eq!(
            frame.info_lines(),
            vec![
                "Name: Mangkhut",
                "Time: 2018-09-07 00:00",
                "Intensity: Tropical Depression",
                "Pressure: 1002 hPa",
                "Wind Speed: 65 km/h",
                "Position: 14.5°N, 138.2°E",
            ]
        );
    }
}
