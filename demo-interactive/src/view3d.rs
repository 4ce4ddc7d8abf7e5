//! Orthographic projection for the rotating trajectory view
//!
//! Samples are placed in a local frame centred on the map window: x is
//! longitude, y is latitude (both in degrees) and z is wind speed scaled so
//! the strongest sample rises half the larger map span. The scene is yawed
//! about z, tilted about x, then viewed along +y.

use nalgebra::{Point3, Rotation3, Vector3};
use typhoon_track_core::{MapBounds, TrackSample};

/// Default camera tilt above the ground plane, in radians
pub const DEFAULT_PITCH: f64 = 0.6;

/// A sample projected to screen space, both on the ground and lifted by wind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedSample {
    pub ground: (f64, f64),
    pub lifted: (f64, f64),
}

pub struct Projector {
    rotation: Rotation3<f64>,
    center: Vector3<f64>,
    height_scale: f64,
    extent: f64,
}

impl Projector {
    /// Camera for `bounds`; `max_wind` is the strongest wind on the track in km/h
    pub fn new(bounds: &MapBounds, max_wind: f64, yaw: f64, pitch: f64) -> Self {
        let half_lng = (bounds.max_longitude - bounds.min_longitude) / 2.0;
        let half_lat = (bounds.max_latitude - bounds.min_latitude) / 2.0;
        let max_height = half_lng.max(half_lat);
        let height_scale = if max_wind > 0.0 {
            max_height / max_wind
        } else {
            0.0
        };

        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), pitch)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), yaw);

        Self {
            rotation,
            center: Vector3::new(
                bounds.min_longitude + half_lng,
                bounds.min_latitude + half_lat,
                0.0,
            ),
            height_scale,
            // Radius of the bounding box, so the scene never leaves the canvas while rotating
            extent: Vector3::new(half_lng, half_lat, max_height).norm(),
        }
    }

    /// Screen coordinates of a world point given as (longitude, latitude, wind)
    pub fn project(&self, longitude: f64, latitude: f64, wind: f64) -> (f64, f64) {
        let world = Point3::new(longitude, latitude, wind * self.height_scale) - self.center;
        let view = self.rotation * world;
        (view.x, view.z)
    }

    pub fn project_sample(&self, sample: &TrackSample) -> ProjectedSample {
        let lng = *sample.longitude();
        let lat = *sample.latitude();
        ProjectedSample {
            ground: self.project(lng, lat, 0.0),
            lifted: self.project(lng, lat, *sample.wind()),
        }
    }

    /// Symmetric canvas bounds covering every rotation, with a small margin
    pub fn canvas_bounds(&self) -> [f64; 2] {
        let half = self.extent * 1.05;
        [-half, half]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bounds() -> MapBounds {
        MapBounds {
            min_latitude: 10.0,
            max_latitude: 20.0,
            min_longitude: 120.0,
            max_longitude: 140.0,
        }
    }

    #[test]
    fn test_side_view_without_rotation() {
        let projector = Projector::new(&bounds(), 200.0, 0.0, 0.0);
        let (x, y) = projector.project(135.0, 15.0, 0.0);
        assert_relative_eq!(x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.0, epsilon = 1e-12);

        // Strongest wind rises half the longitude span
        let (_, top) = projector.project(130.0, 15.0, 200.0);
        assert_relative_eq!(top, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_yaw_turns_east_into_depth() {
        let projector = Projector::new(&bounds(), 200.0, std::f64::consts::FRAC_PI_2, 0.0);
        let (x, y) = projector.project(135.0, 15.0, 0.0);
        assert_relative_eq!(x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pitch_lifts_far_points() {
        let projector = Projector::new(&bounds(), 200.0, 0.0, DEFAULT_PITCH);
        let (_, north) = projector.project(130.0, 20.0, 0.0);
        let (_, south) = projector.project(130.0, 10.0, 0.0);
        assert!(north > south);
    }

    #[test]
    fn test_projection_stays_inside_canvas() {
        let [lo, hi] = Projector::new(&bounds(), 200.0, 0.0, DEFAULT_PITCH).canvas_bounds();
        for step in 0..32 {
            let yaw = f64::from(step) * 0.2;
            let projector = Projector::new(&bounds(), 200.0, yaw, DEFAULT_PITCH);
            for (lng, lat) in [(120.0, 10.0), (140.0, 20.0), (120.0, 20.0), (140.0, 10.0)] {
                let (x, y) = projector.project(lng, lat, 200.0);
                assert!((lo..=hi).contains(&x) && (lo..=hi).contains(&y));
            }
        }
    }

    #[test]
    fn test_calm_track_stays_flat() {
        let projector = Projector::new(&bounds(), 0.0, 0.3, 0.0);
        let (_, y) = projector.project(130.0, 15.0, 0.0);
        assert_relative_eq!(y, 0.0, epsilon = 1e-12);
    }
}
