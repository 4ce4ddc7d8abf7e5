//! Bearing buckets and equirectangular distance on real and synthetic legs

use approx::assert_relative_eq;
use typhoon_track_core::geo::{bearing_from_angle, KM_PER_DEGREE};
use typhoon_track_core::{
    approx_distance_km, compute_bearing, Bearing, FrameState, GeoPoint, StormCatalog,
};

#[test]
fn test_due_east_and_due_north() {
    let origin = GeoPoint::new(15.0, 135.0);
    assert_eq!(compute_bearing(origin, GeoPoint::new(15.0, 136.0)), Bearing::East);
    assert_eq!(compute_bearing(origin, GeoPoint::new(16.0, 135.0)), Bearing::North);
    assert_eq!(compute_bearing(origin, GeoPoint::new(14.0, 135.0)), Bearing::South);
    assert_eq!(compute_bearing(origin, GeoPoint::new(15.0, 134.0)), Bearing::West);
}

#[test]
fn test_all_eight_sectors() {
    let origin = GeoPoint::new(0.0, 0.0);
    let cases = [
        ((1.0, 1.0), Bearing::Northeast),
        ((1.0, -1.0), Bearing::Northwest),
        ((-1.0, -1.0), Bearing::Southwest),
        ((-1.0, 1.0), Bearing::Southeast),
        ((0.0, 1.0), Bearing::East),
        ((0.0, -1.0), Bearing::West),
        ((1.0, 0.1), Bearing::North),
        ((-1.0, 0.1), Bearing::South),
    ];
    for ((d_lat, d_lng), expected) in cases {
        assert_eq!(
            compute_bearing(origin, GeoPoint::new(d_lat, d_lng)),
            expected,
            "Δlat={d_lat}, Δlng={d_lng}"
        );
    }
}

#[test]
fn test_bearing_ignores_uniform_scaling() {
    let origin = GeoPoint::new(10.0, 130.0);
    let deltas = [
        (0.7, -1.4),
        (0.9, -1.5),
        (-0.3, 0.8),
        (1.2, 0.4),
        (-2.0, -0.05),
        (0.0, 0.5),
        (0.41, 1.0),
    ];
    for (d_lat, d_lng) in deltas {
        let base = compute_bearing(origin, GeoPoint::new(10.0 + d_lat, 130.0 + d_lng));
        for scale in [1.5, 2.0, 3.0, 10.0] {
            let scaled = compute_bearing(
                origin,
                GeoPoint::new(10.0 + d_lat * scale, 130.0 + d_lng * scale),
            );
            assert_eq!(base, scaled, "Δ=({d_lat}, {d_lng}) scaled by {scale}");
        }
    }
}

#[test]
fn test_unknown_only_for_non_finite_input() {
    let origin = GeoPoint::new(10.0, 130.0);
    assert_eq!(
        compute_bearing(origin, GeoPoint::new(f64::NAN, 131.0)),
        Bearing::Unknown
    );

    // Every finite angle on a fine sweep lands in a named sector
    let mut angle = -180.0;
    while angle <= 180.0 {
        assert_ne!(bearing_from_angle(angle), Bearing::Unknown, "angle {angle}");
        angle += 0.25;
    }
}

#[test]
fn test_stationary_sample_reports_south() {
    let p = GeoPoint::new(18.0, 130.0);
    assert_eq!(compute_bearing(p, p), Bearing::South);
}

#[test]
fn test_distance_matches_equirectangular_formula() {
    let prev = GeoPoint::new(14.5, 138.2);
    let curr = GeoPoint::new(15.2, 136.8);

    let d = approx_distance_km(prev, curr);

    let mean_lat = ((14.5_f64 + 15.2) / 2.0).to_radians();
    let d_lat = (15.2 - 14.5) * KM_PER_DEGREE;
    let d_lng = (136.8 - 138.2) * KM_PER_DEGREE * mean_lat.cos();
    let expected = (d_lat * d_lat + d_lng * d_lng).sqrt();

    assert!(d > 0.0);
    assert_relative_eq!(d, expected, max_relative = 1e-12);
}

#[test]
fn test_distance_is_symmetric_and_zero_for_same_point() {
    let a = GeoPoint::new(9.9, 149.3);
    let b = GeoPoint::new(10.8, 147.8);
    assert_relative_eq!(approx_distance_km(a, b), approx_distance_km(b, a));
    assert_eq!(approx_distance_km(a, a), 0.0);
}

#[test]
fn test_second_mangkhut_frame_speed_over_six_hours() {
    let catalog = StormCatalog::builtin().unwrap();
    let track = catalog.get("Mangkhut").unwrap();
    let frame = FrameState::build(track, 1);
    let movement = frame.movement.expect("second frame has movement");

    let distance = approx_distance_km(
        track.samples()[0].position(),
        track.samples()[1].position(),
    );
    assert_relative_eq!(*movement.distance, distance);
    assert_relative_eq!(*movement.speed.unwrap(), distance / 6.0, max_relative = 1e-12);
    assert_eq!(movement.bearing, Bearing::Northwest);
}

#[test]
fn test_builtin_tracks_move_northwest() {
    let catalog = StormCatalog::builtin().unwrap();
    for track in catalog.tracks() {
        for cursor in 1..track.len() {
            let frame = FrameState::build(track, cursor);
            let movement = frame.movement.unwrap();
            assert_eq!(
                movement.bearing,
                Bearing::Northwest,
                "{} at {}",
                track.name(),
                cursor
            );
            assert!(*movement.speed.unwrap() > 20.0);
        }
    }
}
