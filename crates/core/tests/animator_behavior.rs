//! Integration tests for the looping frame cursor and the play/pause/reset/select actions

use typhoon_track_core::{
    progress_percent, AnimatorConfig, PlaybackState, TrackAnimator, TrackError,
};

fn animator_on(track: &str) -> TrackAnimator {
    let config = AnimatorConfig {
        initial_track: track.to_string(),
        ..AnimatorConfig::default()
    };
    TrackAnimator::with_builtin_catalog(&config).unwrap()
}

#[test]
fn test_advance_wraps_from_every_cursor() {
    let mut anim = animator_on("Mangkhut");
    let len = anim.active_track().len();

    for start in 0..len {
        anim.reset();
        for _ in 0..start {
            anim.advance_frame();
        }
        assert_eq!(anim.state().cursor(), start);

        let frame = anim.advance_frame();
        assert_eq!(frame.cursor, (start + 1) % len, "advance from cursor {start}");
        assert_eq!(anim.state().cursor(), frame.cursor);
    }
}

#[test]
fn test_haiyan_ten_ticks_loop_back_to_start() {
    let mut anim = animator_on("Haiyan");
    assert_eq!(anim.active_track().len(), 10);
    anim.toggle_play();

    let cursors: Vec<usize> = (0..10)
        .map(|_| anim.on_tick().expect("animator is playing").cursor)
        .collect();
    assert_eq!(cursors, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
    assert_eq!(anim.playback(), PlaybackState::Playing);
}

#[test]
fn test_select_then_reset_matches_initial_state() {
    let initial = animator_on("Mangkhut");
    let initial_state = initial.state().clone();

    let mut anim = animator_on("Yutu");
    anim.toggle_play();
    anim.advance_frame();
    anim.advance_frame();
    anim.select_track("Mangkhut").unwrap();
    anim.reset();

    assert_eq!(anim.state().cursor(), 0);
    assert!(!anim.state().is_playing());
    assert_eq!(anim.state(), &initial_state);
}

#[test]
fn test_unknown_selection_leaves_state_untouched() {
    let mut anim = animator_on("Haiyan");
    anim.toggle_play();
    anim.advance_frame();
    anim.advance_frame();
    anim.advance_frame();
    let before = anim.state().clone();

    let err = anim.select_track("Atlantis").unwrap_err();
    assert!(matches!(err, TrackError::UnknownTrack { ref name } if name == "Atlantis"));
    assert_eq!(err.to_string(), "unknown track 'Atlantis'");

    assert_eq!(anim.state(), &before);
    assert_eq!(anim.active_track().name(), "Haiyan");
    assert_eq!(anim.state().cursor(), 3);
    assert!(anim.state().is_playing());
}

#[test]
fn test_frame_is_pure_function_of_track_and_cursor() {
    let mut a = animator_on("Yutu");
    let mut b = animator_on("Yutu");
    for _ in 0..4 {
        a.advance_frame();
    }
    // Reach the same cursor by a different route: full loop plus four
    for _ in 0..14 {
        b.advance_frame();
    }
    assert_eq!(a.current_frame(), b.current_frame());
}

#[test]
fn test_progress_endpoints() {
    for n in 2..=12 {
        assert_eq!(progress_percent(0, n), 0.0);
        assert!((progress_percent(n - 1, n) - 100.0).abs() < 1e-12);
    }
    assert_eq!(progress_percent(0, 1), 0.0);
}

#[test]
fn test_frame_progress_tracks_cursor() {
    let mut anim = animator_on("Mangkhut");
    assert_eq!(anim.current_frame().progress_percent, 0.0);
    let mut last = anim.current_frame();
    for _ in 0..9 {
        last = anim.advance_frame();
    }
    assert_eq!(last.cursor, 9);
    assert!((last.progress_percent - 100.0).abs() < 1e-12);
    assert_eq!(last.progress_label(), "100.0%");
}

#[test]
fn test_trail_grows_with_cursor() {
    let mut anim = animator_on("Haiyan");
    for expected in 2..=10 {
        let frame = anim.advance_frame();
        assert_eq!(frame.samples_up_to_cursor.len(), expected);
        assert_eq!(frame.samples_up_to_cursor.last(), Some(&frame.current_sample));
    }
    // Wrapped: only the first sample is drawn
    let frame = anim.advance_frame();
    assert_eq!(frame.samples_up_to_cursor.len(), 1);
    assert!(frame.movement.is_none());
}

#[test]
fn test_frame_json_shape() {
    let mut anim = animator_on("Mangkhut");
    let frame = anim.advance_frame();
    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["storm"], "Mangkhut");
    assert_eq!(json["cursor"], 1);
    assert_eq!(json["current_sample"]["intensity"], "TS");
    assert_eq!(json["current_sample"]["timestamp"], "2018-09-07 06:00");
    assert_eq!(json["movement"]["bearing"], "Northwest");
}
