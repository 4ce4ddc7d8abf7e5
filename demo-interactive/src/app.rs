//! Application state for the interactive viewer
//!
//! Owns the [`TrackAnimator`] and the bits of view state that only matter to
//! the terminal front-end: current view, UI tick counter (drives the pulsing
//! marker and the 3D rotation) and a one-line status message.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tracing::debug;
use typhoon_track_core::{FrameState, TrackAnimator};

/// Rotation of the 3D view per UI tick, in radians
const YAW_PER_UI_TICK: f64 = 0.02;

/// Phase advance of the pulsing marker per UI tick, in radians
const PULSE_PER_UI_TICK: f64 = 0.3;

/// Which visualization fills the left side of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ViewMode {
    /// Track map with trail and intensity markers
    #[default]
    #[value(name = "2d")]
    Map2D,
    /// Rotating 3D trajectory with pressure and wind profiles
    #[value(name = "3d")]
    Trajectory3D,
}

impl ViewMode {
    fn toggled(self) -> Self {
        match self {
            ViewMode::Map2D => ViewMode::Trajectory3D,
            ViewMode::Trajectory3D => ViewMode::Map2D,
        }
    }
}

pub struct App {
    animator: TrackAnimator,
    frame: FrameState,
    view: ViewMode,
    ui_ticks: u64,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(animator: TrackAnimator, view: ViewMode) -> Self {
        let frame = animator.current_frame();
        Self {
            animator,
            frame,
            view,
            ui_ticks: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Map a key press to an animator action
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => {
                let label = if self.animator.toggle_play() {
                    "Playing"
                } else {
                    "Paused"
                };
                self.status = Some(label.to_string());
            }
            KeyCode::Char('r' | 'R') => {
                self.frame = self.animator.reset();
                self.status = Some("Reset to first sample".to_string());
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match self.animator.catalog().name_at(index).map(str::to_string) {
                    Some(name) => self.select(&name),
                    None => self.status = Some(format!("No storm bound to key {c}")),
                }
            }
            KeyCode::Char('m') => self.select("Mangkhut"),
            KeyCode::Char('h') => self.select("Haiyan"),
            KeyCode::Char('y') => self.select("Yutu"),
            KeyCode::Char('+' | '=') => {
                self.animator.set_speed(self.animator.speed().faster());
                self.status = Some(format!("Speed: {}", self.animator.speed()));
            }
            KeyCode::Char('-' | '_') => {
                self.animator.set_speed(self.animator.speed().slower());
                self.status = Some(format!("Speed: {}", self.animator.speed()));
            }
            KeyCode::Char('v') => {
                self.view = self.view.toggled();
                debug!(view = ?self.view, "Switched view");
            }
            _ => {}
        }
    }

    fn select(&mut self, name: &str) {
        match self.animator.select_track(name) {
            Ok(frame) => {
                self.frame = frame;
                self.status = Some(format!("Showing {name}"));
            }
            // The animator keeps the previous track; just report the name
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Animation tick from the tick source
    pub fn on_tick(&mut self) {
        if let Some(frame) = self.animator.on_tick() {
            self.frame = frame;
        }
    }

    /// Redraw tick; advances the pulse and the 3D rotation
    pub fn on_ui_tick(&mut self) {
        self.ui_ticks = self.ui_ticks.wrapping_add(1);
    }

    pub fn tick_interval(&self) -> Duration {
        self.animator.speed().tick_interval()
    }

    pub fn frame(&self) -> &FrameState {
        &self.frame
    }

    pub fn animator(&self) -> &TrackAnimator {
        &self.animator
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Pulse scale in `[0.5, 1.5]`
    pub fn pulse(&self) -> f64 {
        1.0 + 0.5 * (self.ui_ticks as f64 * PULSE_PER_UI_TICK).sin()
    }

    /// Current yaw of the 3D view in radians
    pub fn yaw(&self) -> f64 {
        (self.ui_ticks as f64 * YAW_PER_UI_TICK) % std::f64::consts::TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typhoon_track_core::{AnimatorConfig, PlaybackSpeed};

    fn app() -> App {
        let animator = TrackAnimator::with_builtin_catalog(&AnimatorConfig::default()).unwrap();
        App::new(animator, ViewMode::Map2D)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_space_plays_and_ticks_advance() {
        let mut app = app();
        app.on_tick();
        assert_eq!(app.frame().cursor, 0);

        press(&mut app, KeyCode::Char(' '));
        app.on_tick();
        app.on_tick();
        assert_eq!(app.frame().cursor, 2);
        assert_eq!(app.status(), Some("Playing"));
    }

    #[test]
    fn test_reset_key_rewinds() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        app.on_tick();
        press(&mut app, KeyCode::Char('R'));
        assert_eq!(app.frame().cursor, 0);
        assert!(!app.animator().state().is_playing());
    }

    #[test]
    fn test_number_keys_select_in_catalog_order() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.frame().storm, "Haiyan");
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.frame().storm, "Yutu");
    }

    #[test]
    fn test_unbound_number_key_keeps_track() {
        let mut app = app();
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.frame().storm, "Mangkhut");
        assert_eq!(app.status(), Some("No storm bound to key 7"));
    }

    #[test]
    fn test_speed_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.animator().speed(), PlaybackSpeed::Fast);
        assert_eq!(app.tick_interval(), Duration::from_millis(100));
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.animator().speed(), PlaybackSpeed::Slow);
    }

    #[test]
    fn test_view_toggle_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.view(), ViewMode::Trajectory3D);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.view(), ViewMode::Map2D);

        assert!(!app.should_quit());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_pulse_stays_in_range() {
        let mut app = app();
        for _ in 0..100 {
            app.on_ui_tick();
            let p = app.pulse();
            assert!((0.5..=1.5).contains(&p));
        }
        assert!(app.yaw() > 0.0);
    }
}
