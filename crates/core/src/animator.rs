//! Frame-driven track animation
//!
//! [`TrackAnimator`] owns the catalog and the [`AnimationState`]. All state
//! changes happen synchronously on the caller's thread in response to tick
//! and input events; nothing blocks and nothing is shared.
//!
//! ```text
//!            toggle_play                 toggle_play / select_track / reset
//!  Stopped ──────────────▶ Playing ─────────────────────────────────────────▶ Stopped
//! ```
//!
//! While playing, every tick advances the cursor by one and wraps to 0 after
//! the last sample.

use crate::catalog::StormCatalog;
use crate::config::{AnimatorConfig, PlaybackSpeed};
use crate::core_types::StormTrack;
use crate::error::Result;
use crate::frame::FrameState;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Coarse play state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// Active track, cursor and play flag.
///
/// `cursor` is always a valid index into the active track's samples.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    active_track: Arc<StormTrack>,
    cursor: usize,
    is_playing: bool,
}

impl AnimationState {
    fn new(active_track: Arc<StormTrack>) -> Self {
        Self {
            active_track,
            cursor: 0,
            is_playing: false,
        }
    }

    pub fn active_track(&self) -> &StormTrack {
        &self.active_track
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }
}

/// Drives the animation of one storm track at a time
#[derive(Debug)]
pub struct TrackAnimator {
    catalog: StormCatalog,
    state: AnimationState,
    speed: PlaybackSpeed,
}

impl TrackAnimator {
    /// Create an animator showing `config.initial_track` at frame 0.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrackError::UnknownTrack`] if the initial track is not
    /// in the catalog.
    pub fn new(catalog: StormCatalog, config: &AnimatorConfig) -> Result<Self> {
        let track = catalog.shared(&config.initial_track)?;
        info!(
            storm = %track.name(),
            speed = %config.speed,
            autoplay = config.autoplay,
            "Animator ready"
        );
        let mut state = AnimationState::new(track);
        state.is_playing = config.autoplay;
        Ok(Self {
            catalog,
            state,
            speed: config.speed,
        })
    }

    /// Animator over the embedded storm catalog.
    ///
    /// # Errors
    ///
    /// Propagates catalog validation errors and unknown initial tracks.
    pub fn with_builtin_catalog(config: &AnimatorConfig) -> Result<Self> {
        Self::new(StormCatalog::builtin()?, config)
    }

    /// Switch to another track, stopping playback and rewinding to frame 0.
    ///
    /// Returns the frame 0 snapshot to render.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrackError::UnknownTrack`] for names not in the
    /// catalog; the current track, cursor and play flag are left untouched.
    pub fn select_track(&mut self, name: &str) -> Result<FrameState> {
        let track = self.catalog.shared(name).inspect_err(|e| {
            warn!(storm = %name, error = %e, "Rejected track selection");
        })?;
        info!(storm = %track.name(), samples = track.len(), "Selected track");
        self.state = AnimationState::new(track);
        Ok(self.current_frame())
    }

    /// Flip between playing and stopped. The cursor does not move.
    ///
    /// Returns the new play flag.
    pub fn toggle_play(&mut self) -> bool {
        self.state.is_playing = !self.state.is_playing;
        debug!(
            storm = %self.state.active_track.name(),
            playing = self.state.is_playing,
            cursor = self.state.cursor,
            "Toggled playback"
        );
        self.state.is_playing
    }

    /// Stop playback and rewind to frame 0, returning the frame 0 snapshot.
    pub fn reset(&mut self) -> FrameState {
        self.state.cursor = 0;
        self.state.is_playing = false;
        info!(storm = %self.state.active_track.name(), "Reset animation");
        self.current_frame()
    }

    /// Move to the next frame, wrapping to 0 after the last sample.
    ///
    /// Intended to be driven by the tick source while playing; it advances
    /// regardless of the play flag so callers can single-step. Use
    /// [`Self::on_tick`] for play-gated advancing.
    pub fn advance_frame(&mut self) -> FrameState {
        let len = self.state.active_track.len();
        self.state.cursor = (self.state.cursor + 1) % len;
        debug!(
            storm = %self.state.active_track.name(),
            cursor = self.state.cursor,
            "Advanced frame"
        );
        self.current_frame()
    }

    /// Tick handler: advance only while playing.
    pub fn on_tick(&mut self) -> Option<FrameState> {
        self.state.is_playing.then(|| self.advance_frame())
    }

    /// Snapshot of the current cursor without moving it
    pub fn current_frame(&self) -> FrameState {
        FrameState::build(&self.state.active_track, self.state.cursor)
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn playback(&self) -> PlaybackState {
        if self.state.is_playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Stopped
        }
    }

    pub fn active_track(&self) -> &StormTrack {
        self.state.active_track()
    }

    pub fn catalog(&self) -> &StormCatalog {
        &self.catalog
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        if speed != self.speed {
            debug!(from = %self.speed, to = %speed, "Changed playback speed");
            self.speed = speed;
        }
    }
}
