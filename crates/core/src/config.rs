//! Animator configuration
//!
//! Front-ends build an [`AnimatorConfig`] from their command-line arguments
//! and hand it to [`crate::TrackAnimator::new`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Tick rate of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl PlaybackSpeed {
    /// Time between frame advances
    pub fn tick_interval(self) -> Duration {
        match self {
            PlaybackSpeed::Slow => Duration::from_millis(400),
            PlaybackSpeed::Medium => Duration::from_millis(200),
            PlaybackSpeed::Fast => Duration::from_millis(100),
        }
    }

    /// Next faster level, saturating at `Fast`
    pub fn faster(self) -> Self {
        match self {
            PlaybackSpeed::Slow => PlaybackSpeed::Medium,
            PlaybackSpeed::Medium | PlaybackSpeed::Fast => PlaybackSpeed::Fast,
        }
    }

    /// Next slower level, saturating at `Slow`
    pub fn slower(self) -> Self {
        match self {
            PlaybackSpeed::Fast => PlaybackSpeed::Medium,
            PlaybackSpeed::Medium | PlaybackSpeed::Slow => PlaybackSpeed::Slow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackSpeed::Slow => "Slow",
            PlaybackSpeed::Medium => "Medium",
            PlaybackSpeed::Fast => "Fast",
        }
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for PlaybackSpeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(PlaybackSpeed::Slow),
            "medium" | "normal" => Ok(PlaybackSpeed::Medium),
            "fast" => Ok(PlaybackSpeed::Fast),
            other => Err(format!("unknown speed '{other}' (expected slow, medium or fast)")),
        }
    }
}

/// Startup settings for a [`crate::TrackAnimator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Track shown at startup
    pub initial_track: String,
    /// Initial tick rate
    pub speed: PlaybackSpeed,
    /// Start in the playing state instead of paused
    pub autoplay: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            initial_track: "Mangkhut".to_string(),
            speed: PlaybackSpeed::Medium,
            autoplay: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_steps_saturate() {
        assert_eq!(PlaybackSpeed::Fast.faster(), PlaybackSpeed::Fast);
        assert_eq!(PlaybackSpeed::Slow.slower(), PlaybackSpeed::Slow);
        assert_eq!(PlaybackSpeed::Slow.faster().faster(), PlaybackSpeed::Fast);
    }

    #[test]
    fn test_medium_matches_default_interval() {
        assert_eq!(PlaybackSpeed::default().tick_interval(), Duration::from_millis(200));
        assert!(PlaybackSpeed::Fast.tick_interval() < PlaybackSpeed::Slow.tick_interval());
    }

    #[test]
    fn test_parse_speed() {
        assert_eq!("FAST".parse::<PlaybackSpeed>(), Ok(PlaybackSpeed::Fast));
        assert!("warp".parse::<PlaybackSpeed>().is_err());
    }

    #[test]
    fn test_config_fills_missing_fields() {
        let config: AnimatorConfig = serde_json::from_str(r#"{"initial_track":"Yutu"}"#).unwrap();
        assert_eq!(config.initial_track, "Yutu");
        assert_eq!(config.speed, PlaybackSpeed::Medium);
        assert!(!config.autoplay);
    }
}
