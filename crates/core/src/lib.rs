//! Typhoon Track Core Library
//!
//! Animation state and derived display data for replaying tropical-cyclone
//! tracks. The crate holds a small validated catalog of historical storms,
//! steps a cursor through each track frame by frame, and produces
//! [`FrameState`] snapshots for a render surface to draw.
//!
//! ## Pieces
//!
//! - [`StormCatalog`]: embedded tracks (Mangkhut, Haiyan, Yutu), validated at load
//! - [`TrackAnimator`]: play/pause/reset/select and the looping frame cursor
//! - [`geo`]: movement bearing buckets and equirectangular distance
//! - [`FrameState`]: trail, current sample, movement, progress and profiles
//!
//! ```
//! use typhoon_track_core::{AnimatorConfig, TrackAnimator};
//!
//! let mut animator = TrackAnimator::with_builtin_catalog(&AnimatorConfig::default())?;
//! animator.toggle_play();
//! let frame = animator.on_tick().expect("playing");
//! assert_eq!(frame.cursor, 1);
//! # Ok::<(), typhoon_track_core::TrackError>(())
//! ```

pub mod animator;
pub mod catalog;
pub mod config;
pub mod core_types;
pub mod error;
pub mod frame;
pub mod geo;

pub use animator::{AnimationState, PlaybackState, TrackAnimator};
pub use catalog::StormCatalog;
pub use config::{AnimatorConfig, PlaybackSpeed};
pub use core_types::{GeoPoint, IntensityCode, MapBounds, StormTrack, TrackSample};
pub use error::{Result, TrackError};
pub use frame::{progress_percent, FrameState, Profile};
pub use geo::{approx_distance_km, compute_bearing, Bearing, Movement};
