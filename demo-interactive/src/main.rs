//! Interactive typhoon track viewer
//!
//! Terminal front-end for the track animator: a map with the storm's trail
//! and intensity markers, or a rotating 3D trajectory with pressure and wind
//! profiles, next to information, controls and legend panels.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive
//! cargo run --package demo-interactive -- --storm Haiyan --speed fast --autoplay
//! cargo run --package demo-interactive -- --view 3d --log-file viewer.log
//! ```
//!
//! Logging is off unless `--log-file` is given, since the terminal belongs
//! to the UI. `RUST_LOG` controls the filter as usual.

mod app;
mod top_level_ui;
mod ui_base;
mod view3d;
mod widgets;

use anyhow::{Context, Result};
use app::{App, ViewMode};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use typhoon_track_core::{AnimatorConfig, PlaybackSpeed, TrackAnimator};
use ui_base::UiBase;

/// Interactive typhoon track animation in the terminal
#[derive(Parser, Debug)]
#[command(name = "typhoon-viewer")]
#[command(about = "Animate typhoon tracks in the terminal", long_about = None)]
struct Args {
    /// Storm shown at startup (Mangkhut, Haiyan, Yutu)
    #[arg(short, long, default_value = "Mangkhut")]
    storm: String,

    /// Playback speed (slow, medium, fast)
    #[arg(long, default_value_t = PlaybackSpeed::Medium)]
    speed: PlaybackSpeed,

    /// Start playing immediately instead of paused
    #[arg(short, long)]
    autoplay: bool,

    /// Initial view
    #[arg(long, value_enum, default_value_t = ViewMode::Map2D)]
    view: ViewMode,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let config = AnimatorConfig {
        initial_track: args.storm.clone(),
        speed: args.speed,
        autoplay: args.autoplay,
    };
    // Resolve the storm before touching the terminal so errors print normally
    let animator = TrackAnimator::with_builtin_catalog(&config)
        .with_context(|| format!("cannot show storm '{}'", args.storm))?;
    let mut app = App::new(animator, args.view);

    info!(storm = %args.storm, speed = %args.speed, view = ?args.view, "Starting viewer");
    let mut ui = UiBase::new()?;
    ui.event_loop(&mut app)
}
