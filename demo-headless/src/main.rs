//! Headless typhoon track player
//!
//! Steps a storm track through the animator and prints every frame, either as
//! a text table or as one JSON object per line.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-headless -- --storm Haiyan --frames 12
//! cargo run --package demo-headless -- --list
//! cargo run --package demo-headless -- --storm Yutu --json
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use typhoon_track_core::{
    AnimatorConfig, FrameState, PlaybackSpeed, StormCatalog, TrackAnimator, TrackSample,
};

/// Typhoon track replay with configurable playback
#[derive(Parser, Debug)]
#[command(name = "typhoon-headless")]
#[command(about = "Replay a typhoon track frame by frame", long_about = None)]
struct Args {
    /// Storm to play (default: the first storm in the catalog)
    #[arg(short, long)]
    storm: Option<String>,

    /// Number of ticks to play (default: one full loop back to the first sample)
    #[arg(short, long)]
    frames: Option<usize>,

    /// Playback speed (slow, medium, fast)
    #[arg(long, default_value_t = PlaybackSpeed::Medium)]
    speed: PlaybackSpeed,

    /// Wait one tick interval between frames instead of printing immediately
    #[arg(long)]
    sleep: bool,

    /// Print each frame as a JSON object on its own line
    #[arg(short, long)]
    json: bool,

    /// List the available storms and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let catalog = StormCatalog::builtin().context("failed to load storm catalog")?;
    let mut out = io::stdout().lock();

    if args.list {
        list_storms(&catalog, &mut out)?;
        return Ok(());
    }

    let storm = match args.storm {
        Some(name) => name,
        None => catalog
            .first()
            .map(|track| track.name().to_string())
            .context("storm catalog is empty")?,
    };
    if !catalog.contains(&storm) {
        let known: Vec<&str> = catalog.names().collect();
        bail!("unknown storm '{storm}' (available: {})", known.join(", "));
    }

    let config = AnimatorConfig {
        initial_track: storm.clone(),
        speed: args.speed,
        autoplay: false,
    };
    let mut animator = TrackAnimator::new(catalog, &config)
        .with_context(|| format!("cannot play storm '{storm}'"))?;

    let frames = args.frames.unwrap_or_else(|| animator.active_track().len());
    let interval = animator.speed().tick_interval();
    info!(storm = %storm, frames, ?interval, "Starting playback");

    if !args.json {
        writeln!(out, "=== Typhoon Track Replay: {storm} ===\n")?;
        writeln!(out, "Frame | Time             | Int.    | Pressure | Wind     | Position          | Movement")?;
        writeln!(out, "------|------------------|---------|----------|----------|-------------------|------------------------")?;
    }

    emit(&animator.current_frame(), args.json, &mut out)?;
    animator.toggle_play();
    for _ in 0..frames {
        if args.sleep {
            std::thread::sleep(interval);
        }
        if let Some(frame) = animator.on_tick() {
            emit(&frame, args.json, &mut out)?;
        }
    }

    if !args.json {
        let track = animator.active_track();
        writeln!(out, "\n=== Replay Complete ===")?;
        writeln!(out, "Peak intensity: {}", track.peak_intensity().full_name())?;
        writeln!(out, "Minimum pressure: {}", track.min_pressure())?;
        writeln!(out, "Maximum wind: {}", track.max_wind())?;
    }

    Ok(())
}

fn list_storms(catalog: &StormCatalog, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Storm      | Samples | Peak intensity        | First sample")?;
    writeln!(out, "-----------|---------|-----------------------|-----------------")?;
    for track in catalog.tracks() {
        let first = track
            .sample(0)
            .map(TrackSample::timestamp_label)
            .unwrap_or_default();
        writeln!(
            out,
            "{:<10} | {:7} | {:<21} | {}",
            track.name(),
            track.len(),
            track.peak_intensity().full_name(),
            first
        )?;
    }
    Ok(())
}

fn emit(frame: &FrameState, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, frame).context("failed to encode frame")?;
        writeln!(out)?;
        return Ok(());
    }

    let s = &frame.current_sample;
    let movement = frame.movement.map_or_else(String::new, |m| {
        let speed = m.speed.map_or_else(|| "-".to_string(), |v| format!("{:.0}", *v));
        format!("{speed} km/h {}, {}", m.bearing, m.distance)
    });
    writeln!(
        out,
        "{:5} | {} | {:<7} | {:>8} | {:>8} | {:>5.1}°N, {:>6.1}°E | {}",
        frame.cursor,
        s.timestamp_label(),
        s.intensity(),
        s.pressure().to_string(),
        s.wind().to_string(),
        *s.latitude(),
        *s.longitude(),
        movement
    )?;
    Ok(())
}
