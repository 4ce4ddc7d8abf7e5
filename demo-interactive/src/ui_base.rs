//! Terminal setup, the event loop and cleanup.
//! Raw mode and the alternate screen are entered on construction and
//! restored on drop, so an early return or a panic unwinding through
//! `main` still leaves the terminal usable.

use crate::app::App;
use crate::top_level_ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Redraw cadence for the pulse and the 3D rotation
const UI_TICK: Duration = Duration::from_millis(50);

pub struct UiBase {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl UiBase {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        // No guard exists yet, so a failure past this point restores by hand
        let terminal = restore_on_error(
            stdout()
                .execute(EnterAlternateScreen)
                .and_then(|_| Terminal::new(CrosstermBackend::new(stdout()))),
            Self::cleanup,
        )?;
        Ok(Self { terminal })
    }

    /// Draw, wait for input until the next deadline, fire whichever ticks are due.
    ///
    /// Animation ticks are scheduled from the interval in effect when the
    /// previous tick fired, so a speed change applies from the next tick on.
    pub fn event_loop(&mut self, app: &mut App) -> Result<()> {
        let mut next_tick = Instant::now() + app.tick_interval();
        let mut next_ui_tick = Instant::now() + UI_TICK;

        while !app.should_quit() {
            self.terminal.draw(|frame| top_level_ui::draw(frame, app))?;

            let deadline = next_tick.min(next_ui_tick);
            let timeout = deadline.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key);
                    }
                }
            }

            let now = Instant::now();
            if now >= next_ui_tick {
                app.on_ui_tick();
                next_ui_tick = now + UI_TICK;
            }
            if now >= next_tick {
                app.on_tick();
                next_tick = now + app.tick_interval();
            }
        }

        info!("Leaving viewer");
        Ok(())
    }

    fn cleanup() {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to leave raw mode: {e}");
        }
        if let Err(e) = stdout().execute(LeaveAlternateScreen) {
            warn!("Failed to leave alternate screen: {e}");
        }
    }
}

impl Drop for UiBase {
    fn drop(&mut self) {
        Self::cleanup();
    }
}

/// Pass `result` through, running `restore` first if it is an error
fn restore_on_error<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}
