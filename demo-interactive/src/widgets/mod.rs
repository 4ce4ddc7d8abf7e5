mod panels;
mod profile;
mod track_map;
mod trajectory;

pub use panels::{controls_panel, info_panel, legend, progress_gauge};
pub use profile::{pressure_chart, wind_chart};
pub use track_map::track_map;
pub use trajectory::trajectory;

use ratatui::style::Color;
use typhoon_track_core::IntensityCode;

/// Terminal color for an intensity category
pub fn intensity_color(code: IntensityCode) -> Color {
    let (r, g, b) = code.color_rgb();
    Color::Rgb(r, g, b)
}
