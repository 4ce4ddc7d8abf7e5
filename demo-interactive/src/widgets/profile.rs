use ratatui::{
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};
use typhoon_track_core::FrameState;

/// Central pressure up to the cursor. The y range covers the whole track so
/// the axis stays put while the line grows.
pub fn pressure_chart(frame: &FrameState) -> impl Widget + '_ {
    let (lo, hi) = frame
        .markers
        .iter()
        .map(|s| f64::from(*s.pressure()))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    series_chart(
        " Pressure (hPa) ",
        &frame.profile.pressure,
        Color::Cyan,
        frame.total_samples,
        [lo - 10.0, hi + 10.0],
    )
}

/// Maximum sustained wind up to the cursor
pub fn wind_chart(frame: &FrameState) -> impl Widget + '_ {
    let hi = frame
        .markers
        .iter()
        .map(|s| *s.wind())
        .fold(0.0, f64::max);
    series_chart(
        " Wind Speed (km/h) ",
        &frame.profile.wind,
        Color::LightRed,
        frame.total_samples,
        [0.0, hi + 20.0],
    )
}

fn series_chart<'a>(
    title: &'static str,
    data: &'a [(f64, f64)],
    color: Color,
    total_samples: usize,
    y_bounds: [f64; 2],
) -> Chart<'a> {
    let x_max = total_samples.saturating_sub(1).max(1) as f64;
    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)];

    Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Gray)),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(vec!["0".to_string(), format!("{x_max:.0}")]),
        )
        .y_axis(
            Axis::default()
                .bounds(y_bounds)
                .labels(vec![
                    format!("{:.0}", y_bounds[0]),
                    format!("{:.0}", y_bounds[1]),
                ]),
        )
}
