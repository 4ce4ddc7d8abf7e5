use super::intensity_color;
use crate::view3d::{ProjectedSample, Projector, DEFAULT_PITCH};
use ratatui::{
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line},
        Block, Borders, Widget,
    },
};
use typhoon_track_core::FrameState;

/// Rotating 3D view: the ground track, wind-height curtains up to the cursor
/// and the lifted trajectory
pub fn trajectory(frame: &FrameState, yaw: f64, pulse: f64) -> impl Widget + '_ {
    let max_wind = frame
        .markers
        .iter()
        .map(|s| *s.wind())
        .fold(0.0, f64::max);
    let projector = Projector::new(&frame.bounds, max_wind, yaw, DEFAULT_PITCH);
    let [lo, hi] = projector.canvas_bounds();
    let projected: Vec<ProjectedSample> = frame
        .markers
        .iter()
        .map(|s| projector.project_sample(s))
        .collect();

    Canvas::default()
        .block(
            Block::default()
                .title(" 3D Trajectory (height = wind speed) ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Gray)),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds([lo, hi])
        .y_bounds([lo, hi])
        .paint(move |ctx| {
            let b = &frame.bounds;
            let corners = [
                projector.project(b.min_longitude, b.min_latitude, 0.0),
                projector.project(b.max_longitude, b.min_latitude, 0.0),
                projector.project(b.max_longitude, b.max_latitude, 0.0),
                projector.project(b.min_longitude, b.max_latitude, 0.0),
            ];
            for (i, &(x1, y1)) in corners.iter().enumerate() {
                let (x2, y2) = corners[(i + 1) % corners.len()];
                ctx.draw(&Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: Color::Indexed(238),
                });
            }
            let mid_lng = (b.min_longitude + b.max_longitude) / 2.0;
            let (nx, ny) = projector.project(mid_lng, b.max_latitude, 0.0);
            ctx.print(nx, ny, Span::styled("N", Style::default().fg(Color::DarkGray)));

            for leg in projected.windows(2) {
                ctx.draw(&Line {
                    x1: leg[0].ground.0,
                    y1: leg[0].ground.1,
                    x2: leg[1].ground.0,
                    y2: leg[1].ground.1,
                    color: Color::DarkGray,
                });
            }
            ctx.layer();

            let played = &projected[..=frame.cursor];
            for (point, sample) in played.iter().zip(&frame.markers) {
                ctx.draw(&Line {
                    x1: point.ground.0,
                    y1: point.ground.1,
                    x2: point.lifted.0,
                    y2: point.lifted.1,
                    color: intensity_color(sample.intensity()),
                });
            }
            for leg in played.windows(2) {
                ctx.draw(&Line {
                    x1: leg[0].lifted.0,
                    y1: leg[0].lifted.1,
                    x2: leg[1].lifted.0,
                    y2: leg[1].lifted.1,
                    color: Color::White,
                });
            }
            ctx.layer();

            let current = projected[frame.cursor];
            ctx.draw(&Circle {
                x: current.lifted.0,
                y: current.lifted.1,
                radius: (hi - lo) * 0.015 * pulse,
                color: intensity_color(frame.current_sample.intensity()),
            });
        })
}
