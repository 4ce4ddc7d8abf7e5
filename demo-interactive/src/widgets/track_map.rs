use super::intensity_color;
use ratatui::{
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Context, Line, Map, MapResolution, Points},
        Block, Borders, Widget,
    },
};
use typhoon_track_core::{FrameState, MapBounds};

/// Radius of the ring around the current position at pulse scale 1, in degrees
const RING_RADIUS_DEGREES: f64 = 0.5;

/// Spacing of the latitude/longitude grid, in degrees
const GRID_STEP_DEGREES: f64 = 5.0;

/// Coastlines, the trail so far, intensity markers and a pulsing ring on the
/// current position
pub fn track_map(frame: &FrameState, pulse: f64) -> impl Widget + '_ {
    let bounds = frame.bounds;
    let current = frame.current_sample;
    let (x, y) = (*current.longitude(), *current.latitude());
    let ring_color = intensity_color(current.intensity());

    Canvas::default()
        .block(
            Block::default()
                .title(" Typhoon Track Map ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Gray)),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds([bounds.min_longitude, bounds.max_longitude])
        .y_bounds([bounds.min_latitude, bounds.max_latitude])
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            draw_grid(ctx, &bounds);
            ctx.layer();

            for leg in frame.samples_up_to_cursor.windows(2) {
                ctx.draw(&Line {
                    x1: *leg[0].longitude(),
                    y1: *leg[0].latitude(),
                    x2: *leg[1].longitude(),
                    y2: *leg[1].latitude(),
                    color: Color::LightBlue,
                });
            }
            for sample in &frame.markers {
                ctx.draw(&Points {
                    coords: &[(*sample.longitude(), *sample.latitude())],
                    color: intensity_color(sample.intensity()),
                });
            }
            ctx.layer();

            ctx.draw(&Circle {
                x,
                y,
                radius: RING_RADIUS_DEGREES * pulse,
                color: ring_color,
            });
            ctx.print(x, y, Span::styled("●", Style::default().fg(Color::Red)));
        })
}

fn draw_grid(ctx: &mut Context, bounds: &MapBounds) {
    let mut lng = (bounds.min_longitude / GRID_STEP_DEGREES).ceil() * GRID_STEP_DEGREES;
    while lng <= bounds.max_longitude {
        ctx.draw(&Line {
            x1: lng,
            y1: bounds.min_latitude,
            x2: lng,
            y2: bounds.max_latitude,
            color: Color::Indexed(236),
        });
        ctx.print(
            lng,
            bounds.min_latitude,
            Span::styled(format!("{lng:.0}°E"), Style::default().fg(Color::DarkGray)),
        );
        lng += GRID_STEP_DEGREES;
    }

    let mut lat = (bounds.min_latitude / GRID_STEP_DEGREES).ceil() * GRID_STEP_DEGREES;
    while lat <= bounds.max_latitude {
        ctx.draw(&Line {
            x1: bounds.min_longitude,
            y1: lat,
            x2: bounds.max_longitude,
            y2: lat,
            color: Color::Indexed(236),
        });
        ctx.print(
            bounds.min_longitude,
            lat,
            Span::styled(format!("{lat:.0}°N"), Style::default().fg(Color::DarkGray)),
        );
        lat += GRID_STEP_DEGREES;
    }
}
