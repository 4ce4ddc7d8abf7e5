//! Screen layout
//!
//! ```text
//! +------------------------------------+------------------+
//! | title                                                 |
//! +------------------------------------+------------------+
//! |                                    | information      |
//! | 2D map                             +------------------+
//! |   or                               | controls         |
//! | 3D trajectory + profiles           +------------------+
//! |                                    | progress         |
//! |                                    +------------------+
//! |                                    | legend           |
//! +------------------------------------+------------------+
//! | status                                                |
//! +-------------------------------------------------------+
//! ```

use crate::app::{App, ViewMode};
use crate::widgets;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(title_bar(app), rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[1]);

    match app.view() {
        ViewMode::Map2D => {
            frame.render_widget(widgets::track_map(app.frame(), app.pulse()), body[0]);
        }
        ViewMode::Trajectory3D => {
            let left = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(body[0]);
            let charts = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(left[1]);

            frame.render_widget(
                widgets::trajectory(app.frame(), app.yaw(), app.pulse()),
                left[0],
            );
            frame.render_widget(widgets::pressure_chart(app.frame()), charts[0]);
            frame.render_widget(widgets::wind_chart(app.frame()), charts[1]);
        }
    }

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(8),
        ])
        .split(body[1]);

    frame.render_widget(widgets::info_panel(app.frame()), side[0]);
    frame.render_widget(
        widgets::controls_panel(app.animator().speed(), app.animator().state().is_playing()),
        side[1],
    );
    frame.render_widget(widgets::progress_gauge(app.frame()), side[2]);
    frame.render_widget(widgets::legend(), side[3]);

    frame.render_widget(status_bar(app), rows[2]);
}

fn title_bar(app: &App) -> Paragraph<'static> {
    let view = match app.view() {
        ViewMode::Map2D => "2D map",
        ViewMode::Trajectory3D => "3D trajectory",
    };
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Typhoon Track Animator: {} ", app.frame().storm),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("[{view}]"), Style::default().fg(Color::DarkGray)),
    ]))
}

fn status_bar(app: &App) -> Paragraph<'_> {
    let text = app.status().unwrap_or("Press Space to start the animation");
    Paragraph::new(Line::from(Span::styled(
        format!(" {text}"),
        Style::default().fg(Color::Yellow),
    )))
}
