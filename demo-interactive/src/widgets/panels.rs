use super::intensity_color;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use typhoon_track_core::{FrameState, IntensityCode, PlaybackSpeed};

pub fn info_panel(frame: &FrameState) -> Paragraph<'static> {
    let intensity_style = Style::default()
        .fg(intensity_color(frame.current_sample.intensity()))
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = frame
        .info_lines()
        .into_iter()
        .map(|text| {
            if text.starts_with("Intensity:") {
                Line::from(Span::styled(text, intensity_style))
            } else {
                Line::from(text)
            }
        })
        .collect();

    Paragraph::new(lines).block(
        Block::default()
            .title(" Typhoon Information ")
            .borders(Borders::ALL),
    )
}

pub fn controls_panel(speed: PlaybackSpeed, playing: bool) -> Paragraph<'static> {
    let state = if playing {
        Span::styled("Playing", Style::default().fg(Color::Green))
    } else {
        Span::styled("Paused", Style::default().fg(Color::Yellow))
    };
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(vec![Span::raw("State: "), state]),
        Line::from(format!("Speed: {speed}")),
        Line::from(vec![key("Space"), Span::raw(" play/pause  "), key("R"), Span::raw(" reset")]),
        Line::from(vec![key("1-3"), Span::raw(" or "), key("M/H/Y"), Span::raw(" storm")]),
        Line::from(vec![key("+/-"), Span::raw(" speed  "), key("V"), Span::raw(" 2D/3D")]),
        Line::from(vec![key("Q"), Span::raw(" quit")]),
    ];

    Paragraph::new(lines).block(Block::default().title(" Controls ").borders(Borders::ALL))
}

pub fn progress_gauge(frame: &FrameState) -> Gauge<'static> {
    Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio((frame.progress_percent / 100.0).clamp(0.0, 1.0))
        .label(frame.progress_label())
}

pub fn legend() -> Paragraph<'static> {
    let lines: Vec<Line> = IntensityCode::ALL
        .iter()
        .map(|&code| {
            Line::from(vec![
                Span::styled("●● ", Style::default().fg(intensity_color(code))),
                Span::raw(format!("{:<7} {}", code, code.full_name())),
            ])
        })
        .collect();

    Paragraph::new(lines).block(Block::default().title(" Legend ").borders(Borders::ALL))
}
