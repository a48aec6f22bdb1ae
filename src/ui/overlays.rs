//! Centered overlays for the start and game-over views.

use crate::game_state::GameSession;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A box of the given size centered inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_overlay(frame: &mut Frame, area: Rect, border_color: Color, lines: Vec<Line>) {
    let height = lines.len() as u16 + 2;
    let width = lines
        .iter()
        .map(|line| line.width() as u16)
        .max()
        .unwrap_or(0)
        .max(24)
        + 4;

    let rect = centered_rect(area, width, height);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Title card shown before the first run.
pub fn render_start(frame: &mut Frame, area: Rect, session: &GameSession) {
    let lines = vec![
        Line::from(Span::styled(
            "S K Y D A S H",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Flap through the forest."),
        Line::from(""),
        Line::from(vec![
            Span::styled("High score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Space] Start",
            Style::default().fg(Color::Green),
        )),
    ];
    render_overlay(frame, area, Color::Yellow, lines);
}

/// Result card shown once the game-over delay has elapsed.
pub fn render_game_over(frame: &mut Frame, area: Rect, session: &GameSession) {
    let beat_record = session.record_beaten;

    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    if beat_record {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "New record!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Space] Play again",
        Style::default().fg(Color::Green),
    )));

    render_overlay(frame, area, Color::Red, lines);
}
