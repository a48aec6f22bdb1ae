//! Terminal rendering: scene layout, status bar, and draw dispatch.
//!
//! The UI is a read-only view over the session aggregate; nothing here
//! mutates game state.

pub mod game_scene;
pub mod overlays;

use crate::game_state::{GamePhase, GameSession};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas for the game screen.
pub struct SceneLayout {
    /// Play-area canvas, inside the outer border.
    pub canvas: Rect,
    /// Two-line status bar under the canvas.
    pub status_bar: Rect,
    /// Info panel on the right.
    pub info_panel: Rect,
}

/// Outer border plus the canvas / status bar / info panel split.
pub fn scene_layout(frame: &mut Frame, area: Rect) -> SceneLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skydash ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    SceneLayout {
        canvas: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Two-line status bar: a centered message and the key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render the whole screen for the current phase.
pub fn draw(
    frame: &mut Frame,
    session: &GameSession,
    audio_note: Option<&str>,
    muted: bool,
    now_ms: u64,
) {
    let area = frame.size();
    let layout = scene_layout(frame, area);

    game_scene::render_canvas(frame, layout.canvas, session);
    render_info_panel(frame, layout.info_panel, session, audio_note, muted);

    match session.phase {
        GamePhase::Idle => {
            render_status_bar(
                frame,
                layout.status_bar,
                "Press Space to take flight!",
                Color::Yellow,
                &[("[Space]", "Start"), ("[M]", "Mute"), ("[Q]", "Quit")],
            );
            overlays::render_start(frame, layout.canvas, session);
        }
        GamePhase::Running => {
            render_status_bar(
                frame,
                layout.status_bar,
                &format!("Score: {}", session.score),
                Color::Green,
                &[("[Space/Up]", "Flap"), ("[M]", "Mute"), ("[Q]", "Quit")],
            );
        }
        GamePhase::GameOver { .. } => {
            render_status_bar(
                frame,
                layout.status_bar,
                "Crashed!",
                Color::Red,
                &[("[Space]", "Play again"), ("[Q]", "Quit")],
            );
            if session.game_over_view_ready(now_ms) {
                overlays::render_game_over(frame, layout.canvas, session);
            }
        }
    }
}

/// Score / best / speed readouts plus the audio state.
fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    audio_note: Option<&str>,
    muted: bool,
) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}", session.speed),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
    ];

    let audio_line = if let Some(note) = audio_note {
        Span::styled(format!(" {}", note), Style::default().fg(Color::Red))
    } else if muted {
        Span::styled(" Sound: muted", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(" Sound: on", Style::default().fg(Color::Cyan))
    };
    lines.push(Line::from(audio_line));

    frame.render_widget(Paragraph::new(lines), inner);
}
