//! Play-area rendering.
//!
//! The logical 800x600 world is sampled into a cell buffer sized to the
//! terminal area: each cell takes the color of whatever occupies its world
//! center. Paint order, back to front: sky, hills, ground, trees, bird,
//! particles, banner.

use crate::constants::*;
use crate::game_state::{GameSession, Obstacle, PARTICLE_PALETTE};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY_TOP: (u8, u8, u8) = (135, 206, 235);
const SKY_BOTTOM: (u8, u8, u8) = (224, 246, 255);
const HILL: (u8, u8, u8) = (123, 176, 135);
const DIRT: (u8, u8, u8) = (139, 69, 19);
const GRASS: (u8, u8, u8) = (124, 252, 0);
const TRUNK: (u8, u8, u8) = (139, 69, 19);
const FOLIAGE: (u8, u8, u8) = (34, 139, 34);
const BIRD_BODY: (u8, u8, u8) = (255, 215, 0);
const BIRD_WING: (u8, u8, u8) = (255, 165, 0);

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

/// Character grid the scene is composed into before it becomes spans.
struct CellBuf {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellBuf {
    fn new(width: usize, height: usize, bg: Color) -> Self {
        Self {
            width,
            height,
            cells: vec![
                Cell {
                    ch: ' ',
                    fg: Color::Reset,
                    bg,
                };
                width * height
            ],
        }
    }

    fn set(&mut self, col: usize, row: usize, ch: char, fg: Color) {
        if col < self.width && row < self.height {
            let cell = &mut self.cells[row * self.width + col];
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    fn set_bg(&mut self, col: usize, row: usize, bg: Color) {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col].bg = bg;
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.height);
        for row in 0..self.height {
            let mut spans = Vec::with_capacity(self.width);
            for col in 0..self.width {
                let cell = self.cells[row * self.width + col];
                spans.push(Span::styled(
                    cell.ch.to_string(),
                    Style::default().fg(cell.fg).bg(cell.bg),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t) as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Hill silhouette height at a world x, deterministic per column.
fn hill_top(world_x: f64) -> f64 {
    let wave = (world_x * 0.02).sin() * 18.0 + (world_x * 0.047).sin() * 9.0;
    WORLD_HEIGHT - GROUND_HEIGHT - 55.0 - wave
}

/// Draw the session into the canvas area.
pub fn render_canvas(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    // World units per cell.
    let sx = WORLD_WIDTH / width as f64;
    let sy = WORLD_HEIGHT / height as f64;

    let mut buf = CellBuf::new(width, height, rgb(SKY_TOP));

    paint_backdrop(&mut buf, sx, sy);
    for obstacle in &session.obstacles {
        paint_tree(&mut buf, obstacle, sx, sy);
    }
    paint_bird(&mut buf, session, sx, sy);
    paint_particles(&mut buf, session, sx, sy);
    paint_banner(&mut buf, session);

    frame.render_widget(Paragraph::new(buf.into_lines()), area);
}

fn paint_backdrop(buf: &mut CellBuf, sx: f64, sy: f64) {
    for row in 0..buf.height {
        let world_y = (row as f64 + 0.5) * sy;
        let sky = lerp_rgb(SKY_TOP, SKY_BOTTOM, world_y / WORLD_HEIGHT);

        for col in 0..buf.width {
            let world_x = (col as f64 + 0.5) * sx;
            let bg = if world_y >= WORLD_HEIGHT - GROUND_HEIGHT {
                if world_y < WORLD_HEIGHT - GROUND_HEIGHT + 5.0 {
                    GRASS
                } else {
                    DIRT
                }
            } else if world_y >= hill_top(world_x) {
                HILL
            } else {
                sky
            };
            buf.set_bg(col, row, rgb(bg));
        }
    }
}

fn paint_tree(buf: &mut CellBuf, obstacle: &Obstacle, sx: f64, sy: f64) {
    let center_x = obstacle.x + OBSTACLE_WIDTH / 2.0;
    let trunk_half = OBSTACLE_WIDTH * TRUNK_WIDTH_RATIO / 2.0;
    // Three crown circles per tree, each layer one step smaller.
    let crown_base = OBSTACLE_WIDTH / 2.0;

    for row in 0..buf.height {
        let world_y = (row as f64 + 0.5) * sy;
        if world_y >= WORLD_HEIGHT - GROUND_HEIGHT {
            continue;
        }
        for col in 0..buf.width {
            let world_x = (col as f64 + 0.5) * sx;

            let in_gap = world_y > obstacle.gap_top() && world_y < obstacle.gap_bottom();
            let in_trunk = !in_gap && (world_x - center_x).abs() <= trunk_half;
            if in_trunk {
                buf.set(col, row, '█', rgb(TRUNK));
            }

            for layer in 0..3u32 {
                let radius = OBSTACLE_WIDTH * (1.0 - 0.2 * layer as f64);
                let offset = crown_base + layer as f64 * OBSTACLE_WIDTH / 3.0;
                let top_cy = obstacle.gap_top() - offset;
                let bottom_cy = obstacle.gap_bottom() + offset;

                let dx = world_x - center_x;
                let hits = |cy: f64| {
                    let dy = world_y - cy;
                    dx * dx + dy * dy <= radius * radius
                };
                if hits(top_cy) || hits(bottom_cy) {
                    buf.set(col, row, '▓', rgb(FOLIAGE));
                    break;
                }
            }
        }
    }
}

fn paint_bird(buf: &mut CellBuf, session: &GameSession, sx: f64, sy: f64) {
    let bird = &session.bird;
    let half_w = bird.width / 2.0;
    let half_h = bird.height / 2.0;

    // Wing bobs with the animation phase.
    let wing_cx = bird.x - bird.width / 4.0;
    let wing_cy = bird.y + bird.wing_phase * (bird.height / 4.0);
    let wing_half_w = bird.width / 3.0;
    let wing_half_h = bird.height / 4.0;

    for row in 0..buf.height {
        let world_y = (row as f64 + 0.5) * sy;
        for col in 0..buf.width {
            let world_x = (col as f64 + 0.5) * sx;

            let dx = (world_x - bird.x) / half_w;
            let dy = (world_y - bird.y) / half_h;
            if dx * dx + dy * dy <= 1.0 {
                buf.set(col, row, '█', rgb(BIRD_BODY));
            }

            let wx = (world_x - wing_cx) / wing_half_w;
            let wy = (world_y - wing_cy) / wing_half_h;
            if wx * wx + wy * wy <= 1.0 {
                buf.set(col, row, '▓', rgb(BIRD_WING));
            }
        }
    }
}

fn paint_particles(buf: &mut CellBuf, session: &GameSession, sx: f64, sy: f64) {
    for particle in &session.particles {
        if particle.x < 0.0 || particle.y < 0.0 {
            continue;
        }
        let col = (particle.x / sx) as usize;
        let row = (particle.y / sy) as usize;
        let (r, g, b) = PARTICLE_PALETTE[particle.color % PARTICLE_PALETTE.len()];
        // Fade with remaining life.
        let faded = lerp_rgb(SKY_BOTTOM, (r, g, b), particle.life.clamp(0.0, 1.0));
        buf.set(col, row, '•', rgb(faded));
    }
}

fn paint_banner(buf: &mut CellBuf, session: &GameSession) {
    let Some(banner) = session.encouragement else {
        return;
    };
    if buf.height < 2 {
        return;
    }

    let text: Vec<char> = banner.text.chars().collect();
    if text.len() >= buf.width {
        return;
    }
    let start = (buf.width - text.len()) / 2;
    for (i, ch) in text.into_iter().enumerate() {
        buf.set(start + i, 1, ch, Color::Magenta);
    }
}
