//! Session-scoped entity state.
//!
//! Everything a run owns lives in one `GameSession` aggregate. Starting a new
//! run rebuilds the whole aggregate; nothing here survives across sessions
//! except the high score.

use crate::constants::*;

/// The player-controlled bird.
///
/// The ground check treats `y` as the sprite top; collision geometry treats
/// it as the sprite center.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Horizontal position, fixed for the life of the session.
    pub x: f64,
    /// Vertical position. Row 0 is the ceiling.
    pub y: f64,
    /// Vertical velocity, positive = downward.
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    /// Wing animation phase, oscillating in [-1, 1]. Cosmetic only.
    pub wing_phase: f64,
    /// +1.0 or -1.0, flipped when the phase leaves [-1, 1].
    pub wing_direction: f64,
}

impl Bird {
    /// A freshly spawned bird: mid-height, with a half-strength upward
    /// impulse so the first moments of a run are survivable without input.
    pub fn spawn() -> Self {
        Self {
            x: WORLD_WIDTH / 4.0,
            y: WORLD_HEIGHT / 2.0,
            velocity: FLAP_STRENGTH / 2.0,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            wing_phase: 0.0,
            wing_direction: 1.0,
        }
    }
}

/// A tree obstacle: a trunk pair with a passable gap between the crowns.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// X of the leading (left) edge. Decreases by the scroll speed each tick.
    pub x: f64,
    /// Vertical midpoint of the gap. Fixed at creation.
    pub gap_center: f64,
    /// Set exactly once, when the trailing edge crosses the bird.
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_center: f64) -> Self {
        Self {
            x,
            gap_center,
            passed: false,
        }
    }

    /// Bottom edge of the upper tree.
    pub fn gap_top(&self) -> f64 {
        self.gap_center - PIPE_GAP / 2.0
    }

    /// Top edge of the lower tree.
    pub fn gap_bottom(&self) -> f64 {
        self.gap_center + PIPE_GAP / 2.0
    }

    pub fn trailing_edge(&self) -> f64 {
        self.x + OBSTACLE_WIDTH
    }
}

/// Fixed particle palette (gold, tomato, royal blue, lime, pink, purple).
pub const PARTICLE_PALETTE: [(u8, u8, u8); 6] = [
    (255, 215, 0),
    (255, 99, 71),
    (65, 105, 225),
    (50, 205, 50),
    (255, 105, 180),
    (147, 112, 219),
];

/// A celebration particle spawned on scoring events.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Index into [`PARTICLE_PALETTE`].
    pub color: usize,
    pub vx: f64,
    pub vy: f64,
    /// Remaining life in [0, 1]. Removed once it reaches zero.
    pub life: f64,
}

/// Encouragement banner shown after each pass-through.
#[derive(Debug, Clone, Copy)]
pub struct Encouragement {
    pub text: &'static str,
    pub shown_at_ms: u64,
}

/// Run lifecycle. Exactly one of these at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first run, or after a restart prompt was accepted.
    Idle,
    Running,
    /// The run ended at `at_ms`; the game-over view appears after a delay.
    GameOver { at_ms: u64 },
}

/// The owned aggregate for one run plus the cross-session high score.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub phase: GamePhase,
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    pub particles: Vec<Particle>,
    pub score: u32,
    /// Monotonically non-decreasing across sessions.
    pub high_score: u32,
    /// Horizontal scroll speed applied to all obstacles each tick.
    pub speed: f64,
    /// Timestamp of the last obstacle spawn, for spawn pacing.
    pub last_spawn_ms: u64,
    pub encouragement: Option<Encouragement>,
    /// True once this run has pushed the high score past its old value.
    pub record_beaten: bool,
}

impl GameSession {
    /// An idle session carrying the persisted high score.
    pub fn new(high_score: u32) -> Self {
        Self {
            phase: GamePhase::Idle,
            bird: Bird::spawn(),
            obstacles: Vec::new(),
            particles: Vec::new(),
            score: 0,
            high_score,
            speed: INITIAL_SPEED,
            last_spawn_ms: 0,
            encouragement: None,
            record_beaten: false,
        }
    }

    pub fn current_score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Whether the game-over display delay has elapsed.
    pub fn game_over_view_ready(&self, now_ms: u64) -> bool {
        match self.phase {
            GamePhase::GameOver { at_ms } => now_ms.saturating_sub(at_ms) >= GAME_OVER_DELAY_MS,
            _ => false,
        }
    }
}
