// Logical world dimensions. The UI scales these to the terminal at draw time.
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 20.0;

// Bird physics. Per-frame constants, not time-scaled: the simulation assumes
// a fixed frame rate (FRAME_INTERVAL_MS).
pub const GRAVITY: f64 = 0.15;
pub const FLAP_STRENGTH: f64 = -4.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const WING_PHASE_STEP: f64 = 0.2;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 60.0;
pub const PIPE_GAP: f64 = 180.0;
pub const SPAWN_INTERVAL_MS: u64 = 2000;
/// Extra clearance kept between the lowest gap-center and the ground band.
pub const SPAWN_BOTTOM_MARGIN: f64 = 100.0;

// Collision geometry. The bird's hitbox is a quarter of the nominal sprite;
// the trunk occupies the central half of the obstacle width; foliage circles
// sit at the gap edges.
pub const BIRD_HITBOX_RATIO: f64 = 0.25;
pub const TRUNK_WIDTH_RATIO: f64 = 0.5;
pub const FOLIAGE_RADIUS_RATIO: f64 = 0.6;

// Scroll speed
pub const INITIAL_SPEED: f64 = 1.5;
pub const SPEED_INCREMENT: f64 = 0.3;
pub const SPEED_STEP_POINTS: u32 = 10;

// Scoring feedback
pub const PARTICLES_PER_BURST: usize = 30;
pub const PARTICLE_LIFE_DECAY: f64 = 0.02;
pub const ENCOURAGEMENT_VISIBLE_MS: u64 = 3000;

/// Delay between the run ending and the game-over view appearing.
pub const GAME_OVER_DELAY_MS: u64 = 1000;

// Frame timing (~60 fps)
pub const FRAME_INTERVAL_MS: u64 = 16;
