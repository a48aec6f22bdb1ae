//! Bird integration, boundary policy, and particle advancement.

use crate::constants::*;
use crate::game_state::{Bird, Particle};

/// Advance the bird by one frame: gravity, position, wing animation, and the
/// ground/ceiling policy. Returns `true` when the bird hit the ground; the
/// caller is responsible for ending the run.
///
/// Ceiling contact clamps to the top and zeroes the velocity but never ends
/// the run. The asymmetry is deliberate.
pub fn integrate_bird(bird: &mut Bird) -> bool {
    bird.velocity += GRAVITY;
    bird.y += bird.velocity;

    advance_wing(bird);

    if bird.y + bird.height > WORLD_HEIGHT - GROUND_HEIGHT {
        bird.y = WORLD_HEIGHT - GROUND_HEIGHT - bird.height;
        return true;
    }
    if bird.y < 0.0 {
        bird.y = 0.0;
        bird.velocity = 0.0;
    }
    false
}

/// Triangle-wave wing oscillation: fixed step, direction reversed once the
/// phase leaves [-1, 1].
fn advance_wing(bird: &mut Bird) {
    bird.wing_phase += WING_PHASE_STEP * bird.wing_direction;
    if bird.wing_phase > 1.0 || bird.wing_phase < -1.0 {
        bird.wing_direction = -bird.wing_direction;
    }
}

/// Advance every particle and drop the exhausted ones.
pub fn update_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.x += particle.vx;
        particle.y += particle.vy;
        particle.life -= PARTICLE_LIFE_DECAY;
    }
    particles.retain(|p| p.life > 0.0);
}
