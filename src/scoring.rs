//! Pass-through scoring and its feedback side effects.

use crate::constants::*;
use crate::game_state::{Encouragement, GameSession, Particle, PARTICLE_PALETTE};
use rand::Rng;

/// Messages flashed after each pass-through.
pub const ENCOURAGEMENTS: [&str; 15] = [
    "You're the best!",
    "Keep flying, don't stop!",
    "Even the bird is impressed!",
    "Wow, that was amazing!",
    "Soaring higher than an eagle!",
    "Your moves are unreal!",
    "What a slick maneuver!",
    "Incredible, take a bow!",
    "A true gaming genius!",
    "That score makes me jealous!",
    "What a mighty bird!",
    "Pro-level piloting!",
    "A master of flight!",
    "Textbook-perfect run!",
    "Your bird flies with style!",
];

/// Record a pass-through: bump the score, step up the scroll speed at every
/// tenth point, burst particles at the bird, and flash an encouragement.
pub fn record_pass<R: Rng>(session: &mut GameSession, now_ms: u64, rng: &mut R) {
    session.score += 1;

    if session.score % SPEED_STEP_POINTS == 0 {
        session.speed += SPEED_INCREMENT;
    }

    let (x, y) = (session.bird.x, session.bird.y);
    spawn_burst(&mut session.particles, x, y, rng);

    session.encouragement = Some(Encouragement {
        text: ENCOURAGEMENTS[rng.gen_range(0..ENCOURAGEMENTS.len())],
        shown_at_ms: now_ms,
    });
}

/// Append a fixed-size burst of randomized particles at the given point.
pub fn spawn_burst<R: Rng>(particles: &mut Vec<Particle>, x: f64, y: f64, rng: &mut R) {
    for _ in 0..PARTICLES_PER_BURST {
        particles.push(Particle {
            x,
            y,
            radius: 3.0 + rng.gen_range(0.0..5.0),
            color: rng.gen_range(0..PARTICLE_PALETTE.len()),
            vx: rng.gen_range(-4.0..4.0),
            vy: rng.gen_range(-4.0..4.0),
            life: 1.0,
        });
    }
}

/// Drop the encouragement banner once its display window has elapsed.
pub fn expire_encouragement(session: &mut GameSession, now_ms: u64) {
    if let Some(banner) = session.encouragement {
        if now_ms.saturating_sub(banner.shown_at_ms) >= ENCOURAGEMENT_VISIBLE_MS {
            session.encouragement = None;
        }
    }
}
