//! Time-paced obstacle generation.

use crate::constants::*;
use crate::game_state::{GameSession, Obstacle};
use rand::Rng;

/// Bounds for the randomized gap-center. The range keeps the gap clear of
/// the ceiling and leaves a margin above the ground band on every spawn.
pub fn gap_center_bounds() -> (f64, f64) {
    (
        PIPE_GAP,
        WORLD_HEIGHT - PIPE_GAP - GROUND_HEIGHT - SPAWN_BOTTOM_MARGIN,
    )
}

/// Append one obstacle at the right edge when the spawn interval has
/// elapsed. At most one obstacle spawns per tick. Returns whether a spawn
/// happened.
///
/// Spacing between obstacles is derived from interval times scroll speed,
/// not enforced as a minimum distance.
pub fn maybe_spawn<R: Rng>(session: &mut GameSession, now_ms: u64, rng: &mut R) -> bool {
    if now_ms.saturating_sub(session.last_spawn_ms) <= SPAWN_INTERVAL_MS {
        return false;
    }

    let (min_center, max_center) = gap_center_bounds();
    let gap_center = rng.gen_range(min_center..=max_center);

    session.obstacles.push(Obstacle::new(WORLD_WIDTH, gap_center));
    session.last_spawn_ms = now_ms;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_waits_for_interval() {
        let mut session = GameSession::new(0);
        session.last_spawn_ms = 10_000;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert!(!maybe_spawn(&mut session, 10_500, &mut rng));
        assert!(!maybe_spawn(&mut session, 12_000, &mut rng));
        assert!(session.obstacles.is_empty());

        assert!(maybe_spawn(&mut session, 12_001, &mut rng));
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(session.last_spawn_ms, 12_001);
    }

    #[test]
    fn test_spawned_obstacle_enters_at_right_edge() {
        let mut session = GameSession::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        assert!(maybe_spawn(&mut session, 3000, &mut rng));
        let obstacle = &session.obstacles[0];
        assert!((obstacle.x - WORLD_WIDTH).abs() < f64::EPSILON);
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_gap_center_always_within_bounds() {
        let (min_center, max_center) = gap_center_bounds();

        for seed in 0..200 {
            let mut session = GameSession::new(0);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            maybe_spawn(&mut session, 3000, &mut rng);

            let center = session.obstacles[0].gap_center;
            assert!(center >= min_center, "seed {seed}: {center} below bound");
            assert!(center <= max_center, "seed {seed}: {center} above bound");
        }
    }

    #[test]
    fn test_one_spawn_per_tick() {
        let mut session = GameSession::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        // Far past several intervals; still only one obstacle appears.
        assert!(maybe_spawn(&mut session, 60_000, &mut rng));
        assert!(!maybe_spawn(&mut session, 60_016, &mut rng));
        assert_eq!(session.obstacles.len(), 1);
    }
}
