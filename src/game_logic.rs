//! Session orchestration: the run state machine and the per-frame tick.
//!
//! The tick is pure over the session aggregate plus an RNG and a monotonic
//! timestamp; audio side effects are returned as [`GameEvent`]s for the
//! caller to dispatch, which keeps the simulation testable without a live
//! audio device.

use crate::collision::check_collision;
use crate::constants::*;
use crate::game_state::{GamePhase, GameSession};
use crate::physics::{integrate_bird, update_particles};
use crate::scoring::{expire_encouragement, record_pass};
use crate::spawner::maybe_spawn;
use rand::Rng;

/// Fire-and-forget cues emitted by the simulation for the audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flap,
    Score,
    Hit,
    MusicStart,
    MusicStop,
}

/// Start (or restart) a run. The whole aggregate is rebuilt: bird, obstacle
/// and particle lists, score, speed, and spawn pacing. Only the high score
/// carries over.
pub fn start_session(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    let high_score = session.high_score;
    *session = GameSession::new(high_score);
    session.phase = GamePhase::Running;
    events.push(GameEvent::MusicStart);
}

/// Apply a flap command. Outside of a running session this is ignored.
pub fn flap(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    if !session.is_running() {
        return;
    }
    session.bird.velocity = FLAP_STRENGTH;
    events.push(GameEvent::Flap);
}

/// Advance the session by one frame.
///
/// Tick order: integrate & boundary check, maybe-spawn, per-obstacle scroll
/// + scoring + collision (stopping at the first hit), prune off-screen
/// obstacles, advance particles, expire the encouragement banner.
pub fn advance_session<R: Rng>(
    session: &mut GameSession,
    now_ms: u64,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.is_running() {
        return events;
    }

    if integrate_bird(&mut session.bird) {
        end_run(session, now_ms, &mut events);
        return events;
    }

    maybe_spawn(session, now_ms, rng);

    let mut hit = false;
    for i in 0..session.obstacles.len() {
        session.obstacles[i].x -= session.speed;

        if !session.obstacles[i].passed
            && session.obstacles[i].trailing_edge() < session.bird.x
        {
            session.obstacles[i].passed = true;
            record_pass(session, now_ms, rng);
            events.push(GameEvent::Score);
        }

        if check_collision(&session.bird, &session.obstacles[i]) {
            hit = true;
            break;
        }
    }

    if hit {
        events.push(GameEvent::Hit);
        end_run(session, now_ms, &mut events);
    }

    session.obstacles.retain(|o| o.trailing_edge() > 0.0);
    update_particles(&mut session.particles);
    expire_encouragement(session, now_ms);

    events
}

/// Running → GameOver: freeze ticking, fold the score into the high score,
/// and stop the background music. Persisting the high score is the caller's
/// job (it owns the store).
fn end_run(session: &mut GameSession, now_ms: u64, events: &mut Vec<GameEvent>) {
    session.phase = GamePhase::GameOver { at_ms: now_ms };
    if session.score > session.high_score {
        session.high_score = session.score;
        session.record_beaten = true;
    }
    events.push(GameEvent::MusicStop);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::Obstacle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn running_session() -> GameSession {
        let mut session = GameSession::new(0);
        let mut events = Vec::new();
        start_session(&mut session, &mut events);
        // Park the bird mid-air so gravity needs a while to matter.
        session.bird.y = 300.0;
        session.bird.velocity = 0.0;
        session
    }

    #[test]
    fn test_start_resets_everything_but_high_score() {
        let mut session = GameSession::new(12);
        session.score = 8;
        session.speed = 3.3;
        session.obstacles.push(Obstacle::new(100.0, 300.0));
        session.phase = GamePhase::GameOver { at_ms: 99 };

        let mut events = Vec::new();
        start_session(&mut session, &mut events);

        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 12);
        assert!((session.speed - INITIAL_SPEED).abs() < f64::EPSILON);
        assert!(session.obstacles.is_empty());
        assert!(session.particles.is_empty());
        assert_eq!(events, vec![GameEvent::MusicStart]);
    }

    #[test]
    fn test_flap_only_while_running() {
        let mut session = GameSession::new(0);
        let mut events = Vec::new();

        flap(&mut session, &mut events);
        assert!(events.is_empty());

        start_session(&mut session, &mut events);
        events.clear();
        flap(&mut session, &mut events);
        assert_eq!(events, vec![GameEvent::Flap]);
        assert!((session.bird.velocity - FLAP_STRENGTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_idle_session_does_not_tick() {
        let mut session = GameSession::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let y = session.bird.y;

        let events = advance_session(&mut session, 5000, &mut rng);

        assert!(events.is_empty());
        assert!((session.bird.y - y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pass_through_scores_exactly_once() {
        let mut session = running_session();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        session.last_spawn_ms = u64::MAX / 2; // keep the spawner quiet

        // Trailing edge lands just right of the bird; one tick of scroll
        // pushes it strictly past.
        let x = session.bird.x - OBSTACLE_WIDTH + session.speed / 2.0;
        session.obstacles.push(Obstacle::new(x, session.bird.y));

        let events = advance_session(&mut session, 16, &mut rng);
        assert!(events.contains(&GameEvent::Score));
        assert_eq!(session.score, 1);

        // Re-checking the same obstacle never re-scores.
        let events = advance_session(&mut session, 32, &mut rng);
        assert!(!events.contains(&GameEvent::Score));
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_ground_contact_ends_run_without_hit_tone() {
        let mut session = running_session();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        session.bird.y = WORLD_HEIGHT - GROUND_HEIGHT - session.bird.height - 0.5;
        session.bird.velocity = 5.0;

        let events = advance_session(&mut session, 7000, &mut rng);

        assert!(matches!(session.phase, GamePhase::GameOver { at_ms: 7000 }));
        assert_eq!(events, vec![GameEvent::MusicStop]);
    }

    #[test]
    fn test_obstacle_collision_emits_hit_then_music_stop() {
        let mut session = running_session();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        session.last_spawn_ms = u64::MAX / 2;

        // Trunk overlap with the bird far outside the gap.
        session
            .obstacles
            .push(Obstacle::new(session.bird.x - 10.0, session.bird.y + 300.0));

        let events = advance_session(&mut session, 100, &mut rng);

        assert!(matches!(session.phase, GamePhase::GameOver { .. }));
        assert_eq!(events, vec![GameEvent::Hit, GameEvent::MusicStop]);
    }

    #[test]
    fn test_high_score_updates_in_memory_only_when_beaten() {
        let mut session = running_session();
        session.high_score = 12;
        session.score = 8;
        let mut events = Vec::new();

        end_run(&mut session, 0, &mut events);
        assert_eq!(session.high_score, 12);
        assert!(!session.record_beaten);

        let mut session = running_session();
        session.high_score = 12;
        session.score = 13;
        end_run(&mut session, 0, &mut events);
        assert_eq!(session.high_score, 13);
        assert!(session.record_beaten);
    }

    #[test]
    fn test_off_screen_obstacles_are_pruned() {
        let mut session = running_session();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        session.last_spawn_ms = u64::MAX / 2;

        let mut gone = Obstacle::new(-OBSTACLE_WIDTH + 0.5, 300.0);
        gone.passed = true;
        session.obstacles.push(gone);
        let mut kept = Obstacle::new(600.0, 300.0);
        kept.passed = true;
        session.obstacles.push(kept);

        advance_session(&mut session, 16, &mut rng);

        assert_eq!(session.obstacles.len(), 1);
        assert!(session.obstacles[0].x > 0.0);
    }

    #[test]
    fn test_speed_step_scenario_nine_to_ten() {
        let mut session = running_session();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        session.last_spawn_ms = u64::MAX / 2;
        session.score = 9;

        let x = session.bird.x - OBSTACLE_WIDTH + session.speed / 2.0;
        session.obstacles.push(Obstacle::new(x, session.bird.y));

        advance_session(&mut session, 16, &mut rng);

        assert_eq!(session.score, 10);
        assert!((session.speed - (INITIAL_SPEED + SPEED_INCREMENT)).abs() < 1e-9);
    }

    #[test]
    fn test_collision_stops_at_first_obstacle() {
        let mut session = running_session();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        session.last_spawn_ms = u64::MAX / 2;

        let colliding = Obstacle::new(session.bird.x - 10.0, session.bird.y + 300.0);
        session.obstacles.push(colliding);
        // A second obstacle behind the first; its scroll must not happen
        // after the run ends this tick.
        session.obstacles.push(Obstacle::new(700.0, 300.0));

        advance_session(&mut session, 100, &mut rng);

        assert!((session.obstacles[1].x - 700.0).abs() < f64::EPSILON);
    }
}
