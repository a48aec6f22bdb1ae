//! Two-phase obstacle collision: trunk rectangle, then foliage circles.
//!
//! The bird's hitbox is deliberately smaller than its sprite
//! ([`BIRD_HITBOX_RATIO`]), which makes near misses feel fair. Which of the
//! two geometric tests applies depends on whether the shrunk box overlaps
//! the trunk horizontally.

use crate::constants::*;
use crate::game_state::{Bird, Obstacle};

/// Which collision test applies to a bird/obstacle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionZone {
    /// The shrunk box overlaps the trunk's horizontal extent: collide unless
    /// the box sits entirely inside the gap.
    TrunkOverlap,
    /// No trunk overlap: only the two foliage circles at the gap edges can
    /// be hit, tested from the bird's center.
    FoliageOnly,
}

fn trunk_extent(obstacle: &Obstacle) -> (f64, f64) {
    let inset = OBSTACLE_WIDTH * (1.0 - TRUNK_WIDTH_RATIO) / 2.0;
    (obstacle.x + inset, obstacle.x + inset + OBSTACLE_WIDTH * TRUNK_WIDTH_RATIO)
}

/// Decide which zone test applies.
pub fn classify(bird: &Bird, obstacle: &Obstacle) -> CollisionZone {
    let half_w = bird.width * BIRD_HITBOX_RATIO;
    let (trunk_left, trunk_right) = trunk_extent(obstacle);

    if bird.x + half_w < trunk_left || bird.x - half_w > trunk_right {
        CollisionZone::FoliageOnly
    } else {
        CollisionZone::TrunkOverlap
    }
}

/// True when the bird collides with this obstacle.
pub fn check_collision(bird: &Bird, obstacle: &Obstacle) -> bool {
    let half_w = bird.width * BIRD_HITBOX_RATIO;
    let half_h = bird.height * BIRD_HITBOX_RATIO;

    match classify(bird, obstacle) {
        CollisionZone::FoliageOnly => {
            let center_x = obstacle.x + OBSTACLE_WIDTH / 2.0;
            let radius = OBSTACLE_WIDTH * FOLIAGE_RADIUS_RATIO;

            let hits_circle = |cy: f64| {
                let dx = bird.x - center_x;
                let dy = bird.y - cy;
                (dx * dx + dy * dy).sqrt() < half_w + radius
            };

            hits_circle(obstacle.gap_top()) || hits_circle(obstacle.gap_bottom())
        }
        CollisionZone::TrunkOverlap => {
            let inside_gap =
                bird.y - half_h > obstacle.gap_top() && bird.y + half_h < obstacle.gap_bottom();
            !inside_gap
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(x: f64, y: f64) -> Bird {
        let mut bird = Bird::spawn();
        bird.x = x;
        bird.y = y;
        bird
    }

    #[test]
    fn test_classify_trunk_vs_foliage() {
        let obstacle = Obstacle::new(300.0, 300.0);
        // Trunk spans [315, 345]. Bird hitbox half-width is 10.
        assert_eq!(
            classify(&bird_at(330.0, 300.0), &obstacle),
            CollisionZone::TrunkOverlap
        );
        assert_eq!(
            classify(&bird_at(304.0, 300.0), &obstacle),
            CollisionZone::FoliageOnly
        );
        assert_eq!(
            classify(&bird_at(360.0, 300.0), &obstacle),
            CollisionZone::FoliageOnly
        );
    }

    #[test]
    fn test_bird_inside_gap_does_not_collide() {
        let obstacle = Obstacle::new(190.0, 300.0);
        // Trunk overlap, shrunk box fully inside the 180-unit gap.
        let bird = bird_at(200.0, 300.0);
        assert_eq!(classify(&bird, &obstacle), CollisionZone::TrunkOverlap);
        assert!(!check_collision(&bird, &obstacle));
    }

    #[test]
    fn test_one_unit_outside_gap_collides() {
        let obstacle = Obstacle::new(190.0, 300.0);
        let half_h = BIRD_HEIGHT * BIRD_HITBOX_RATIO;

        // Hitbox top exactly on the gap edge already collides (the inside
        // test is strict), and one unit above certainly does.
        let on_edge = bird_at(200.0, obstacle.gap_top() + half_h);
        assert!(check_collision(&on_edge, &obstacle));
        let above = bird_at(200.0, obstacle.gap_top() + half_h - 1.0);
        assert!(check_collision(&above, &obstacle));

        // One unit back inside clears it.
        let inside = bird_at(200.0, obstacle.gap_top() + half_h + 1.0);
        assert!(!check_collision(&inside, &obstacle));
    }

    #[test]
    fn test_lower_gap_edge_is_symmetric() {
        let obstacle = Obstacle::new(190.0, 300.0);
        let half_h = BIRD_HEIGHT * BIRD_HITBOX_RATIO;

        let inside = bird_at(200.0, obstacle.gap_bottom() - half_h - 1.0);
        assert!(!check_collision(&inside, &obstacle));
        let below = bird_at(200.0, obstacle.gap_bottom() - half_h + 1.0);
        assert!(check_collision(&below, &obstacle));
    }

    #[test]
    fn test_foliage_circle_hit_and_miss() {
        let obstacle = Obstacle::new(300.0, 300.0);
        let radius = OBSTACLE_WIDTH * FOLIAGE_RADIUS_RATIO;
        let half_w = BIRD_WIDTH * BIRD_HITBOX_RATIO;
        let reach = radius + half_w; // 46 units from the foliage center

        // Left of the trunk, vertically level with the upper foliage center.
        let center_x = obstacle.x + OBSTACLE_WIDTH / 2.0;
        let grazing = bird_at(center_x - reach + 1.0, obstacle.gap_top());
        assert_eq!(classify(&grazing, &obstacle), CollisionZone::FoliageOnly);
        assert!(check_collision(&grazing, &obstacle));

        let clear = bird_at(center_x - reach - 1.0, obstacle.gap_top());
        assert_eq!(classify(&clear, &obstacle), CollisionZone::FoliageOnly);
        assert!(!check_collision(&clear, &obstacle));
    }

    #[test]
    fn test_foliage_miss_when_level_with_gap_center() {
        // Beside the trunk but far from both foliage centers: no collision
        // even though the bird is horizontally close to the obstacle.
        let obstacle = Obstacle::new(300.0, 300.0);
        let bird = bird_at(302.0, 300.0);
        assert_eq!(classify(&bird, &obstacle), CollisionZone::FoliageOnly);
        assert!(!check_collision(&bird, &obstacle));
    }
}
