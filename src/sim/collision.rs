//! Collision detection between the runner and obstacles
//!
//! Drawn and collidable sizes differ on purpose: the runner's hitbox is
//! inset from its silhouette so grazing a cactus by a pixel is not a death.
//! Cacti collide as one box spanning the whole cluster.

use super::geometry::Rect;
use super::obstacle::{Obstacle, ObstacleKind};
use super::physics::Runner;
use crate::tuning::Tuning;

/// Fairness-adjusted runner hitbox
pub fn runner_hitbox(runner: &Runner, tuning: &Tuning) -> Rect {
    let inset_x = tuning.hitbox_inset_x;
    if runner.is_ducking(tuning.ground_y) {
        let top =
            runner.pos.y + (runner.height - runner.duck_height) + tuning.duck_hitbox_inset_top;
        Rect::new(
            runner.pos.x + inset_x,
            top,
            runner.width - 2.0 * inset_x,
            runner.duck_height - tuning.duck_hitbox_inset_top - tuning.duck_hitbox_inset_bottom,
        )
    } else {
        Rect::new(runner.pos.x, runner.pos.y, runner.width, runner.height).inset(
            inset_x,
            tuning.hitbox_inset_top,
            inset_x,
            tuning.hitbox_inset_bottom,
        )
    }
}

/// Obstacle hitbox: cluster box for cacti, fixed box for birds
pub fn obstacle_hitbox(obstacle: &Obstacle, tuning: &Tuning) -> Rect {
    match &obstacle.kind {
        ObstacleKind::Cactus(cluster) => Rect::new(
            obstacle.x,
            tuning.ground_y - cluster.max_height,
            cluster.total_width,
            cluster.max_height,
        ),
        ObstacleKind::Bird(bird) => Rect::new(
            obstacle.x,
            bird.baseline - tuning.bird_hitbox_rise,
            bird.width,
            bird.height,
        ),
    }
}

/// First obstacle (in spawn order) the runner overlaps, if any
pub fn first_collision<'a>(
    runner: &Runner,
    obstacles: &'a [Obstacle],
    tuning: &Tuning,
) -> Option<&'a Obstacle> {
    let hitbox = runner_hitbox(runner, tuning);
    obstacles
        .iter()
        .find(|o| hitbox.overlaps(&obstacle_hitbox(o, tuning)))
}
