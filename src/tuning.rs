//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; hosts may override any subset from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants for one simulation instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub field_width: f32,
    pub ground_y: f32,

    // === Runner ===
    pub runner_x: f32,
    pub runner_width: f32,
    pub runner_height: f32,
    pub duck_height: f32,
    pub gravity: f32,
    pub jump_velocity: f32,

    // === Difficulty curve ===
    pub base_speed: f32,
    pub speed_cap: f32,
    pub speed_score_divisor: u32,
    pub base_spawn_gap: u32,
    pub min_spawn_gap: u32,
    pub gap_score_divisor: u32,

    // === Spawning ===
    pub bird_chance: f32,
    pub bird_min_speed: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub bird_altitudes: [f32; 3],
    pub cactus_widths: Vec<f32>,
    pub cactus_heights: Vec<f32>,
    pub cactus_gap: f32,
    pub max_cluster: u32,

    // === Fairness hitboxes ===
    pub hitbox_inset_x: f32,
    pub hitbox_inset_top: f32,
    pub hitbox_inset_bottom: f32,
    pub duck_hitbox_inset_top: f32,
    pub duck_hitbox_inset_bottom: f32,
    pub bird_hitbox_rise: f32,

    pub prune_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            ground_y: GROUND_Y,

            runner_x: RUNNER_X,
            runner_width: RUNNER_WIDTH,
            runner_height: RUNNER_HEIGHT,
            duck_height: DUCK_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            base_speed: BASE_SPEED,
            speed_cap: SPEED_CAP,
            speed_score_divisor: SPEED_SCORE_DIVISOR,
            base_spawn_gap: BASE_SPAWN_GAP,
            min_spawn_gap: MIN_SPAWN_GAP,
            gap_score_divisor: GAP_SCORE_DIVISOR,

            bird_chance: BIRD_CHANCE,
            bird_min_speed: BIRD_MIN_SPEED,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_altitudes: BIRD_ALTITUDES,
            cactus_widths: CACTUS_WIDTHS.to_vec(),
            cactus_heights: CACTUS_HEIGHTS.to_vec(),
            cactus_gap: CACTUS_GAP,
            max_cluster: MAX_CLUSTER,

            hitbox_inset_x: HITBOX_INSET_X,
            hitbox_inset_top: HITBOX_INSET_TOP,
            hitbox_inset_bottom: HITBOX_INSET_BOTTOM,
            duck_hitbox_inset_top: DUCK_HITBOX_INSET_TOP,
            duck_hitbox_inset_bottom: DUCK_HITBOX_INSET_BOTTOM,
            bird_hitbox_rise: BIRD_HITBOX_RISE,

            prune_margin: PRUNE_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.field_width <= self.runner_x + self.runner_width {
            return invalid("field_width", "must leave room right of the runner");
        }
        if self.gravity <= 0.0 {
            return invalid("gravity", "must be positive");
        }
        if self.jump_velocity >= 0.0 {
            return invalid("jump_velocity", "must be negative (upward)");
        }
        if self.runner_width <= 2.0 * self.hitbox_inset_x {
            return invalid("hitbox_inset_x", "leaves no collidable width");
        }
        if self.runner_height <= self.hitbox_inset_top + self.hitbox_inset_bottom {
            return invalid("hitbox_inset_top", "leaves no collidable height");
        }
        if self.duck_height <= 0.0 || self.duck_height >= self.runner_height {
            return invalid("duck_height", "must be between 0 and the runner height");
        }
        if self.duck_height <= self.duck_hitbox_inset_top + self.duck_hitbox_inset_bottom {
            return invalid("duck_hitbox_inset_top", "leaves no collidable duck height");
        }
        if self.speed_score_divisor == 0 {
            return invalid("speed_score_divisor", "must be non-zero");
        }
        if self.gap_score_divisor == 0 {
            return invalid("gap_score_divisor", "must be non-zero");
        }
        if self.speed_cap < self.base_speed {
            return invalid("speed_cap", "must not be below base_speed");
        }
        if self.min_spawn_gap > self.base_spawn_gap {
            return invalid("min_spawn_gap", "must not exceed base_spawn_gap");
        }
        if !(0.0..=1.0).contains(&self.bird_chance) {
            return invalid("bird_chance", "must be a probability");
        }
        if self.cactus_widths.is_empty() || self.cactus_heights.is_empty() {
            return invalid("cactus_widths", "spawn tables must not be empty");
        }
        if self.max_cluster == 0 {
            return invalid("max_cluster", "must be at least 1");
        }
        Ok(())
    }

    /// Runner top edge when standing on the ground
    #[inline]
    pub fn runner_ground_top(&self) -> f32 {
        self.ground_y - self.runner_height
    }
}
