//! Difficulty curve
//!
//! Score is the only pacing knob: speed climbs and spawn gaps shrink as the
//! run progresses, each clamped to a limit.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Pacing for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Horizontal obstacle speed (units per tick)
    pub speed: f32,
    /// Ticks that must elapse between two spawns
    pub spawn_gap: u32,
}

/// Compute pacing from the cumulative score
pub fn difficulty(score: u32, tuning: &Tuning) -> Difficulty {
    let speed_steps = (score / tuning.speed_score_divisor) as f32;
    let speed = (tuning.base_speed + speed_steps).min(tuning.speed_cap);

    let gap_steps = score / tuning.gap_score_divisor;
    let spawn_gap = tuning
        .base_spawn_gap
        .saturating_sub(gap_steps)
        .max(tuning.min_spawn_gap);

    Difficulty { speed, spawn_gap }
}
