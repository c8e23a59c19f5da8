//! Procedural obstacle spawning
//!
//! Randomness is always passed in explicitly so a seeded generator
//! reproduces the same obstacle sequence.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::obstacle::{Altitude, Bird, CactusCluster, CactusSegment, ObstacleKind};
use crate::tuning::Tuning;

/// Spawn cadence bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    /// Run tick of the last spawn (0 at run start)
    pub last_spawn_tick: u64,
}

impl Spawner {
    /// True (and the counter resets) once more than `spawn_gap` ticks passed
    pub fn due(&mut self, run_ticks: u64, difficulty: &Difficulty) -> bool {
        let since = run_ticks.saturating_sub(self.last_spawn_tick);
        if since > u64::from(difficulty.spawn_gap) {
            self.last_spawn_tick = run_ticks;
            true
        } else {
            false
        }
    }

    /// Emit a new obstacle shape if one is due this tick
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        run_ticks: u64,
        difficulty: &Difficulty,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<ObstacleKind> {
        if self.due(run_ticks, difficulty) {
            Some(roll_obstacle(rng, difficulty.speed, tuning))
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.last_spawn_tick = 0;
    }
}

/// Pick a variant and its shape
///
/// Birds only show up once the game is fast enough, and even then only a
/// quarter of the time.
pub fn roll_obstacle<R: Rng>(rng: &mut R, speed: f32, tuning: &Tuning) -> ObstacleKind {
    let bird_roll: f32 = rng.random();
    if bird_roll < tuning.bird_chance && speed > tuning.bird_min_speed {
        let altitude = Altitude::ALL[rng.random_range(0..Altitude::ALL.len())];
        ObstacleKind::Bird(build_bird(altitude, tuning))
    } else {
        let count = rng.random_range(1..=tuning.max_cluster);
        let shapes: Vec<(f32, f32)> = (0..count)
            .map(|_| {
                let w = tuning.cactus_widths.choose(&mut *rng).copied().unwrap_or(0.0);
                let h = tuning.cactus_heights.choose(&mut *rng).copied().unwrap_or(0.0);
                (w, h)
            })
            .collect();
        ObstacleKind::Cactus(build_cactus_cluster(&shapes, tuning.cactus_gap))
    }
}

/// Lay out `(width, height)` segments left to right with a fixed gap
pub fn build_cactus_cluster(shapes: &[(f32, f32)], gap: f32) -> CactusCluster {
    let mut segments = Vec::with_capacity(shapes.len());
    let mut offset = 0.0;
    for &(width, height) in shapes {
        segments.push(CactusSegment {
            width,
            height,
            x_offset: offset,
        });
        offset += width + gap;
    }

    let total_width = if segments.is_empty() { 0.0 } else { offset - gap };
    let max_height = segments.iter().map(|s| s.height).fold(0.0, f32::max);

    CactusCluster {
        segments,
        total_width,
        max_height,
    }
}

/// A bird in the given band
pub fn build_bird(altitude: Altitude, tuning: &Tuning) -> Bird {
    Bird {
        width: tuning.bird_width,
        height: tuning.bird_height,
        altitude,
        baseline: tuning.ground_y - tuning.bird_altitudes[altitude.index()],
    }
}
