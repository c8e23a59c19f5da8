//! Dino Runner - A side-scrolling jump-and-duck runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `persistence`: High score storage backends
//! - `platform`: Host glue (input latching, frame pacing, web bindings)

pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use persistence::{HighScoreStore, MemoryStore, StoreError};
pub use sim::{GameEvent, RunPhase, SimulationState, Snapshot, TickInput, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// Defaults for [`Tuning`]. The playfield uses screen coordinates: x grows to
/// the right, y grows downward, the ground line is a horizontal y value.
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame (seconds) fed into the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 200.0;
    pub const GROUND_Y: f32 = 150.0;

    /// Runner defaults
    pub const RUNNER_X: f32 = 40.0;
    pub const RUNNER_WIDTH: f32 = 40.0;
    pub const RUNNER_HEIGHT: f32 = 40.0;
    pub const DUCK_HEIGHT: f32 = 26.0;

    /// Physics (units per tick)
    pub const GRAVITY: f32 = 0.7;
    pub const JUMP_VELOCITY: f32 = -12.0;

    /// Difficulty curve
    pub const BASE_SPEED: f32 = 6.0;
    pub const SPEED_CAP: f32 = 14.0;
    pub const SPEED_SCORE_DIVISOR: u32 = 120;
    pub const BASE_SPAWN_GAP: u32 = 80;
    pub const MIN_SPAWN_GAP: u32 = 50;
    pub const GAP_SCORE_DIVISOR: u32 = 150;

    /// Spawn tables
    pub const BIRD_CHANCE: f32 = 0.25;
    /// Birds only appear once the speed is strictly above this
    pub const BIRD_MIN_SPEED: f32 = 7.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 20.0;
    /// Bird baseline heights above the ground line (high, mid, low)
    pub const BIRD_ALTITUDES: [f32; 3] = [70.0, 50.0, 30.0];
    pub const CACTUS_WIDTHS: [f32; 3] = [12.0, 16.0, 20.0];
    pub const CACTUS_HEIGHTS: [f32; 3] = [28.0, 36.0, 46.0];
    pub const CACTUS_GAP: f32 = 6.0;
    pub const MAX_CLUSTER: u32 = 3;

    /// Fairness insets for the runner hitbox
    pub const HITBOX_INSET_X: f32 = 6.0;
    pub const HITBOX_INSET_TOP: f32 = 4.0;
    pub const HITBOX_INSET_BOTTOM: f32 = 4.0;
    pub const DUCK_HITBOX_INSET_TOP: f32 = 2.0;
    pub const DUCK_HITBOX_INSET_BOTTOM: f32 = 6.0;
    /// Bird hitbox top sits this far above the bird baseline
    pub const BIRD_HITBOX_RISE: f32 = 16.0;

    /// Obstacles are dropped once their right edge is this far left of the field
    pub const PRUNE_MARGIN: f32 = 20.0;
}
