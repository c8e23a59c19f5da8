//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no internal scheduling
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod geometry;
pub mod obstacle;
pub mod physics;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::Clock;
pub use collision::{first_collision, obstacle_hitbox, runner_hitbox};
pub use difficulty::{Difficulty, difficulty};
pub use geometry::Rect;
pub use obstacle::{
    Altitude, Bird, CactusCluster, CactusSegment, Obstacle, ObstacleKind, ObstacleRegistry,
};
pub use physics::{Advance, Runner};
pub use score::{ScoreTracker, ScoreUpdate};
pub use spawn::{Spawner, build_bird, build_cactus_cluster, roll_obstacle};
pub use state::{GameEvent, RunPhase, RunnerView, SimulationState, Snapshot};
pub use tick::{TickInput, tick};
