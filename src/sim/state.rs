//! Game state and core simulation types
//!
//! Everything one simulation instance owns lives in [`SimulationState`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::difficulty::{Difficulty, difficulty};
use super::obstacle::{Obstacle, ObstacleRegistry};
use super::physics::Runner;
use super::score::ScoreTracker;
use super::spawn::Spawner;
use crate::persistence::{HighScoreStore, load_high_score};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for the first start intent
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Runner hit an obstacle; frozen until restart
    GameOver,
}

/// Things that happened during a tick, for the host (sound, dust, HUD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Started,
    Restarted,
    Jumped,
    Landed,
    Spawned { id: u32 },
    Passed { id: u32, score: u32 },
    NewHighScore { score: u32 },
    /// Raised exactly once per run
    Collision { obstacle_id: u32, score: u32 },
}

/// Complete simulation state for one game
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub clock: Clock,
    pub phase: RunPhase,
    pub runner: Runner,
    pub obstacles: ObstacleRegistry,
    pub spawner: Spawner,
    pub score: ScoreTracker,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    /// Spawn randomness
    pub(crate) rng: Pcg32,
}

impl SimulationState {
    /// Create an idle simulation with a known high score
    pub fn new(seed: u64, tuning: Tuning, high_score: u32) -> Self {
        let runner = Runner::new(&tuning);
        Self {
            seed,
            tuning,
            clock: Clock::default(),
            phase: RunPhase::Idle,
            runner,
            obstacles: ObstacleRegistry::new(),
            spawner: Spawner::default(),
            score: ScoreTracker::new(high_score),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create an idle simulation, reading the high score from `store` once
    pub fn with_store<S: HighScoreStore + ?Sized>(seed: u64, tuning: Tuning, store: &S) -> Self {
        let high_score = load_high_score(store);
        Self::new(seed, tuning, high_score)
    }

    /// Pacing for the current score
    pub fn difficulty(&self) -> Difficulty {
        difficulty(self.score.score, &self.tuning)
    }

    /// Clear the run and put the runner back on its mark
    ///
    /// The RNG is not reseeded, so consecutive runs see fresh obstacles.
    pub fn reset_run(&mut self) {
        self.obstacles.clear();
        self.spawner.reset();
        self.clock.reset_run();
        self.score.reset_run();
        self.runner.reset(&self.tuning);
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        let ground_y = self.tuning.ground_y;
        Snapshot {
            phase: self.phase,
            tick: self.clock.run_ticks,
            score: self.score.score,
            high_score: self.score.high_score,
            speed: self.difficulty().speed,
            ground_y,
            runner: RunnerView {
                x: self.runner.pos.x,
                y: self.runner.pos.y,
                width: self.runner.width,
                height: self.runner.height,
                ducking: self.runner.is_ducking(ground_y),
                alive: self.runner.alive,
            },
            obstacles: self.obstacles.as_slice(),
            events: &self.events,
        }
    }
}

/// Runner as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunnerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub ducking: bool,
    pub alive: bool,
}

/// Per-tick snapshot handed to the renderer
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: RunPhase,
    pub tick: u64,
    pub score: u32,
    pub high_score: u32,
    pub speed: f32,
    pub ground_y: f32,
    pub runner: RunnerView,
    pub obstacles: &'a [Obstacle],
    pub events: &'a [GameEvent],
}
