//! Run score and high score record

use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use crate::persistence::{HighScoreStore, save_high_score};

/// Current run score and the best score seen across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    /// Points this run (one per obstacle passed)
    pub score: u32,
    /// Best score ever, never decreases
    pub high_score: u32,
}

/// What a scoring pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreUpdate {
    /// `(obstacle id, score right after it)` for each obstacle passed this tick
    pub passed: Vec<(u32, u32)>,
    /// Set when the high score rose this tick
    pub new_high_score: Option<u32>,
}

impl ScoreTracker {
    pub fn new(high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
        }
    }

    /// Score every obstacle whose trailing edge is now behind `runner_x`
    ///
    /// Each obstacle counts once; a raised high score is written through to
    /// `store` immediately.
    pub fn award_passed<'a, I, S>(
        &mut self,
        obstacles: I,
        runner_x: f32,
        store: &mut S,
    ) -> ScoreUpdate
    where
        I: IntoIterator<Item = &'a mut Obstacle>,
        S: HighScoreStore + ?Sized,
    {
        let mut update = ScoreUpdate::default();
        for obstacle in obstacles {
            if !obstacle.passed && obstacle.right() < runner_x {
                obstacle.passed = true;
                self.score += 1;
                update.passed.push((obstacle.id, self.score));

                if self.score > self.high_score {
                    self.high_score = self.score;
                    save_high_score(store, self.high_score);
                    update.new_high_score = Some(self.high_score);
                }
            }
        }
        update
    }

    /// Start a new run; the high score carries over
    pub fn reset_run(&mut self) {
        self.score = 0;
    }
}
