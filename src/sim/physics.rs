//! Runner physics
//!
//! Vertical integration under gravity with a hard ground clamp. The runner
//! never moves horizontally; obstacles scroll toward it instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::tuning::Tuning;

/// Outcome of one physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    /// Velocity integrated into the position this step (before any clamp)
    pub applied_velocity: f32,
    /// Runner ended the step on the ground
    pub grounded: bool,
    /// Runner was airborne before the step and touched down during it
    pub landed: bool,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    /// Top-left corner of the standing silhouette
    pub pos: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
    /// Silhouette height while ducking on the ground
    pub duck_height: f32,
    /// Latched duck intent; only takes effect while grounded
    pub duck_held: bool,
    pub alive: bool,
}

impl Runner {
    /// Create a runner standing on the ground
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.runner_x, tuning.runner_ground_top()),
            vel_y: 0.0,
            width: tuning.runner_width,
            height: tuning.runner_height,
            duck_height: tuning.duck_height,
            duck_held: false,
            alive: true,
        }
    }

    #[inline]
    pub fn is_grounded(&self, ground_y: f32) -> bool {
        self.pos.y + self.height >= ground_y
    }

    /// Ducking only counts while the feet are on the ground
    #[inline]
    pub fn is_ducking(&self, ground_y: f32) -> bool {
        self.duck_held && self.is_grounded(ground_y)
    }

    /// Current silhouette height
    pub fn effective_height(&self, ground_y: f32) -> f32 {
        if self.is_ducking(ground_y) {
            self.duck_height
        } else {
            self.height
        }
    }

    /// Drawn rectangle (before fairness insets)
    pub fn bounds(&self, ground_y: f32) -> Rect {
        let h = self.effective_height(ground_y);
        Rect::new(self.pos.x, self.pos.y + self.height - h, self.width, h)
    }

    /// Apply a jump impulse. No-op while airborne.
    pub fn try_jump(&mut self, jump_velocity: f32, ground_y: f32) -> bool {
        if !self.is_grounded(ground_y) {
            return false;
        }
        self.vel_y = jump_velocity;
        true
    }

    /// Integrate one tick of gravity and clamp to the ground line
    pub fn advance(&mut self, gravity: f32, ground_y: f32) -> Advance {
        let was_grounded = self.is_grounded(ground_y);

        self.vel_y += gravity;
        let applied_velocity = self.vel_y;
        self.pos.y += self.vel_y;

        let grounded = self.is_grounded(ground_y);
        if grounded {
            self.pos.y = ground_y - self.height;
            self.vel_y = 0.0;
        }

        Advance {
            applied_velocity,
            grounded,
            landed: grounded && !was_grounded,
        }
    }

    /// Put the runner back on its start mark
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn runner() -> Runner {
        Runner::new(&Tuning::default())
    }

    #[test]
    fn test_starts_grounded() {
        let r = runner();
        assert!(r.is_grounded(GROUND_Y));
        assert_eq!(r.pos, Vec2::new(RUNNER_X, GROUND_Y - RUNNER_HEIGHT));
    }

    #[test]
    fn test_gravity_step_from_rest() {
        let mut r = runner();
        let step = r.advance(GRAVITY, GROUND_Y);
        assert_eq!(step.applied_velocity, GRAVITY);
        assert!(step.grounded);
        assert!(!step.landed);
        // Clamped: never below the ground line, no bounce
        assert_eq!(r.pos.y + r.height, GROUND_Y);
        assert_eq!(r.vel_y, 0.0);
    }

    #[test]
    fn test_jump_arc_lands() {
        let mut r = runner();
        assert!(r.try_jump(JUMP_VELOCITY, GROUND_Y));

        let mut airborne_ticks = 0;
        let mut peak = r.pos.y;
        loop {
            let step = r.advance(GRAVITY, GROUND_Y);
            assert!(r.pos.y + r.height <= GROUND_Y);
            peak = peak.min(r.pos.y);
            if step.landed {
                break;
            }
            airborne_ticks += 1;
            assert!(airborne_ticks < 100, "runner never landed");
        }

        assert!(peak < GROUND_Y - RUNNER_HEIGHT - 90.0);
        assert_eq!(r.vel_y, 0.0);
        assert!(r.is_grounded(GROUND_Y));
    }

    #[test]
    fn test_no_air_jump() {
        let mut r = runner();
        r.try_jump(JUMP_VELOCITY, GROUND_Y);
        r.advance(GRAVITY, GROUND_Y);
        let v = r.vel_y;
        assert!(v != 0.0);

        assert!(!r.try_jump(JUMP_VELOCITY, GROUND_Y));
        assert_eq!(r.vel_y, v);
    }

    #[test]
    fn test_duck_only_on_ground() {
        let mut r = runner();
        r.duck_held = true;
        assert!(r.is_ducking(GROUND_Y));
        assert_eq!(r.effective_height(GROUND_Y), DUCK_HEIGHT);
        let bounds = r.bounds(GROUND_Y);
        assert_eq!(bounds.bottom(), GROUND_Y);
        assert_eq!(bounds.top(), GROUND_Y - DUCK_HEIGHT);

        // Mid-air the intent is remembered but has no effect
        r.try_jump(JUMP_VELOCITY, GROUND_Y);
        r.advance(GRAVITY, GROUND_Y);
        assert!(r.duck_held);
        assert!(!r.is_ducking(GROUND_Y));
        assert_eq!(r.effective_height(GROUND_Y), RUNNER_HEIGHT);

        // Re-applies on landing
        while !r.advance(GRAVITY, GROUND_Y).landed {}
        assert!(r.is_ducking(GROUND_Y));
    }
}
