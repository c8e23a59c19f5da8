//! Platform abstraction layer
//!
//! Host-side glue between a frame loop and the tick-driven simulation:
//! - [`InputLatch`]: collects intents between frames
//! - [`FixedStep`]: turns frame time into a whole number of ticks
//! - `web`: wasm-bindgen handle for a browser host

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::TickInput;

/// Intents gathered from input events, consumed at tick boundaries
///
/// Start, jump and restart are edges: they fire on the next tick only.
/// Duck is a level and stays set until released.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pending: TickInput,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_start(&mut self) {
        self.pending.start = true;
    }

    pub fn press_jump(&mut self) {
        self.pending.jump = true;
    }

    pub fn press_restart(&mut self) {
        self.pending.restart = true;
    }

    pub fn set_duck(&mut self, held: bool) {
        self.pending.duck = held;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.pending.autopilot = enabled;
    }

    /// Input for the next tick; clears one-shot inputs after reading
    pub fn take(&mut self) -> TickInput {
        let input = self.pending.clone();
        self.pending.start = false;
        self.pending.jump = false;
        self.pending.restart = false;
        input
    }
}

/// Fixed-timestep accumulator
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks to run for a frame that took `dt` seconds
    ///
    /// Long frames (tab switches) are capped so the simulation never tries
    /// to catch up more than [`MAX_SUBSTEPS`] ticks at once.
    pub fn steps(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop time we refused to simulate
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shots_clear_duck_stays() {
        let mut latch = InputLatch::new();
        latch.press_jump();
        latch.set_duck(true);

        let first = latch.take();
        assert!(first.jump);
        assert!(first.duck);

        let second = latch.take();
        assert!(!second.jump);
        assert!(second.duck);

        latch.set_duck(false);
        assert!(!latch.take().duck);
    }

    #[test]
    fn test_fixed_step() {
        let mut step = FixedStep::new();
        assert_eq!(step.steps(SIM_DT * 0.5), 0);
        assert_eq!(step.steps(SIM_DT * 0.6), 1);
        assert_eq!(step.steps(SIM_DT * 2.0), 2);
    }

    #[test]
    fn test_fixed_step_caps_long_frames() {
        let mut step = FixedStep::new();
        // A one-second stall counts as a tenth of a second
        assert_eq!(step.steps(1.0), 6);
        // Backlog was dropped, not carried into the next frame
        assert_eq!(step.steps(0.0), 0);
        assert_eq!(step.steps(5.0), 6);
    }
}
