//! Tick counters

use serde::{Deserialize, Serialize};

/// Monotonic tick counter driving every per-tick update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// Ticks since the simulation was created (never reset)
    pub frame: u64,
    /// Ticks advanced in the current run (reset on restart)
    pub run_ticks: u64,
}

impl Clock {
    /// Count one tick in which the run advanced
    pub fn advance(&mut self) {
        self.frame += 1;
        self.run_ticks += 1;
    }

    /// Count one tick in which the run was frozen (idle or game over)
    pub fn idle(&mut self) {
        self.frame += 1;
    }

    /// Start a new run
    pub fn reset_run(&mut self) {
        self.run_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_survives_run_reset() {
        let mut clock = Clock::default();
        clock.advance();
        clock.advance();
        clock.idle();
        assert_eq!(clock.frame, 3);
        assert_eq!(clock.run_ticks, 2);

        clock.reset_run();
        assert_eq!(clock.frame, 3);
        assert_eq!(clock.run_ticks, 0);
    }
}
