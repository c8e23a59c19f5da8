//! Attract-mode autopilot
//!
//! Plays the game from the same intents a player would send: ducks under
//! birds it can duck, jumps everything else once it is close enough.

use super::collision::{obstacle_hitbox, runner_hitbox};
use super::geometry::Rect;
use super::physics::Runner;
use super::state::{RunPhase, SimulationState};
use super::tick::TickInput;

/// Jump when the obstacle is this many ticks of travel away
const JUMP_LEAD_TICKS: f32 = 5.0;
/// Start ducking this many ticks of travel ahead of a bird
const DUCK_LEAD_TICKS: f32 = 3.0;

/// Intents chosen for the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decision {
    pub jump: bool,
    pub duck: bool,
}

/// Boxes share a vertical band
fn shares_rows(a: &Rect, b: &Rect) -> bool {
    a.top() < b.bottom() && a.bottom() > b.top()
}

/// Pick jump/duck for a running game
pub fn decide(state: &SimulationState) -> Decision {
    let tuning = &state.tuning;

    // Hitboxes as if standing/ducking on the ground, whatever the runner is doing now
    let mut grounded = Runner::new(tuning);
    let standing = runner_hitbox(&grounded, tuning);
    grounded.duck_held = true;
    let ducking = runner_hitbox(&grounded, tuning);

    let nearest = state
        .obstacles
        .iter()
        .map(|o| obstacle_hitbox(o, tuning))
        .filter(|hb| hb.right() > standing.left() && shares_rows(hb, &standing))
        .min_by(|a, b| a.left().total_cmp(&b.left()));

    let Some(threat) = nearest else {
        return Decision::default();
    };

    let speed = state.difficulty().speed;
    let distance = threat.left() - standing.right();

    if shares_rows(&threat, &ducking) {
        Decision {
            jump: distance > 0.0 && distance <= speed * JUMP_LEAD_TICKS,
            duck: false,
        }
    } else {
        Decision {
            jump: false,
            duck: distance <= speed * DUCK_LEAD_TICKS,
        }
    }
}

/// Fill in intents for the current phase
pub fn drive(state: &SimulationState, input: &mut TickInput) {
    match state.phase {
        RunPhase::Idle => input.start = true,
        RunPhase::GameOver => input.restart = true,
        RunPhase::Running => {
            let decision = decide(state);
            input.jump = decision.jump;
            input.duck = decision.duck;
        }
    }
}
