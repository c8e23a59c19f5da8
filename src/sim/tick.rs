//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one step. Order within a
//! running tick: clock, difficulty, obstacle scroll + prune, spawn, runner
//! physics, collision, scoring.

use super::autopilot;
use super::collision::first_collision;
use super::state::{GameEvent, RunPhase, SimulationState};
use crate::persistence::HighScoreStore;

/// Input intents for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Leave Idle (one-shot)
    pub start: bool,
    /// Jump impulse (one-shot, ignored mid-air)
    pub jump: bool,
    /// Duck held (level, sampled every tick)
    pub duck: bool,
    /// Start over after a game over (one-shot)
    pub restart: bool,
    /// Attract mode - the autopilot plays the game
    pub autopilot: bool,
}

/// Advance the simulation by one tick
///
/// `store` receives a write whenever the high score improves. Write failures
/// are logged and never interrupt the tick.
pub fn tick<S: HighScoreStore + ?Sized>(
    state: &mut SimulationState,
    input: &TickInput,
    store: &mut S,
) {
    state.events.clear();

    let mut input = input.clone();
    if input.autopilot {
        autopilot::drive(state, &mut input);
    }
    let input = &input;

    match state.phase {
        RunPhase::Idle => {
            state.clock.idle();
            if input.start {
                state.phase = RunPhase::Running;
                state.events.push(GameEvent::Started);
                log::info!("Run started (seed {})", state.seed);
                launch_jump(state, input);
            }
            return;
        }
        RunPhase::GameOver => {
            state.clock.idle();
            if input.restart {
                state.reset_run();
                state.phase = RunPhase::Running;
                state.events.push(GameEvent::Restarted);
                log::info!("Run restarted (high score {})", state.score.high_score);
                launch_jump(state, input);
            }
            return;
        }
        RunPhase::Running => {}
    }

    state.clock.advance();
    let pace = state.difficulty();

    // Scroll and evict
    state.obstacles.advance(pace.speed);
    state.obstacles.prune(state.tuning.prune_margin);

    // Spawn at the right edge
    if let Some(kind) = state.spawner.maybe_spawn(
        state.clock.run_ticks,
        &pace,
        &state.tuning,
        &mut state.rng,
    ) {
        let id = state.obstacles.spawn(state.tuning.field_width, kind);
        log::debug!(
            "Spawned obstacle {} at tick {} (speed {}, gap {})",
            id,
            state.clock.run_ticks,
            pace.speed,
            pace.spawn_gap
        );
        state.events.push(GameEvent::Spawned { id });
    }

    // Runner intents, then physics
    let ground_y = state.tuning.ground_y;
    state.runner.duck_held = input.duck;
    if input.jump && state.runner.try_jump(state.tuning.jump_velocity, ground_y) {
        state.events.push(GameEvent::Jumped);
    }
    let step = state.runner.advance(state.tuning.gravity, ground_y);
    if step.landed {
        state.events.push(GameEvent::Landed);
    }

    // Collision ends the run
    let hit =
        first_collision(&state.runner, state.obstacles.as_slice(), &state.tuning).map(|o| o.id);
    if let Some(obstacle_id) = hit {
        if state.runner.alive {
            state.runner.alive = false;
            state.phase = RunPhase::GameOver;
            let score = state.score.score;
            state.events.push(GameEvent::Collision { obstacle_id, score });
            log::info!(
                "Game over: hit obstacle {} at tick {} with score {}",
                obstacle_id,
                state.clock.run_ticks,
                score
            );
        }
        return;
    }

    // Scoring
    let update = state
        .score
        .award_passed(state.obstacles.iter_mut(), state.runner.pos.x, store);
    for (id, score) in update.passed {
        state.events.push(GameEvent::Passed { id, score });
    }
    if let Some(score) = update.new_high_score {
        state.events.push(GameEvent::NewHighScore { score });
        log::info!("New high score: {}", score);
    }
}

/// The key that starts a run also jumps; physics picks it up next tick
fn launch_jump(state: &mut SimulationState, input: &TickInput) {
    if input.jump && state.runner.try_jump(state.tuning.jump_velocity, state.tuning.ground_y) {
        state.events.push(GameEvent::Jumped);
    }
}
