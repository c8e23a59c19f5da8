//! End-to-end runs through the public tick API

use dino_runner::consts::*;
use dino_runner::sim::{ObstacleKind, build_cactus_cluster};
use dino_runner::{
    GameEvent, HighScoreStore, MemoryStore, RunPhase, SimulationState, StoreError, TickInput,
    Tuning, tick,
};

/// Remembers every value written
#[derive(Default)]
struct RecordingStore {
    value: Option<u32>,
    writes: Vec<u32>,
}

impl HighScoreStore for RecordingStore {
    fn read(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.value)
    }

    fn write(&mut self, high_score: u32) -> Result<(), StoreError> {
        self.value = Some(high_score);
        self.writes.push(high_score);
        Ok(())
    }
}

/// Fails every operation
struct OfflineStore;

impl HighScoreStore for OfflineStore {
    fn read(&self) -> Result<Option<u32>, StoreError> {
        Err(StoreError::Unavailable("offline".into()))
    }

    fn write(&mut self, _high_score: u32) -> Result<(), StoreError> {
        Err(StoreError::WriteRejected("offline".into()))
    }
}

fn input(f: impl FnOnce(&mut TickInput)) -> TickInput {
    let mut input = TickInput::default();
    f(&mut input);
    input
}

fn start<S: HighScoreStore>(state: &mut SimulationState, store: &mut S) {
    tick(state, &input(|i| i.start = true), store);
    assert_eq!(state.phase, RunPhase::Running);
}

fn small_cactus() -> ObstacleKind {
    ObstacleKind::Cactus(build_cactus_cluster(&[(12.0, 28.0)], CACTUS_GAP))
}

/// Put a cactus just left of the runner so it scores on the next tick
fn feed_passing_obstacle(state: &mut SimulationState) {
    state.obstacles.spawn(30.0, small_cactus());
}

/// Put a cactus inside the runner's hitbox so the next tick ends the run
fn feed_fatal_obstacle(state: &mut SimulationState) {
    state.obstacles.spawn(RUNNER_X + 30.0, small_cactus());
}

#[test]
fn grounded_runner_hits_incoming_cactus() {
    let mut store = MemoryStore::new();
    let mut state = SimulationState::with_store(7, Tuning::default(), &store);
    start(&mut state, &mut store);

    let id = state.obstacles.spawn(FIELD_WIDTH, small_cactus());
    let ticks = ((FIELD_WIDTH - RUNNER_X) / BASE_SPEED).ceil() as u32;

    let mut collisions = Vec::new();
    for _ in 0..ticks {
        tick(&mut state, &TickInput::default(), &mut store);
        for event in &state.events {
            if let GameEvent::Collision { obstacle_id, .. } = event {
                collisions.push(*obstacle_id);
            }
        }
    }

    assert_eq!(collisions, vec![id]);
    assert_eq!(state.phase, RunPhase::GameOver);
    assert!(!state.runner.alive);
    assert_eq!(state.score.score, 0);
}

#[test]
fn restart_resets_the_run() {
    let mut store = MemoryStore::new();
    let mut state = SimulationState::with_store(7, Tuning::default(), &store);
    start(&mut state, &mut store);

    for _ in 0..3 {
        feed_passing_obstacle(&mut state);
        tick(&mut state, &TickInput::default(), &mut store);
    }
    assert_eq!(state.score.score, 3);

    // Airborne and ducking when the run ends
    tick(&mut state, &input(|i| i.jump = true), &mut store);
    state.runner.pos.y = GROUND_Y - RUNNER_HEIGHT - 10.0;
    feed_fatal_obstacle(&mut state);
    tick(&mut state, &input(|i| i.duck = true), &mut store);
    assert_eq!(state.phase, RunPhase::GameOver);

    tick(&mut state, &input(|i| i.restart = true), &mut store);
    assert_eq!(state.phase, RunPhase::Running);
    assert_eq!(state.events, vec![GameEvent::Restarted]);
    assert_eq!(state.score.score, 0);
    assert_eq!(state.score.high_score, 3);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.runner.pos.x, RUNNER_X);
    assert_eq!(state.runner.pos.y, GROUND_Y - RUNNER_HEIGHT);
    assert_eq!(state.runner.vel_y, 0.0);
    assert!(!state.runner.duck_held);
    assert!(state.runner.alive);
    assert_eq!(state.clock.run_ticks, 0);

    // The new run spawns on the normal cadence again
    for _ in 0..=BASE_SPAWN_GAP {
        tick(&mut state, &TickInput::default(), &mut store);
    }
    assert_eq!(state.obstacles.len(), 1);
}

#[test]
fn high_score_is_written_through_and_never_lowered() {
    let mut store = RecordingStore {
        value: Some(50),
        writes: Vec::new(),
    };
    let mut state = SimulationState::with_store(3, Tuning::default(), &store);
    assert_eq!(state.score.high_score, 50);
    start(&mut state, &mut store);

    for _ in 0..75 {
        feed_passing_obstacle(&mut state);
        tick(&mut state, &TickInput::default(), &mut store);
    }
    assert_eq!(state.score.score, 75);
    assert_eq!(store.writes.iter().filter(|&&w| w == 75).count(), 1);
    assert_eq!(store.writes.last(), Some(&75));
    assert!(store.writes.iter().all(|&w| w > 50));
    assert!(store.writes.windows(2).all(|w| w[0] < w[1]));

    feed_fatal_obstacle(&mut state);
    tick(&mut state, &TickInput::default(), &mut store);
    assert_eq!(state.phase, RunPhase::GameOver);

    let writes_before = store.writes.len();
    tick(&mut state, &input(|i| i.restart = true), &mut store);
    for _ in 0..40 {
        feed_passing_obstacle(&mut state);
        tick(&mut state, &TickInput::default(), &mut store);
    }
    assert_eq!(state.score.score, 40);
    assert_eq!(store.writes.len(), writes_before);
    assert_eq!(store.value, Some(75));
    assert_eq!(state.score.high_score, 75);
}

#[test]
fn offline_store_does_not_break_the_run() {
    let mut store = OfflineStore;
    let mut state = SimulationState::with_store(3, Tuning::default(), &store);
    assert_eq!(state.score.high_score, 0);
    start(&mut state, &mut store);

    for _ in 0..5 {
        feed_passing_obstacle(&mut state);
        tick(&mut state, &TickInput::default(), &mut store);
    }
    assert_eq!(state.phase, RunPhase::Running);
    assert_eq!(state.score.score, 5);
    assert_eq!(state.score.high_score, 5);
}

#[test]
fn score_never_decreases_within_a_run() {
    let mut store = MemoryStore::new();
    let mut state = SimulationState::with_store(11, Tuning::default(), &store);
    start(&mut state, &mut store);

    let mut last = 0;
    for i in 0..300 {
        if i % 7 == 0 {
            feed_passing_obstacle(&mut state);
        }
        tick(&mut state, &TickInput::default(), &mut store);
        assert!(state.score.score >= last);
        last = state.score.score;
    }
}

#[test]
fn autopilot_clears_cacti_at_base_speed() {
    let mut store = RecordingStore::default();
    let mut state = SimulationState::with_store(2024, Tuning::default(), &store);
    let attract = input(|i| i.autopilot = true);

    for _ in 0..2000 {
        tick(&mut state, &attract, &mut store);
        assert!(
            !state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Collision { .. })),
            "autopilot crashed at score {}",
            state.score.score
        );
    }
    assert_eq!(state.phase, RunPhase::Running);
    assert!(state.score.score >= 15, "score {}", state.score.score);
    assert_eq!(store.writes.last(), Some(&state.score.score));
}

#[test]
fn snapshot_reflects_state() {
    let mut store = MemoryStore::with_value(9);
    let mut state = SimulationState::with_store(5, Tuning::default(), &store);
    start(&mut state, &mut store);
    state.obstacles.spawn(FIELD_WIDTH, small_cactus());
    tick(&mut state, &input(|i| i.duck = true), &mut store);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.phase, RunPhase::Running);
    assert_eq!(snapshot.high_score, 9);
    assert!(snapshot.runner.ducking);
    assert_eq!(snapshot.obstacles.len(), 1);
    assert_eq!(snapshot.obstacles[0].x, FIELD_WIDTH - BASE_SPEED);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["obstacles"][0]["kind"]["type"], "cactus");
}
