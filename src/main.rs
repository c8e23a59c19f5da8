//! Dino Runner entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively there is no renderer, so this runs a headless attract-mode game
//! with the autopilot and logs how it went.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use dino_runner::platform::InputLatch;
    use dino_runner::{GameEvent, MemoryStore, RunPhase, SimulationState, Tuning, tick};

    /// Ten minutes of play at 60 ticks per second
    const DEMO_TICKS: u32 = 60 * 60 * 10;
    const DEMO_RUNS: u32 = 3;

    env_logger::init();
    log::info!("Dino Runner (native) starting...");
    log::info!("Native mode is headless - running an attract-mode demo");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut store = MemoryStore::new();
    let mut state = SimulationState::with_store(seed, Tuning::default(), &store);
    let mut latch = InputLatch::new();
    latch.set_autopilot(true);

    let mut runs = 0;
    for _ in 0..DEMO_TICKS {
        let input = latch.take();
        tick(&mut state, &input, &mut store);

        for event in &state.events {
            if let GameEvent::Collision { score, .. } = event {
                runs += 1;
                println!("Run {runs}: score {score} (high score {})", state.score.high_score);
            }
        }
        if runs >= DEMO_RUNS {
            break;
        }
    }

    if state.phase == RunPhase::Running {
        println!(
            "Demo ended mid-run: score {} (high score {})",
            state.score.score, state.score.high_score
        );
    }
    log::info!("High score writes: {}", store.writes());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
