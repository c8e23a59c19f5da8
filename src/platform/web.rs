//! Browser host bindings
//!
//! The JavaScript side owns the canvas, the input listeners and the
//! `requestAnimationFrame` loop. It forwards intents here, calls `frame`
//! once per animation frame, and draws from `snapshot_json`.

use wasm_bindgen::prelude::*;

use super::{FixedStep, InputLatch};
use crate::persistence::LocalStorageStore;
use crate::sim::{GameEvent, SimulationState, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Dino Runner core loaded");
}

/// One game instance, driven from JavaScript
#[wasm_bindgen]
pub struct WebGame {
    state: SimulationState,
    store: LocalStorageStore,
    latch: InputLatch,
    step: FixedStep,
    /// Events from every tick of the last `frame` call
    frame_events: Vec<GameEvent>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game with default tuning, or from a JSON tuning override
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> Result<WebGame, JsValue> {
        let tuning = match tuning_json {
            Some(json) => {
                Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => Tuning::default(),
        };
        let seed = js_sys::Date::now() as u64;
        let store = LocalStorageStore::default();
        let state = SimulationState::with_store(seed, tuning, &store);
        log::info!("Game initialized with seed: {}", seed);

        Ok(WebGame {
            state,
            store,
            latch: InputLatch::new(),
            step: FixedStep::new(),
            frame_events: Vec::new(),
        })
    }

    pub fn start(&mut self) {
        self.latch.press_start();
    }

    pub fn jump(&mut self) {
        self.latch.press_jump();
    }

    pub fn restart(&mut self) {
        self.latch.press_restart();
    }

    pub fn set_duck(&mut self, held: bool) {
        self.latch.set_duck(held);
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.latch.set_autopilot(enabled);
    }

    /// Advance by however many ticks `dt_secs` of frame time covers
    ///
    /// Returns the number of ticks run.
    pub fn frame(&mut self, dt_secs: f32) -> u32 {
        let steps = self.step.steps(dt_secs);
        self.frame_events.clear();
        for _ in 0..steps {
            self.step_once();
        }
        steps
    }

    /// Run exactly one tick (hosts that pace ticks themselves)
    pub fn tick(&mut self) {
        self.frame_events.clear();
        self.step_once();
    }

    /// Renderer snapshot as JSON
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Events raised during the last `frame` or `tick` call, as a JSON array
    pub fn frame_events_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.frame_events).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn score(&self) -> u32 {
        self.state.score.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.score.high_score
    }
}

impl WebGame {
    fn step_once(&mut self) {
        let input = self.latch.take();
        tick(&mut self.state, &input, &mut self.store);
        self.frame_events.extend(self.state.events.iter().cloned());
    }
}
