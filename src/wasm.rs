//! WebAssembly bindings for browser hosts
//!
//! The page owns the canvas, event listeners and the tick timer; it forwards
//! raw key names, pointer positions and resizes here, calls `update` every
//! `TICK_INTERVAL_MS`, and draws from `snapshot_json`.

use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::input::{HeldKeys, Key};
use crate::sim::MotionEngine;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Already set when the module is instantiated twice
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Grid Snake starting...");
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One game session driven from JavaScript
#[wasm_bindgen]
pub struct WasmEngine {
    config: EngineConfig,
    engine: MotionEngine,
    keys: HeldKeys,
}

#[wasm_bindgen]
impl WasmEngine {
    /// Build from a JSON config, e.g. `{"width": 800, "height": 600}`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmEngine, JsValue> {
        let config = EngineConfig::from_json(config_json).map_err(to_js)?;
        let engine = MotionEngine::from_config(&config).map_err(to_js)?;
        Ok(Self {
            config,
            engine,
            keys: HeldKeys::new(),
        })
    }

    /// Forward a `keydown`; returns true if the key steers the snake
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(key) = Key::parse(key) else {
            return false;
        };
        self.keys.press(key);
        self.engine.set_velocity(self.keys.velocity());
        true
    }

    /// Forward a `keyup`. Releasing never sends a velocity by itself.
    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, key: &str) -> bool {
        match Key::parse(key) {
            Some(key) => self.keys.release(key),
            None => false,
        }
    }

    /// Forget held keys (window blur)
    #[wasm_bindgen(js_name = releaseAll)]
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.engine.set_target(glam::Vec2::new(x, y));
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.engine.set_bounds(width, height).map_err(to_js)?;
        self.config.width = width;
        self.config.height = height;
        Ok(())
    }

    /// Advance one tick; returns the collision outcome name
    /// (`"Nothing"`, `"NormalFood"`, ..., `"SelfIntersection"`)
    pub fn update(&mut self) -> String {
        format!("{:?}", self.engine.update())
    }

    /// Start a fresh session on the current board
    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.engine = MotionEngine::from_config(&self.config).map_err(to_js)?;
        self.keys.clear();
        log::info!("Session restarted");
        Ok(())
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.snapshot()).map_err(to_js)
    }
}
