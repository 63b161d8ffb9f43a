//! Grid Snake entry point
//!
//! Native builds run a headless session: the engine is ticked at a fixed count
//! with a scripted key sequence standing in for a player, and the final board
//! is printed as JSON. Browser hosts use the `wasm` bindings instead.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::process::ExitCode;

    use grid_snake::consts::TICK_INTERVAL_MS;
    use grid_snake::{CollisionResult, EngineConfig, EngineError, HeldKeys, Key, MotionEngine};

    /// Ticks to run when no count is given (30 seconds of play)
    const DEFAULT_TICKS: u64 = 30_000 / TICK_INTERVAL_MS as u64;
    /// Ticks between scripted key changes
    const KEY_HOLD_TICKS: u64 = 12;
    const SCRIPT: [Key; 4] = [Key::D, Key::S, Key::A, Key::W];

    fn load_config(path: Option<&str>) -> Result<EngineConfig, EngineError> {
        match path {
            Some(path) => {
                log::info!("Loading config from {}", path);
                EngineConfig::load(path)
            }
            None => Ok(EngineConfig::default()),
        }
    }

    pub fn run() -> ExitCode {
        env_logger::init();
        log::info!("Grid Snake (headless) starting...");

        let mut args = std::env::args().skip(1);
        let config_path = args.next();
        let ticks = args
            .next()
            .and_then(|arg| arg.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TICKS);

        let config = match load_config(config_path.as_deref()) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Invalid config: {}", err);
                return ExitCode::FAILURE;
            }
        };

        let mut engine = match MotionEngine::from_config(&config) {
            Ok(engine) => engine,
            Err(err) => {
                log::error!("Failed to start engine: {}", err);
                return ExitCode::FAILURE;
            }
        };

        let mut keys = HeldKeys::new();
        let mut games_over = 0u32;
        for tick in 0..ticks {
            if tick % KEY_HOLD_TICKS == 0 {
                let key = SCRIPT[(tick / KEY_HOLD_TICKS) as usize % SCRIPT.len()];
                keys.clear();
                keys.press(key);
                engine.set_velocity(keys.velocity());
            }

            match engine.update() {
                CollisionResult::Nothing => {}
                CollisionResult::SelfIntersection => {
                    games_over += 1;
                    log::info!(
                        "Game over at tick {} (length {}), respawning",
                        tick,
                        engine.bodies().len()
                    );
                    engine = match MotionEngine::from_config(&config) {
                        Ok(engine) => engine,
                        Err(err) => {
                            log::error!("Failed to restart engine: {}", err);
                            return ExitCode::FAILURE;
                        }
                    };
                }
                food => log::info!("Tick {}: {:?}, length {}", tick, food, engine.bodies().len()),
            }
        }

        log::info!("Ran {} ticks, {} game(s) over", ticks, games_over);
        match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("Failed to serialize snapshot: {}", err);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point lives in the library's `wasm` module
}
