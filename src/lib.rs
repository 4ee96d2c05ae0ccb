//! Ballpit Engine - bouncing ball simulation in WASM
//!
//! Bodies spawn on a timer, bounce around a square world (optionally under
//! gravity with frictional walls), come to rest and get cleared.
//!
//! Architecture:
//! - core/        - Logging macros, seeded RNG
//! - domain/      - Body, world config, spawn presets, titles
//! - systems/     - Integrator (per-body kinematics)
//! - simulation/  - Population manager, frame stepping, statistics, JS facade
//! - driver/      - Spawn and statistics cadences
//! - web/         - Canvas renderer, DOM sinks, browser runner (wasm32 only)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod driver;
#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("ballpit engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Body, ConfigError, WorldConfig};
pub use driver::{Cadence, Scheduler};
pub use simulation::{
    DrawCircle, PositionPolicy, Renderer, Simulation, SimulationCore, Statistics, StatsSink,
};
#[cfg(target_arch = "wasm32")]
pub use web::Runner;
