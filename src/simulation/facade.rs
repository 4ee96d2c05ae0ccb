use wasm_bindgen::prelude::*;

use crate::domain::config::WorldConfig;
use crate::domain::titles::pick_title;
use crate::driver::Scheduler;

use super::commands::PositionPolicy;
use super::stats::Statistics;
use super::SimulationCore;

/// JS-driven simulation handle.
///
/// For hosts that own the animation loop: call `advance()` (or read the
/// drawable buffer after it) once per frame and `pump(now)` from the same
/// loop to run the spawn and statistics cadences.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
    scheduler: Scheduler,
}

impl Simulation {
    pub fn from_core(core: SimulationCore) -> Self {
        let scheduler = Scheduler::new(core.config());
        Self { core, scheduler }
    }

    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationCore {
        &mut self.core
    }
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation from an optional JSON config (camelCase keys)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Simulation, JsValue> {
        let config = match config_json {
            Some(json) => WorldConfig::from_json(&json).map_err(|e| {
                console_warn!("ballpit: config rejected: {}", e);
                JsValue::from_str(&e.to_string())
            })?,
            None => WorldConfig::default(),
        };
        let core = SimulationCore::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> Result<Simulation, JsValue> {
        let core = SimulationCore::with_seed(WorldConfig::default(), seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn world_size(&self) -> f32 { self.core.config().world_size }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === TOGGLES (return display labels) ===

    pub fn set_gravity(&mut self, enabled: bool) -> String {
        self.core.set_gravity(enabled)
    }

    pub fn set_autospawn(&mut self, enabled: bool) -> String {
        self.core.set_autospawn(enabled)
    }

    pub fn set_autoclear(&mut self, enabled: bool) -> String {
        self.core.set_autoclear(enabled)
    }

    pub fn toggle_gravity(&mut self) -> String {
        self.core.toggle_gravity()
    }

    pub fn toggle_autospawn(&mut self) -> String {
        self.core.toggle_autospawn()
    }

    pub fn toggle_autoclear(&mut self) -> String {
        self.core.toggle_autoclear()
    }

    pub fn set_max_bodies(&mut self, max_bodies: u32) -> Result<(), JsValue> {
        self.core
            .set_max_bodies(max_bodies as usize)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // === ACTIONS ===

    pub fn spawn(&mut self) -> bool {
        self.core.spawn()
    }

    pub fn spawn_ring(&mut self) {
        self.core.spawn_ring();
    }

    pub fn autoclear(&mut self) -> usize {
        self.core.autoclear()
    }

    pub fn spawn_tick(&mut self) {
        self.core.spawn_tick();
    }

    pub fn center_bodies(&mut self) {
        self.core.set_all_positions(PositionPolicy::Center);
    }

    pub fn scatter_bodies(&mut self) {
        self.core.set_all_positions(PositionPolicy::Scatter);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step every body once
    pub fn advance(&mut self) {
        self.core.advance();
    }

    // === CADENCES ===

    /// Run due spawn/stats ticks; returns fresh statistics when the stats
    /// cadence fired during this call
    pub fn pump(&mut self, now_ms: f64) -> Option<Statistics> {
        let mut latest: Option<Statistics> = None;
        self.scheduler.pump(now_ms, &mut self.core, &mut latest);
        latest
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn resume(&mut self) {
        self.scheduler.resume();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.scheduler.is_running()
    }

    // === STATISTICS ===

    pub fn recompute_statistics(&mut self) -> Statistics {
        self.core.recompute_statistics()
    }

    pub fn statistics_json(&mut self) -> String {
        self.core.recompute_statistics().to_json()
    }

    // === RENDER EXTRACT ===

    /// Refresh the drawable buffer; returns the body count
    pub fn extract_drawables(&mut self) -> usize {
        self.core.extract_drawables()
    }

    /// Pointer to `[x, y, radius, inert]` f32 quads (valid until the next mutation)
    pub fn drawables_ptr(&self) -> *const f32 {
        self.core.drawables().as_ptr()
    }

    pub fn drawables_len(&self) -> usize {
        self.core.drawables().len()
    }

    pub fn random_title(&mut self) -> String {
        pick_title(self.core.rng_mut()).to_string()
    }
}
