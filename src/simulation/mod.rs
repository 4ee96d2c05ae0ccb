//! Simulation - the ball pit's population manager
//!
//! `SimulationCore` owns every live body plus the running counters and is
//! passed explicitly to every operation; there is no global state.
//!
//! Layout mirrors the operations:
//! - commands/  spawn, ring spawn, autoclear, position resets
//! - step/      per-frame stepping and rendering
//! - stats/     statistics recomputation
//! - render/    renderer contract and flat drawable buffer for JS
//! - init/      construction and UI toggles
//!
//! Everything runs on one thread: the frame loop and the two cadences
//! interleave but never observe each other mid-operation.

use crate::core::random::SimRng;
use crate::domain::body::Body;
use crate::domain::config::{ConfigError, WorldConfig};

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "stats/stats.rs"]
mod stats;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use commands::PositionPolicy;
pub use facade::Simulation;
pub use render_extract::{DrawCircle, Renderer, DRAWABLE_STRIDE};
pub use settings::toggle_label;
pub use stats::{Statistics, StatsSink};

/// The simulation state
pub struct SimulationCore {
    config: WorldConfig,
    bodies: Vec<Body>,
    rng: SimRng,

    // Counters (monotonic)
    total_spawned: u32,
    removed_count: u32,

    // State
    frame: u64,
    last_stats: Statistics,

    // Flat [x, y, radius, inert] per body for JS-side renderers
    render_buffer: Vec<f32>,
}

impl SimulationCore {
    /// Create a simulation seeded from the environment
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        init::create_core(config, SimRng::from_entropy())
    }

    /// Create a simulation with a fixed RNG seed (reproducible spawns)
    pub fn with_seed(config: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        init::create_core(config, SimRng::from_seed(seed))
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to the live population (host-side editing and tests)
    pub fn bodies_mut(&mut self) -> &mut Vec<Body> {
        &mut self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn total_spawned(&self) -> u32 {
        self.total_spawned
    }

    pub fn removed_count(&self) -> u32 {
        self.removed_count
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Last statistics snapshot (as of the most recent recomputation)
    pub fn last_statistics(&self) -> Statistics {
        self.last_stats
    }

    pub fn rng_mut(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    // === TOGGLES ===

    /// Returns the display label, e.g. "Gravity: ON"
    pub fn set_gravity(&mut self, enabled: bool) -> String {
        settings::set_gravity(self, enabled)
    }

    pub fn set_autospawn(&mut self, enabled: bool) -> String {
        settings::set_autospawn(self, enabled)
    }

    pub fn set_autoclear(&mut self, enabled: bool) -> String {
        settings::set_autoclear(self, enabled)
    }

    pub fn toggle_gravity(&mut self) -> String {
        settings::set_gravity(self, !self.config.gravity_enabled)
    }

    pub fn toggle_autospawn(&mut self) -> String {
        settings::set_autospawn(self, !self.config.autospawn_enabled)
    }

    pub fn toggle_autoclear(&mut self) -> String {
        settings::set_autoclear(self, !self.config.autoclear_enabled)
    }

    /// Change the capacity. Zero is rejected; the population is trimmed
    /// on the next autoclear, not here.
    pub fn set_max_bodies(&mut self, max_bodies: usize) -> Result<(), ConfigError> {
        settings::set_max_bodies(self, max_bodies)
    }

    // === POPULATION ===

    /// Spawn one body if autospawn is on and there is room.
    /// Returns true if a body was created.
    pub fn spawn(&mut self) -> bool {
        commands::spawn(self)
    }

    /// Spawn 16 bodies at the centre, one per preset velocity.
    /// Ignores capacity and the autospawn toggle.
    pub fn spawn_ring(&mut self) {
        commands::spawn_ring(self)
    }

    /// Remove inert bodies, then trim the oldest down to capacity.
    /// Returns the number of bodies removed.
    pub fn autoclear(&mut self) -> usize {
        commands::autoclear(self)
    }

    /// One spawn cadence firing: spawn, then autoclear
    pub fn spawn_tick(&mut self) {
        commands::spawn_tick(self)
    }

    /// Reassign every body's position, keeping velocities
    pub fn set_all_positions(&mut self, policy: PositionPolicy) {
        commands::set_all_positions(self, policy)
    }

    /// Remove every body
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === FRAME ===

    /// Step every body once without rendering
    pub fn advance(&mut self) {
        step::advance(self)
    }

    /// One display refresh: clear the surface, then step and draw each body
    pub fn frame_with<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        step::frame(self, renderer)
    }

    // === STATISTICS ===

    /// Rescan the population. Read-only with respect to bodies.
    pub fn recompute_statistics(&mut self) -> Statistics {
        stats::recompute(self)
    }

    // === RENDER EXTRACT ===

    /// Fill the drawable buffer; returns the number of bodies written
    pub fn extract_drawables(&mut self) -> usize {
        render_extract::extract_drawables(self)
    }

    pub fn drawables(&self) -> &[f32] {
        &self.render_buffer
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
