use crate::domain::body::Body;
use crate::domain::presets::{PRESET_COUNT, PRESET_VELOCITIES};

use super::SimulationCore;

/// Side of the square box used by the "center" action
const CENTER_BOX: f32 = 100.0;

/// How `set_all_positions` places bodies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionPolicy {
    /// Uniform inside a 100x100 box around the world centre
    Center,
    /// Uniform over the full legal spawn region
    Scatter,
}

pub(super) fn spawn(sim: &mut SimulationCore) -> bool {
    if !sim.config.autospawn_enabled || sim.bodies.len() >= sim.config.max_bodies {
        return false;
    }

    let (dx, dy) = PRESET_VELOCITIES[sim.rng.index(PRESET_COUNT)];

    let r = sim.config.default_radius;
    let x = sim.rng.below(sim.config.spawn_region()) + r;
    // With gravity on, new bodies start in the upper half so they have room to fall
    let y = if sim.config.gravity_enabled {
        sim.rng.below(sim.config.center() - r) + r
    } else {
        sim.rng.below(sim.config.spawn_region()) + r
    };

    sim.bodies.push(Body::new(x, y, dx, dy, r));
    sim.total_spawned = sim.total_spawned.saturating_add(1);
    true
}

pub(super) fn spawn_ring(sim: &mut SimulationCore) {
    let c = sim.config.center();
    let r = sim.config.default_radius;

    sim.bodies.reserve(PRESET_COUNT);
    for (dx, dy) in PRESET_VELOCITIES {
        sim.bodies.push(Body::new(c, c, dx, dy, r));
    }
    sim.total_spawned = sim.total_spawned.saturating_add(PRESET_COUNT as u32);
}

pub(super) fn autoclear(sim: &mut SimulationCore) -> usize {
    if !sim.config.autoclear_enabled {
        return 0;
    }

    // Single filtering pass: every body is inspected exactly once
    let before = sim.bodies.len();
    sim.bodies.retain(|body| !body.is_inert());
    let mut removed = before - sim.bodies.len();

    // Capacity: drop from the oldest end
    let max = sim.config.max_bodies;
    if sim.bodies.len() > max {
        let excess = sim.bodies.len() - max;
        sim.bodies.drain(..excess);
        removed += excess;
    }

    sim.removed_count = sim.removed_count.saturating_add(removed as u32);
    removed
}

pub(super) fn spawn_tick(sim: &mut SimulationCore) {
    spawn(sim);
    autoclear(sim);
}

pub(super) fn set_all_positions(sim: &mut SimulationCore, policy: PositionPolicy) {
    let r = sim.config.default_radius;
    let region = sim.config.spawn_region();

    match policy {
        PositionPolicy::Center => {
            let origin = sim.config.center() - CENTER_BOX / 2.0;
            // Small worlds: keep the box inside the legal region
            let lo = r;
            let hi = r + region;
            for body in sim.bodies.iter_mut() {
                body.x = (origin + sim.rng.below(CENTER_BOX)).clamp(lo, hi);
                body.y = (origin + sim.rng.below(CENTER_BOX)).clamp(lo, hi);
            }
        }
        PositionPolicy::Scatter => {
            for body in sim.bodies.iter_mut() {
                body.x = sim.rng.below(region) + r;
                body.y = sim.rng.below(region) + r;
            }
        }
    }
}

pub(super) fn clear(sim: &mut SimulationCore) {
    let removed = sim.bodies.len() as u32;
    sim.bodies.clear();
    sim.removed_count = sim.removed_count.saturating_add(removed);
}
