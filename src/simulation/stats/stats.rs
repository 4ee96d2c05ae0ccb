use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::SimulationCore;

/// Population statistics, recomputed on the stats cadence.
/// Observational only; the population itself is the source of truth.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub(crate) total_spawned: u32,
    pub(crate) max_bodies: u32,
    pub(crate) current_count: u32,
    pub(crate) active_count: u32,
    pub(crate) inert_count: u32,
    pub(crate) removed_count: u32,
}

impl Statistics {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[wasm_bindgen]
impl Statistics {
    #[wasm_bindgen(getter)]
    pub fn total_spawned(&self) -> u32 { self.total_spawned }
    #[wasm_bindgen(getter)]
    pub fn max_bodies(&self) -> u32 { self.max_bodies }
    #[wasm_bindgen(getter)]
    pub fn current_count(&self) -> u32 { self.current_count }
    #[wasm_bindgen(getter)]
    pub fn active_count(&self) -> u32 { self.active_count }
    #[wasm_bindgen(getter)]
    pub fn inert_count(&self) -> u32 { self.inert_count }
    #[wasm_bindgen(getter)]
    pub fn removed_count(&self) -> u32 { self.removed_count }
}

/// Destination for each statistics recomputation (DOM counters, tests)
pub trait StatsSink {
    fn publish(&mut self, stats: &Statistics);
}

/// Keeps only the latest snapshot
impl StatsSink for Option<Statistics> {
    fn publish(&mut self, stats: &Statistics) {
        *self = Some(*stats);
    }
}

pub(super) fn recompute(sim: &mut SimulationCore) -> Statistics {
    let mut active = 0u32;
    let mut inert = 0u32;
    for body in &sim.bodies {
        if body.is_inert() {
            inert += 1;
        } else {
            active += 1;
        }
    }

    let stats = Statistics {
        total_spawned: sim.total_spawned,
        max_bodies: sim.config.max_bodies as u32,
        current_count: active + inert,
        active_count: active,
        inert_count: inert,
        removed_count: sim.removed_count,
    };
    sim.last_stats = stats;
    stats
}
