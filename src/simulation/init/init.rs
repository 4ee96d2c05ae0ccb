use crate::core::random::SimRng;
use crate::domain::config::{ConfigError, WorldConfig};

use super::stats::Statistics;
use super::SimulationCore;

pub(super) fn create_core(config: WorldConfig, rng: SimRng) -> Result<SimulationCore, ConfigError> {
    config.validate()?;

    let capacity = config.max_bodies;
    let last_stats = Statistics {
        max_bodies: capacity as u32,
        ..Statistics::default()
    };

    Ok(SimulationCore {
        config,
        bodies: Vec::with_capacity(capacity),
        rng,
        total_spawned: 0,
        removed_count: 0,
        frame: 0,
        last_stats,
        render_buffer: Vec::with_capacity(capacity * super::DRAWABLE_STRIDE),
    })
}
