use crate::domain::config::ConfigError;

use super::SimulationCore;

/// Display label for a toggle, e.g. `Autospawn: OFF`
pub fn toggle_label(name: &str, enabled: bool) -> String {
    format!("{}: {}", name, if enabled { "ON" } else { "OFF" })
}

pub(super) fn set_gravity(sim: &mut SimulationCore, enabled: bool) -> String {
    sim.config.gravity_enabled = enabled;
    toggle_label("Gravity", enabled)
}

pub(super) fn set_autospawn(sim: &mut SimulationCore, enabled: bool) -> String {
    sim.config.autospawn_enabled = enabled;
    toggle_label("Autospawn", enabled)
}

pub(super) fn set_autoclear(sim: &mut SimulationCore, enabled: bool) -> String {
    sim.config.autoclear_enabled = enabled;
    toggle_label("Autoclear", enabled)
}

pub(super) fn set_max_bodies(sim: &mut SimulationCore, max_bodies: usize) -> Result<(), ConfigError> {
    if max_bodies == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    sim.config.max_bodies = max_bodies;
    Ok(())
}
