use crate::domain::config::WorldConfig;
use crate::simulation::{SimulationCore, StatsSink};

use super::cadence::Cadence;

/// What one `pump` did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpReport {
    pub spawn_ticks: u32,
    pub stats_ticks: u32,
}

/// Headless scheduler for the spawn and statistics cadences.
///
/// The host calls `pump` with a monotonic clock (e.g. from its frame loop);
/// every overdue tick runs to completion before `pump` returns. Frames are
/// not driven here; the host calls `SimulationCore::frame_with` itself.
#[derive(Clone, Debug)]
pub struct Scheduler {
    spawn: Cadence,
    stats: Cadence,
    running: bool,
}

impl Scheduler {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            spawn: Cadence::new(config.spawn_interval_ms),
            stats: Cadence::new(config.stats_interval_ms),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Halt both cadences; later pumps do nothing
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resume; both cadences fire on the next pump and re-anchor there
    pub fn resume(&mut self) {
        self.running = true;
        self.spawn.reset();
        self.stats.reset();
    }

    /// Run every tick due at `now_ms`. Spawn ticks run before stats ticks so
    /// a published snapshot includes this pump's spawns.
    pub fn pump<S: StatsSink + ?Sized>(
        &mut self,
        now_ms: f64,
        sim: &mut SimulationCore,
        sink: &mut S,
    ) -> PumpReport {
        if !self.running {
            return PumpReport::default();
        }

        let spawn_ticks = self.spawn.due(now_ms);
        for _ in 0..spawn_ticks {
            sim.spawn_tick();
        }

        let stats_ticks = self.stats.due(now_ms);
        if stats_ticks > 0 {
            // Recomputing is idempotent between mutations; publish once
            let stats = sim.recompute_statistics();
            sink.publish(&stats);
        }

        PumpReport {
            spawn_ticks,
            stats_ticks,
        }
    }
}
