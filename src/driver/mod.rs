//! Driver - cadences that advance the simulation
//!
//! - cadence:   fixed-period timer polled with a monotonic clock
//! - scheduler: spawn (1000 ms) and statistics (100 ms) cadences with a stop handle
//!
//! The browser runner (`web::runner`) uses real intervals instead; hosts that
//! own a single loop pump a `Scheduler`.

pub mod cadence;
pub mod scheduler;

pub use cadence::Cadence;
pub use scheduler::{PumpReport, Scheduler};
