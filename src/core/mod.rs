//! Core utilities shared by the simulation and the browser glue.
//!
//! - logging: console macros (must be first for macro export!)
//! - random:  seeded RNG for spawn positions and presets

#[macro_use]
pub mod logging;
pub mod random;
