//! Domain types: bodies, world configuration, spawn presets, page titles

pub mod body;
pub mod config;
pub mod presets;
pub mod titles;

pub use body::Body;
pub use config::{ConfigError, WorldConfig};
