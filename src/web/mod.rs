//! Browser glue (wasm32 only)
//!
//! - canvas: `Renderer` over a 2D canvas context
//! - dom:    statistics counters, toggle labels, page title
//! - runner: frame loop + spawn/stats intervals with start/stop

pub mod canvas;
pub mod dom;
pub mod runner;

pub use runner::Runner;
