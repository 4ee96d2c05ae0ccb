//! Systems acting on bodies
//!
//! - integrator: free-mode reflection and gravity-mode settling/bouncing

pub mod integrator;
