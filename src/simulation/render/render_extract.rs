use crate::domain::body::{Body, OUTLINE, OUTLINE_WIDTH};

use super::SimulationCore;

/// Floats per body in the drawable buffer: x, y, radius, inert (0.0 / 1.0)
pub const DRAWABLE_STRIDE: usize = 4;

/// One filled, stroked circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCircle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f32,
}

impl DrawCircle {
    pub fn from_body(body: &Body) -> Self {
        Self {
            x: body.x,
            y: body.y,
            radius: body.radius(),
            fill: body.fill_color(),
            stroke: OUTLINE,
            stroke_width: OUTLINE_WIDTH,
        }
    }
}

/// Drawing surface the frame driver renders into
pub trait Renderer {
    /// Wipe the surface before a frame
    fn clear(&mut self);

    /// Draw one circle
    fn draw(&mut self, circle: &DrawCircle);
}

pub(super) fn extract_drawables(sim: &mut SimulationCore) -> usize {
    sim.render_buffer.clear();
    sim.render_buffer.reserve(sim.bodies.len() * DRAWABLE_STRIDE);

    for body in &sim.bodies {
        sim.render_buffer.extend_from_slice(&[
            body.x,
            body.y,
            body.radius(),
            if body.is_inert() { 1.0 } else { 0.0 },
        ]);
    }

    sim.bodies.len()
}
