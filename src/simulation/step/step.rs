use super::render_extract::{DrawCircle, Renderer};
use super::SimulationCore;

pub(super) fn advance(sim: &mut SimulationCore) {
    let config = &sim.config;
    for body in sim.bodies.iter_mut() {
        body.step(config);
    }
    sim.frame += 1;
}

/// Clear, then step-then-draw each body in population order.
/// Drawing right after stepping means the colour reflects the new state.
pub(super) fn frame<R: Renderer + ?Sized>(sim: &mut SimulationCore, renderer: &mut R) {
    renderer.clear();

    let config = &sim.config;
    for body in sim.bodies.iter_mut() {
        body.step(config);
        renderer.draw(&DrawCircle::from_body(body));
    }
    sim.frame += 1;
}
