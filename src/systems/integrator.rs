//! Integrator - per-frame kinematics for a single body
//!
//! Two modes:
//! - Free:    lossless reflection off the four walls
//! - Gravity: downward acceleration, floor settling, frictional wall bounces
//!
//! Settling thresholds decide when a body turns inert (and gets autocleared).

use crate::domain::body::Body;
use crate::domain::config::WorldConfig;

/// |dy| at or below this on the floor snaps to zero
pub const SETTLE_DY: f32 = 0.2;
/// |dx| at or below this snaps to zero
pub const SETTLE_DX: f32 = 0.05;
/// Horizontal decay per frame while rolling on the floor
pub const ROLLING_DECAY: f32 = 0.995;
/// Step used to ease a sunken body back up to the floor line
pub const FLOOR_EASE: f32 = 0.5;
/// Band above the floor line still counted as resting
pub const REST_BAND: f32 = 2.0;

/// Compute the body's state one frame later
pub fn integrate(body: &Body, config: &WorldConfig) -> Body {
    let mut next = *body;
    if config.gravity_enabled {
        apply_gravity(&mut next, config);
        bounce_with_friction(&mut next, config.world_size, config.friction_coeff);
    } else {
        reflect_free(&mut next, config.world_size);
    }

    next.x += next.dx;
    next.y += next.dy;
    next
}

/// Free mode: flip any velocity component carrying the body out through a wall
#[inline]
pub fn reflect_free(body: &mut Body, world_size: f32) {
    let r = body.radius;

    if (body.x - r <= 0.0 && body.dx < 0.0) || (body.x + r >= world_size && body.dx > 0.0) {
        body.dx = -body.dx;
    }
    if (body.y - r <= 0.0 && body.dy < 0.0) || (body.y + r >= world_size && body.dy > 0.0) {
        body.dy = -body.dy;
    }
}

/// Gravity mode: accelerate while airborne, settle once on the floor
#[inline]
pub fn apply_gravity(body: &mut Body, config: &WorldConfig) {
    let floor = config.floor();

    if body.y < floor {
        body.dy += config.gravity_accel;
    } else if body.dy.abs() <= SETTLE_DY {
        body.dy = 0.0;
        if body.y > floor {
            body.y = (body.y - FLOOR_EASE).max(floor);
        }
        body.dx *= ROLLING_DECAY;
    }

    if body.dx.abs() <= SETTLE_DX {
        body.dx = 0.0;

        // Second pass: kill residual vertical jitter of a body at rest
        if body.y >= floor - REST_BAND && body.dy.abs() <= config.gravity_accel {
            body.dy = 0.0;
        }
    }
}

/// Gravity mode walls: reflect the perpendicular component and
/// scale both components by the friction coefficient
#[inline]
pub fn bounce_with_friction(body: &mut Body, world_size: f32, friction: f32) {
    let r = body.radius;

    // Left
    if body.x - r <= 0.0 && body.dx < 0.0 {
        body.dx *= -friction;
        body.dy *= friction;
    }
    // Right
    if body.x + r >= world_size && body.dx > 0.0 {
        body.dx *= -friction;
        body.dy *= friction;
    }
    // Top
    if body.y - r <= 0.0 && body.dy < 0.0 {
        body.dy *= -friction;
        body.dx *= friction;
    }
    // Bottom
    if body.y + r >= world_size && body.dy > 0.0 {
        body.dy *= -friction;
        body.dx *= friction;
    }
}
