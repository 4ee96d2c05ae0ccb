use crate::domain::config::WorldConfig;
use crate::systems::integrator;

/// Fill for a body that has come to rest
pub const INERT_FILL: &str = "#DD8888";
/// Fill for a moving body
pub const ACTIVE_FILL: &str = "#BBBBBB";
pub const OUTLINE: &str = "#FFFFFF";
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Body - one circle in the pit
///
/// Position is the centre of the circle. Velocity is in pixels per frame.
/// The radius is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub(crate) radius: f32,
}

impl Body {
    pub fn new(x: f32, y: f32, dx: f32, dy: f32, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self { x, y, dx, dy, radius }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn velocity(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    /// A body is inert once both velocity components are exactly zero
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Advance one frame in place
    pub fn step(&mut self, config: &WorldConfig) {
        *self = integrator::integrate(self, config);
    }

    pub fn fill_color(&self) -> &'static str {
        if self.is_inert() {
            INERT_FILL
        } else {
            ACTIVE_FILL
        }
    }
}
