//! Preset spawn velocities
//!
//! Sixteen fixed direction/speed pairs (pixels per frame). Random spawns pick
//! one uniformly; a ring spawn uses all of them in this order.

pub const PRESET_COUNT: usize = 16;

pub const PRESET_VELOCITIES: [(f32, f32); PRESET_COUNT] = [
    // Diagonals
    (2.0, 2.0),
    (2.0, -2.0),
    (-2.0, 2.0),
    (-2.0, -2.0),
    // Axis-aligned
    (2.83, 0.0),
    (-2.83, 0.0),
    (0.0, 2.83),
    (0.0, -2.83),
    // Steep
    (1.17, 2.57),
    (1.17, -2.57),
    (-1.17, 2.57),
    (-1.17, -2.57),
    // Shallow
    (2.57, 1.17),
    (2.57, -1.17),
    (-2.57, 1.17),
    (-2.57, -1.17),
];
