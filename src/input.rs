//! Pointer input shaping
//!
//! Frontends report pointer positions normalized to [0, 1] per axis. The edge
//! band is compressed toward the center so the player never has to pin the
//! pointer against a screen edge to reach the play-field border.

use glam::Vec2;

use crate::consts::{POINTER_BAND_HI, POINTER_BAND_LO, POINTER_EDGE_FACTOR};

fn damp_axis(v: f32) -> f32 {
    if v > POINTER_BAND_HI {
        POINTER_BAND_HI + (v - POINTER_BAND_HI) * POINTER_EDGE_FACTOR
    } else if v < POINTER_BAND_LO {
        POINTER_BAND_LO - (POINTER_BAND_LO - v) * POINTER_EDGE_FACTOR
    } else {
        v
    }
}

/// Apply edge damping to a normalized pointer position
pub fn damp_pointer(nx: f32, ny: f32) -> Vec2 {
    Vec2::new(damp_axis(nx), damp_axis(ny))
}

/// Map a damped normalized position into world coordinates at the current
/// camera scale. The origin is the viewport center.
pub fn pointer_to_world(norm: Vec2, viewport: Vec2, scale: f32) -> Vec2 {
    Vec2::new(
        (norm.x * viewport.x - viewport.x / 2.0) / scale,
        (norm.y * viewport.y - viewport.y / 2.0) / scale,
    )
}
