//! Orbivore - a growth-and-absorption arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, absorption, camera scale)
//! - `session`: Boundary facade driven by a render/input frontend
//! - `input`: Pointer shaping applied before the core consumes positions
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player radius at session start and after reset
    pub const MIN_RADIUS: f32 = 5.0;
    /// Viewport area (px²) per target entity
    pub const ENTITY_DENSITY: f32 = 100.0;
    /// Divisor converting elapsed ms into player radius lost while drained
    pub const DRAIN_CONSTANT: f32 = 10.0;

    /// Screen-space player radius that triggers a zoom-out
    pub const ZOOM_THRESHOLD: f32 = 50.0;
    /// Duration of one eased scale halving (100 steps of 10 ms)
    pub const SCALE_DURATION_MS: f32 = 1000.0;

    /// Duration of the capture pull ease-in window
    pub const CAPTURE_RAMP_MS: f32 = 1000.0;
    /// Capture pull magnitude (world units per ms)
    pub const PULL_SPEED: f32 = 0.5;
    /// Capture completes when squared distance ≤ player radius² × this
    pub const CAPTURE_MARGIN_FACTOR: f32 = 1.5;

    /// Spawn size draw: radius ~ ⌊U^EXPONENT · (player radius + BONUS)⌉
    pub const SIZE_EXPONENT: f32 = 4.0;
    pub const SIZE_BONUS: f32 = 50.0;
    /// Uniform noise added to the 1/size spawn speed
    pub const SPEED_JITTER: f32 = 0.1;
    /// Entities expire after traveling this many bounding radii
    pub const EXPIRY_FACTOR: f32 = 3.0;

    /// Viewport before the frontend reports a real size
    pub const DEFAULT_VIEWPORT_W: f32 = 1280.0;
    pub const DEFAULT_VIEWPORT_H: f32 = 720.0;

    /// Normalized pointer band outside which positions are compressed
    pub const POINTER_BAND_LO: f32 = 0.05;
    pub const POINTER_BAND_HI: f32 = 0.95;
    pub const POINTER_EDGE_FACTOR: f32 = 0.7;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of the line from `from` to `to`
#[inline]
pub fn direction_between(from: Vec2, to: Vec2) -> f32 {
    (to - from).to_angle()
}

/// Symmetric ease-in-out curve shared by the capture and zoom animations
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
