//! Data-driven game balance
//!
//! Every difficulty knob lives here so a frontend can load alternate balance
//! from JSON without touching sim code. Defaults reproduce observed behavior.

use serde::{Deserialize, Serialize};

use crate::consts;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player radius at session start and after reset
    pub min_radius: f32,
    /// Viewport area (px²) per target entity
    pub density: f32,
    /// Divisor converting elapsed ms into radius lost while drained
    pub drain_constant: f32,
    /// Screen-space player radius that triggers a zoom-out
    pub zoom_threshold: f32,
    /// Duration of one eased scale halving
    pub scale_duration_ms: f32,
    /// Duration of the capture pull ease-in window
    pub capture_ramp_ms: f32,
    /// Capture pull magnitude (world units per ms)
    pub pull_speed: f32,
    /// Capture completes when squared distance ≤ player radius² × this
    pub capture_margin_factor: f32,
    /// Exponent of the right-skewed spawn size draw
    pub size_exponent: f32,
    /// Additive headroom above the player radius in the size draw
    pub size_bonus: f32,
    /// Uniform noise added to the 1/size spawn speed
    pub speed_jitter: f32,
    /// Entities expire after traveling this many bounding radii
    pub expiry_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_radius: consts::MIN_RADIUS,
            density: consts::ENTITY_DENSITY,
            drain_constant: consts::DRAIN_CONSTANT,
            zoom_threshold: consts::ZOOM_THRESHOLD,
            scale_duration_ms: consts::SCALE_DURATION_MS,
            capture_ramp_ms: consts::CAPTURE_RAMP_MS,
            pull_speed: consts::PULL_SPEED,
            capture_margin_factor: consts::CAPTURE_MARGIN_FACTOR,
            size_exponent: consts::SIZE_EXPONENT,
            size_bonus: consts::SIZE_BONUS,
            speed_jitter: consts::SPEED_JITTER,
            expiry_factor: consts::EXPIRY_FACTOR,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning file; missing knobs keep defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
