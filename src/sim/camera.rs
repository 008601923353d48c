//! Camera scale controller
//!
//! Every time the player's screen-space radius crosses a fixed budget, the
//! scale eases down to half its value, doubling the effective world radius.
//! This keeps rendering and collision math numerically well-scaled no matter
//! how large the player grows in pre-scale units.
//!
//! The transition is single-flight and cancelable: a trigger while one is in
//! flight is a no-op, and a reset drops it mid-ease without forcing a final
//! value.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::{Tuning, ease_in_out};

/// An in-flight zoom-out. At most one exists per session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTransition {
    pub from: f32,
    pub to: f32,
    /// Live (unpaused) ms since the transition began
    pub elapsed_ms: f32,
}

impl ScaleTransition {
    pub fn new(from: f32) -> Self {
        Self {
            from,
            to: from / 2.0,
            elapsed_ms: 0.0,
        }
    }

    /// Advance by one live tick; returns the eased scale and whether the
    /// transition has settled.
    fn step(&mut self, dt_ms: f32, duration_ms: f32) -> (f32, bool) {
        self.elapsed_ms += dt_ms;
        let t = (self.elapsed_ms / duration_ms).clamp(0.0, 1.0);
        let ease = ease_in_out(t);
        (self.from + (self.to - self.from) * ease, t >= 1.0)
    }
}

/// Advance any in-flight transition, then evaluate the trigger condition.
/// The in-flight guard makes concurrent triggers no-ops.
pub fn update_scale(state: &mut GameState, tuning: &Tuning, dt_ms: f32) {
    if let Some(transition) = &mut state.scale_transition {
        let (scale, done) = transition.step(dt_ms, tuning.scale_duration_ms);
        state.scale = scale;
        if done {
            log::debug!("scale settled at {:.4}", state.scale);
            state.scale_transition = None;
        }
        return;
    }

    if state.player.radius * state.scale > tuning.zoom_threshold {
        log::info!(
            "zoom-out: scale {:.4} -> {:.4}",
            state.scale,
            state.scale / 2.0
        );
        state.scale_transition = Some(ScaleTransition::new(state.scale));
    }
}
