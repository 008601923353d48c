//! Entity spawning
//!
//! Keeps the population topped up against a density target relative to
//! viewport area. Spawn-time parameters hold the difficulty shape: sizes are
//! right-skewed so most spawns are food and a controlled tail is threats,
//! and speed scales inversely with size so the small ones dart in.

use std::f32::consts::TAU;

use rand::Rng;

use super::state::{Entity, EntityState, GameState};
use crate::{Tuning, polar_to_cartesian};

/// Top up the population toward the viewport-area density target.
/// At most one entity spawns per tick; the expiry rule bounds the rest.
pub fn top_up(state: &mut GameState, tuning: &Tuning) {
    if state.entities.len() < state.target_population(tuning.density) {
        let entity = spawn(state, tuning);
        state.entities.push(entity);
    }
}

/// Derive spawn-time parameters for one inbound entity.
pub fn spawn(state: &mut GameState, tuning: &Tuning) -> Entity {
    let bounding = state.bounding_radius();
    let scale = state.scale;
    let player_radius = state.player.radius;
    let id = state.next_entity_id();
    let rng = &mut state.rng;

    // On a circle outside the visible field, scaled to stay outside as the
    // camera zooms out
    let pos = polar_to_cartesian(1.5 * bounding / scale, rng.random_range(0.0..TAU));

    // Right-skewed size draw relative to the current player radius
    let u: f32 = rng.random();
    let radius =
        (u.powf(tuning.size_exponent) * (player_radius + tuning.size_bonus)).round() / scale.sqrt()
            + 1.0;

    // Aim at a jittered point inside the field rather than the exact origin
    // so trajectories are not perfectly radial
    let target = polar_to_cartesian(
        rng.random::<f32>() * bounding / scale,
        rng.random_range(0.0..TAU),
    );
    let speed = ((1.0 / radius) + rng.random::<f32>() * tuning.speed_jitter) / (scale * scale);
    let vel = (target - pos).normalize_or_zero() * speed;

    let hue = rng.random_range(0.0..360.0);

    Entity {
        id,
        pos,
        vel,
        radius,
        age_ms: 0.0,
        hue,
        state: EntityState::Active,
    }
}
