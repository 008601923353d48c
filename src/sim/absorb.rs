//! Absorption and drain resolution
//!
//! Governs what happens when the player overlaps an entity. Smaller entities
//! enter a timed capture: their velocity is redirected toward the player over
//! an eased ramp so the pull-in reads smoothly instead of teleporting.
//! Larger entities drain the player on contact until one of them is gone.

use glam::Vec2;

use super::state::{Entity, EntityState, GameState, Phase};
use crate::{Tuning, direction_between, ease_in_out, polar_to_cartesian};

/// Begin the capture animation on an entity. Idempotent: entities already
/// capturing (or dead) are left alone.
pub fn start_capture(entity: &mut Entity) {
    if entity.is_active() {
        entity.state = EntityState::Capturing {
            elapsed_ms: 0.0,
            from_vel: entity.vel,
        };
    }
}

/// Debug command: pull in every active entity regardless of size.
pub fn force_absorb_all(state: &mut GameState) {
    for entity in &mut state.entities {
        start_capture(entity);
    }
}

/// Advance one capturing entity by one live tick. Returns the entity's
/// radius when the capture completed this tick.
fn step_capture(
    entity: &mut Entity,
    player_pos: Vec2,
    player_radius: f32,
    tuning: &Tuning,
    dt_ms: f32,
) -> Option<f32> {
    let EntityState::Capturing { elapsed_ms, from_vel } = &mut entity.state else {
        return None;
    };
    *elapsed_ms += dt_ms;

    // Pull toward where the player is now; the ramp only eases how hard
    let pull = polar_to_cartesian(
        tuning.pull_speed,
        direction_between(entity.pos, player_pos),
    );
    let t = (*elapsed_ms / tuning.capture_ramp_ms).clamp(0.0, 1.0);
    entity.vel = from_vel.lerp(pull, ease_in_out(t));

    // Completion margin widens with current speed so the pull cannot
    // overshoot and orbit
    let margin = (player_radius * player_radius * tuning.capture_margin_factor).sqrt()
        + entity.vel.length() * dt_ms;
    if entity.pos.distance(player_pos) <= margin {
        let gained = entity.radius;
        entity.state = EntityState::Dead;
        log::debug!("entity {} absorbed (+{:.1})", entity.id, gained);
        return Some(gained);
    }
    None
}

/// Resolve all collisions against the player for one tick.
///
/// Entities are processed largest-radius-first so a single frame cannot let
/// a small entity sneak an absorption after a larger one already shrank the
/// player below its size.
pub fn resolve(state: &mut GameState, tuning: &Tuning, dt_ms: f32) {
    state.entities.sort_by(|a, b| {
        b.radius
            .partial_cmp(&a.radius)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });

    for i in 0..state.entities.len() {
        let player_pos = state.player.pos;
        let player_radius = state.player.radius;

        match state.entities[i].state {
            EntityState::Dead => {}
            EntityState::Capturing { .. } => {
                if let Some(gained) =
                    step_capture(&mut state.entities[i], player_pos, player_radius, tuning, dt_ms)
                {
                    state.player.radius += gained;
                    state.score += f64::from(gained);
                }
            }
            EntityState::Active => {
                if !state.entities[i].overlaps(player_pos, player_radius) {
                    continue;
                }
                if state.entities[i].radius <= player_radius {
                    start_capture(&mut state.entities[i]);
                } else {
                    drain(state, i, tuning, dt_ms);
                    if state.phase == Phase::GameOver {
                        return;
                    }
                }
            }
        }
    }
}

/// One tick of a larger entity grinding the player down.
fn drain(state: &mut GameState, i: usize, tuning: &Tuning, dt_ms: f32) {
    let decrease = dt_ms / tuning.drain_constant / state.scale;
    let entity = &mut state.entities[i];

    if entity.radius < decrease {
        // Fully consumed at the player's expense
        let consumed = entity.radius;
        entity.state = EntityState::Dead;
        state.player.radius -= consumed;
    } else {
        entity.radius -= decrease;
        if entity.radius <= 0.0 {
            entity.state = EntityState::Dead;
        }
        state.player.radius -= decrease;
    }

    if state.player.radius <= 0.0 {
        state.player.radius = 0.0;
        state.enter_game_over();
    }
}
