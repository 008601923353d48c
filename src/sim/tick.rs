//! Per-frame session procedure
//!
//! One call per rendered frame with the elapsed wall-clock milliseconds.
//! Ordering matters: spawn top-up, score, motion and expiry, then absorption
//! in size order, pruning, and finally the camera trigger.

use super::state::{EntityState, GameState, Phase};
use super::{absorb, camera, spawn};
use crate::Tuning;
use crate::input::pointer_to_world;

/// Advance the session by one frame worth of elapsed time.
///
/// Invalid deltas (negative or non-finite) clamp to zero elapsed time.
/// Paused and game-over sessions are left untouched, animation progress
/// included.
pub fn tick(state: &mut GameState, tuning: &Tuning, dt_ms: f32) {
    let dt_ms = if dt_ms.is_finite() && dt_ms > 0.0 {
        dt_ms
    } else {
        0.0
    };

    match state.phase {
        Phase::Paused | Phase::GameOver => return,
        Phase::Running => {}
    }

    state.time_ms += f64::from(dt_ms);

    // The player tracks the damped pointer at the current camera scale
    state.player.pos = pointer_to_world(state.pointer, state.viewport, state.scale);

    spawn::top_up(state, tuning);

    state.score += f64::from(dt_ms) / 1000.0;

    let bounding = state.bounding_radius();
    let scale = state.scale;
    for entity in &mut state.entities {
        entity.pos += entity.vel * dt_ms;
        entity.age_ms += dt_ms;
        // Lifetime is coupled to speed: fast entities recycle sooner, and
        // nothing that missed the player drifts forever
        if entity.is_active()
            && entity.age_ms * entity.vel.length()
                > (bounding + entity.radius) / scale * tuning.expiry_factor
        {
            entity.state = EntityState::Dead;
        }
    }

    absorb::resolve(state, tuning, dt_ms);
    if state.phase == Phase::GameOver {
        return;
    }

    state
        .entities
        .retain(|e| !matches!(e.state, EntityState::Dead));

    camera::update_scale(state, tuning, dt_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::camera::ScaleTransition;
    use crate::sim::state::Entity;
    use glam::Vec2;

    fn quiet_state() -> (GameState, Tuning) {
        let tuning = Tuning {
            density: f32::MAX,
            ..Tuning::default()
        };
        let state = GameState::new(21, &tuning);
        (state, tuning)
    }

    #[test]
    fn test_invalid_dt_is_a_zero_tick() {
        let (mut state, tuning) = quiet_state();
        let id = state.next_entity_id();
        state.entities.push(Entity {
            id,
            pos: Vec2::new(400.0, 0.0),
            vel: Vec2::new(-0.3, 0.0),
            radius: 4.0,
            age_ms: 0.0,
            hue: 0.0,
            state: EntityState::Active,
        });

        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -5.0] {
            tick(&mut state, &tuning, bad);
        }
        assert_eq!(state.score, 0.0);
        assert_eq!(state.time_ms, 0.0);
        assert_eq!(state.entities[0].pos, Vec2::new(400.0, 0.0));
        assert_eq!(state.entities[0].age_ms, 0.0);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let (mut state, tuning) = quiet_state();
        state.scale_transition = Some(ScaleTransition::new(1.0));
        let id = state.next_entity_id();
        state.entities.push(Entity {
            id,
            pos: Vec2::new(300.0, 0.0),
            vel: Vec2::ZERO,
            radius: 3.0,
            age_ms: 0.0,
            hue: 0.0,
            state: EntityState::Capturing {
                elapsed_ms: 120.0,
                from_vel: Vec2::ZERO,
            },
        });
        state.phase = Phase::Paused;

        for _ in 0..100 {
            tick(&mut state, &tuning, 16.0);
        }
        // A long pause must not fast-forward in-flight animations
        assert_eq!(state.scale_transition.unwrap().elapsed_ms, 0.0);
        assert!(matches!(
            state.entities[0].state,
            EntityState::Capturing { elapsed_ms, .. } if elapsed_ms == 120.0
        ));
        assert_eq!(state.score, 0.0);
    }

    #[test]
    fn test_game_over_tick_is_a_no_op() {
        let (mut state, tuning) = quiet_state();
        state.player.radius = 0.0;
        state.phase = Phase::GameOver;
        let score = state.score;

        tick(&mut state, &tuning, 16.0);
        assert_eq!(state.score, score);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_entities_expire_within_a_bounded_tick_count() {
        let (mut state, tuning) = quiet_state();
        state.viewport = Vec2::new(100.0, 100.0);
        // Heading away from the player so it can never collide
        let id = state.next_entity_id();
        state.entities.push(Entity {
            id,
            pos: Vec2::new(150.0, 400.0),
            vel: Vec2::new(0.1, 0.0),
            radius: 5.0,
            age_ms: 0.0,
            hue: 0.0,
            state: EntityState::Active,
        });

        // Travel budget: (bounding + radius) / scale * 3 = 315 world units,
        // covered at 1.6 units per 16 ms tick => ~197 ticks
        let mut ticks = 0;
        while !state.entities.is_empty() {
            tick(&mut state, &tuning, 16.0);
            ticks += 1;
            assert!(ticks <= 250, "entity outlived its expiry bound");
        }
        assert!(ticks >= 150);
    }

    #[test]
    fn test_score_accumulates_elapsed_seconds() {
        let (mut state, tuning) = quiet_state();
        for _ in 0..125 {
            tick(&mut state, &tuning, 16.0);
        }
        assert!((state.score - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_inputs_same_state() {
        let tuning = Tuning::default();
        let mut a = GameState::new(99, &tuning);
        let mut b = GameState::new(99, &tuning);
        a.viewport = Vec2::new(200.0, 200.0);
        b.viewport = Vec2::new(200.0, 200.0);

        for i in 0..600 {
            let dt = if i % 3 == 0 { 16.0 } else { 17.0 };
            tick(&mut a, &tuning, dt);
            tick(&mut b, &tuning, dt);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.entities.len(), b.entities.len());
        assert_eq!(a.player.radius, b.player.radius);
        assert_eq!(a.scale, b.scale);
        for (ea, eb) in a.entities.iter().zip(&b.entities) {
            assert_eq!(ea.id, eb.id);
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.radius, eb.radius);
        }
    }
}
