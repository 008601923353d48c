//! Session facade
//!
//! The boundary a frontend drives: tick input, pointer input, control
//! commands, and queries. Transport (DOM events, canvas, winit) stays on the
//! caller's side; this type only speaks normalized positions and elapsed
//! milliseconds.

use glam::Vec2;

use crate::sim::state::{GameState, Phase};
use crate::sim::{absorb, tick};
use crate::{Tuning, input};

pub struct Session {
    state: GameState,
    tuning: Tuning,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, &tuning),
            tuning,
        }
    }

    /// Advance by elapsed milliseconds and return the authoritative
    /// snapshot. While paused or game over this is a no-op returning the
    /// frozen snapshot.
    pub fn advance(&mut self, dt_ms: f32) -> &GameState {
        tick::tick(&mut self.state, &self.tuning, dt_ms);
        &self.state
    }

    /// Pointer position in normalized viewport coordinates [0, 1]. Edge
    /// damping is applied here, before the core consumes the position.
    pub fn set_target_position(&mut self, nx: f32, ny: f32) {
        self.state.pointer = input::damp_pointer(nx, ny);
    }

    /// Report the frontend viewport size in pixels.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    pub fn pause(&mut self) {
        if self.state.phase == Phase::Running {
            self.state.phase = Phase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state.phase == Phase::Paused {
            self.state.phase = Phase::Running;
        }
    }

    /// Discard the session and return to start-of-session values.
    pub fn reset(&mut self) {
        self.state.reset(&self.tuning);
    }

    /// Debug command: start the capture animation on every active entity.
    pub fn force_absorb_all(&mut self) {
        absorb::force_absorb_all(&mut self.state);
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn current_score(&self) -> f64 {
        self.state.score
    }

    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_is_deterministic_regardless_of_prior_state() {
        let mut session = Session::new(5);
        session.resize(400.0, 300.0);
        for _ in 0..500 {
            session.advance(16.0);
        }
        session.force_absorb_all();
        session.advance(16.0);

        session.reset();
        let state = session.snapshot();
        assert_eq!(state.player.radius, 5.0);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.scale, 1.0);
        assert!(state.entities.is_empty());
        assert!(state.scale_transition.is_none());
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_game_over_boundary_is_exactly_zero() {
        let mut session = Session::new(5);
        assert!(!session.is_game_over());
        // Any positive radius is alive, however small
        session.state.player.radius = 0.01;
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut session = Session::new(5);
        session.advance(16.0);
        let score = session.current_score();

        session.pause();
        for _ in 0..50 {
            session.advance(16.0);
        }
        assert_eq!(session.current_score(), score);

        session.resume();
        session.advance(16.0);
        assert!(session.current_score() > score);
    }

    #[test]
    fn test_resume_does_not_revive_a_dead_session() {
        let mut session = Session::new(5);
        session.state.enter_game_over();
        session.resume();
        assert!(session.is_game_over());
        session.advance(16.0);
        assert!(session.is_game_over());
    }

    #[test]
    fn test_pointer_feeds_player_position() {
        let mut session = Session::new(5);
        session.resize(1000.0, 1000.0);
        session.set_target_position(0.75, 0.5);
        let state = session.advance(16.0);
        assert!((state.player.pos.x - 250.0).abs() < 1e-3);
        assert!(state.player.pos.y.abs() < 1e-3);
    }

    #[test]
    fn test_edge_pointer_is_damped_before_use() {
        let mut session = Session::new(5);
        session.resize(1000.0, 1000.0);
        session.set_target_position(1.0, 0.5);
        let state = session.advance(16.0);
        // 1.0 compresses to 0.985, i.e. 485 world units right of center
        assert!((state.player.pos.x - 485.0).abs() < 1e-3);
    }
}
