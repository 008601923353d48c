//! Session state and core simulation types
//!
//! Everything needed to reproduce a session lives here and serializes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::ScaleTransition;
use crate::Tuning;
use crate::consts::{DEFAULT_VIEWPORT_H, DEFAULT_VIEWPORT_W};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ticks advance the simulation
    Running,
    /// Ticks are ignored; animation progress is frozen, not lost
    Paused,
    /// Terminal until an external reset
    GameOver,
}

/// Entity lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityState {
    Active,
    /// Being pulled into the player. `elapsed_ms` is accumulated live
    /// (unpaused) time, so a long pause cannot fast-forward the pull.
    Capturing { elapsed_ms: f32, from_vel: Vec2 },
    /// Fully captured, drained away, or expired; pruned at end of tick
    Dead,
}

/// A non-player circle: food when smaller than the player, threat when bigger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Live ms since spawn; together with speed this drives expiry
    pub age_ms: f32,
    /// Spawn-time hue in degrees, kept for external renderers
    pub hue: f32,
    pub state: EntityState,
}

impl Entity {
    pub fn is_active(&self) -> bool {
        matches!(self.state, EntityState::Active)
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.state, EntityState::Capturing { .. })
    }

    /// Circle overlap test against another center and radius
    pub fn overlaps(&self, pos: Vec2, radius: f32) -> bool {
        let r = self.radius + radius;
        self.pos.distance_squared(pos) < r * r
    }
}

/// The player-controlled absorber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG owned by the session; the only randomness source
    pub rng: Pcg32,
    pub phase: Phase,
    /// Accumulates elapsed seconds plus absorbed radii
    pub score: f64,
    /// Camera scale in (0, 1]; written only by the scale transition
    pub scale: f32,
    /// Frontend viewport size in px; `max(w, h)` is the bounding radius
    pub viewport: Vec2,
    /// Damped normalized pointer; the world target derives from it each tick
    pub pointer: Vec2,
    pub player: Player,
    pub entities: Vec<Entity>,
    /// The single in-flight zoom-out, if any
    pub scale_transition: Option<ScaleTransition>,
    /// Accumulated live (unpaused) session time
    pub time_ms: f64,
    next_id: u64,
}

impl GameState {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Running,
            score: 0.0,
            scale: 1.0,
            viewport: Vec2::new(DEFAULT_VIEWPORT_W, DEFAULT_VIEWPORT_H),
            pointer: Vec2::splat(0.5),
            player: Player {
                pos: Vec2::ZERO,
                radius: tuning.min_radius,
            },
            entities: Vec::new(),
            scale_transition: None,
            time_ms: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID, monotone for the whole session
    pub fn next_entity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Radius of the circle (centered on the player's viewport) outside of
    /// which entities spawn and beyond which they are expired
    pub fn bounding_radius(&self) -> f32 {
        self.viewport.x.max(self.viewport.y)
    }

    /// Population the spawner tops up toward
    pub fn target_population(&self, density: f32) -> usize {
        (self.viewport.x * self.viewport.y / density).max(0.0) as usize
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Enter the terminal state: per-entity state is discarded, not merely
    /// paused, and any in-flight zoom-out is cancelled mid-ease.
    pub fn enter_game_over(&mut self) {
        log::info!(
            "game over: score {:.0}, survived {:.1}s",
            self.score,
            self.time_ms / 1000.0
        );
        self.phase = Phase::GameOver;
        self.player.radius = 0.0;
        self.entities.clear();
        self.scale_transition = None;
    }

    /// Return to start-of-session values. Cancels all in-flight capture and
    /// scale animations; reseeds the RNG so a reset run replays identically.
    pub fn reset(&mut self, tuning: &Tuning) {
        log::info!("session reset");
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.phase = Phase::Running;
        self.score = 0.0;
        self.scale = 1.0;
        self.pointer = Vec2::splat(0.5);
        self.player = Player {
            pos: Vec2::ZERO,
            radius: tuning.min_radius,
        };
        self.entities.clear();
        self.scale_transition = None;
        self.time_ms = 0.0;
    }
}
