//! Skyfall - a fixed-step arcade shooter
//!
//! Core modules:
//! - `engine`: entity store, input seam, deterministic RNG
//! - `render`: drawing surface abstraction (backends live outside the crate)
//! - `sim`: deterministic per-frame simulation (spawning, movement, collisions)
//! - `app`: host-facing lifecycle wiring input and surface to the sim

pub mod app;
pub mod engine;
pub mod render;
pub mod sim;

pub use app::Game;
pub use engine::{Entity, EntityId, EntityKind, EntityStore, GameRng, InputSource, Key, StoreError};
pub use render::{Color, NullSurface, Surface};
pub use sim::{FrameInput, GameState};

/// Game configuration constants
pub mod consts {
    /// Display dimensions (360x480 logical, doubled)
    pub const DISPLAY_WIDTH: f32 = 360.0 * 2.0;
    pub const DISPLAY_HEIGHT: f32 = 480.0 * 2.0;

    /// Entities are culled/recycled this far beyond the top or bottom edge
    pub const OFFSCREEN_MARGIN: f32 = 32.0;
    /// Vertical band above the screen that fresh spawns are scattered over
    pub const SPAWN_DEPTH: i32 = 400;

    /// Player movement per frame (per held axis, diagonals are not normalized)
    pub const SHIP_SPEED: f32 = 10.0;
    /// Player collision radius and spawn height above the bottom edge
    pub const PLAYER_RADIUS: f32 = 26.0;
    pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;

    /// Maximum simultaneous beams (fixed slot table capacity)
    pub const MAX_BEAMS: usize = 10;
    /// Beam upward speed per frame
    pub const BEAM_SPEED: f32 = 10.0;
    pub const BEAM_RADIUS: f32 = 16.0;

    /// Asteroids and enemies share a collision radius
    pub const HAZARD_RADIUS: f32 = 22.0;
    /// How many of each hazard a reset spawns
    pub const ASTEROID_COUNT: usize = 8;
    pub const ENEMY_COUNT: usize = 8;

    /// Downward fall speed range, units per frame: [min, min + spread)
    pub const FALL_SPEED_MIN: f32 = 3.0;
    pub const FALL_SPEED_SPREAD: f32 = 7.0;
    /// Asteroid rotational speed roll: [-max, max] degrees per frame
    pub const ROT_SPEED_MAX: i32 = 25;

    /// Sprite names resolved by the rendering backend
    pub const SPRITE_PLAYER: &str = "player";
    pub const SPRITE_ASTEROID: &str = "meteor_L01";
    pub const SPRITE_ENEMY: &str = "enemy";
    pub const SPRITE_BEAM: &str = "effect_purple";
}
