//! Game entities and the per-frame physics step
//!
//! An entity is a sprite with identity, position, velocity and a circular
//! collision radius. All speeds are in units per frame: the game runs a
//! fixed step and never scales movement by wall-clock time.

use glam::Vec2;

/// Opaque handle to an entity in the [`EntityStore`](super::EntityStore).
///
/// Handles are engine-assigned, unique for the lifetime of the store, and
/// become stale once the entity is despawned. Stale handles must not be
/// retained across a game reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// Raw id value, for logging.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// What an entity is, and how the game treats it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The one player ship
    Player,
    /// Falling rock, lethal to the player, immune to beams
    Asteroid,
    /// Falling saucer, lethal to the player, recycled by beam hits
    Enemy,
    /// Player projectile, travels straight up
    Beam,
}

/// A live game object
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub velocity: Vec2,
    /// Current orientation in degrees (rendering only)
    pub rotation: f32,
    /// Degrees added to `rotation` each frame
    pub rot_speed: f32,
    /// Circular collision radius
    pub radius: f32,
    /// Sprite name resolved by the rendering backend
    pub sprite: &'static str,
}

impl Entity {
    /// Apply one fixed-step physics update: velocity to position,
    /// rotational speed to orientation.
    pub fn advance(&mut self) {
        self.pos += self.velocity;
        self.rotation += self.rot_speed;
    }
}

/// Circular overlap test by radius sum.
pub fn circles_overlap(a: &Entity, b: &Entity) -> bool {
    let reach = a.radius + b.radius;
    a.pos.distance_squared(b.pos) <= reach * reach
}
