//! Id-keyed entity storage
//!
//! Entities live in a vector kept in ascending id order (ids are assigned
//! from a monotonic counter, so insertion order is id order). Counts are
//! tiny - well under thirty live entities - so lookups are linear scans.

use glam::Vec2;
use thiserror::Error;

use super::entity::{Entity, EntityId, EntityKind};

/// Lookup failure for a stale or never-issued handle.
///
/// Gameplay never produces this: the sim only dereferences handles it has
/// just collected or that its slot-table invariants keep alive. It exists so
/// a broken invariant fails loudly instead of corrupting the frame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no entity with id {0}")]
    NotFound(u32),
}

/// Owns every live entity, keyed by [`EntityId`]
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    next_id: u32,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity and return its engine-assigned handle.
    ///
    /// Velocity and rotation start at zero; callers set them through
    /// [`get_mut`](Self::get_mut) after spawning.
    pub fn spawn(
        &mut self,
        kind: EntityKind,
        pos: Vec2,
        radius: f32,
        sprite: &'static str,
    ) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            kind,
            pos,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            rot_speed: 0.0,
            radius,
            sprite,
        });
        id
    }

    /// Destroy an entity. Despawning an already-stale handle is a no-op.
    pub fn despawn(&mut self, id: EntityId) {
        self.entities.retain(|e| e.id != id);
    }

    /// Destroy every live entity. Handles are not reissued.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn get(&self, id: EntityId) -> Result<&Entity, StoreError> {
        self.entities
            .iter()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id.0))
    }

    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut Entity, StoreError> {
        self.entities
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id.0))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.iter().any(|e| e.id == id)
    }

    /// Handles of every live entity, in ascending id order.
    pub fn all_ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|e| e.id).collect()
    }

    /// Handles of every live entity of `kind`, in ascending id order.
    pub fn ids_of(&self, kind: EntityKind) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.id)
            .collect()
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_assigns_ascending_ids() {
        let mut store = EntityStore::new();
        let a = store.spawn(EntityKind::Asteroid, Vec2::ZERO, 22.0, "meteor_L01");
        let b = store.spawn(EntityKind::Enemy, Vec2::ZERO, 22.0, "enemy");
        assert!(a < b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_despawn_and_stale_lookup() {
        let mut store = EntityStore::new();
        let id = store.spawn(EntityKind::Beam, Vec2::ZERO, 16.0, "effect_purple");
        assert!(store.get(id).is_ok());

        store.despawn(id);
        assert!(!store.contains(id));
        assert_eq!(store.get(id).unwrap_err(), StoreError::NotFound(id.raw()));

        // Stale despawn is a no-op
        store.despawn(id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_of_filters_by_kind_in_id_order() {
        let mut store = EntityStore::new();
        let a1 = store.spawn(EntityKind::Asteroid, Vec2::ZERO, 22.0, "meteor_L01");
        let e1 = store.spawn(EntityKind::Enemy, Vec2::ZERO, 22.0, "enemy");
        let a2 = store.spawn(EntityKind::Asteroid, Vec2::ZERO, 22.0, "meteor_L01");

        assert_eq!(store.ids_of(EntityKind::Asteroid), vec![a1, a2]);
        assert_eq!(store.ids_of(EntityKind::Enemy), vec![e1]);
        assert_eq!(store.count_of(EntityKind::Player), 0);
        assert_eq!(store.all_ids(), vec![a1, e1, a2]);
    }

    #[test]
    fn test_ids_not_reissued_after_clear() {
        let mut store = EntityStore::new();
        let old = store.spawn(EntityKind::Player, Vec2::ZERO, 26.0, "player");
        store.clear();
        let new = store.spawn(EntityKind::Player, Vec2::ZERO, 26.0, "player");
        assert_ne!(old, new);
        assert!(store.get(old).is_err());
    }

    #[test]
    fn test_get_mut_mutates_in_place() {
        let mut store = EntityStore::new();
        let id = store.spawn(EntityKind::Beam, Vec2::new(5.0, 5.0), 16.0, "effect_purple");
        store.get_mut(id).unwrap().velocity = Vec2::new(0.0, -10.0);
        store.get_mut(id).unwrap().advance();
        assert_eq!(store.get(id).unwrap().pos, Vec2::new(5.0, -5.0));
    }
}
