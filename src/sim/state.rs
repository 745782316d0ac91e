//! Game state: the entity store, the beam slot table, and the spawn logic
//!
//! Everything the per-frame update mutates lives here. There are exactly two
//! macro-states: a steady playing loop, and an instantaneous reset that
//! tears down and recreates every entity within the same frame.

use glam::Vec2;

use crate::consts::*;
use crate::engine::{EntityId, EntityKind, EntityStore, GameRng, StoreError};

/// Complete game state, reproducible from its seed
#[derive(Debug)]
pub struct GameState {
    pub store: EntityStore,
    pub rng: GameRng,
    /// The one live player ship, reassigned on every reset
    player: Option<EntityId>,
    /// Fixed-capacity table of live beam handles.
    ///
    /// Invariant: an occupied slot always refers to a live `Beam` entity.
    /// Clearing a slot and despawning its beam happen together.
    beams: [Option<EntityId>; MAX_BEAMS],
}

impl GameState {
    /// Create an empty state. Call [`reset`](Self::reset) to populate it.
    pub fn new(seed: u64) -> Self {
        Self {
            store: EntityStore::new(),
            rng: GameRng::new(seed),
            player: None,
            beams: [None; MAX_BEAMS],
        }
    }

    /// Handle of the live player ship.
    ///
    /// `None` only before the first reset; the frame loop may rely on it
    /// being present afterward.
    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    /// The beam slot table, for inspection.
    pub fn beams(&self) -> &[Option<EntityId>; MAX_BEAMS] {
        &self.beams
    }

    pub(crate) fn clear_beam_slot(&mut self, slot: usize) {
        self.beams[slot] = None;
    }

    /// Tear down every entity and rebuild the initial configuration:
    /// one player centered near the bottom, eight asteroids and eight
    /// enemies scattered off-screen above, no beams.
    pub fn reset(&mut self) {
        for id in self.store.all_ids() {
            self.store.despawn(id);
        }
        self.beams = [None; MAX_BEAMS];

        let spawn = Vec2::new(
            DISPLAY_WIDTH / 2.0,
            DISPLAY_HEIGHT - PLAYER_BOTTOM_OFFSET,
        );
        self.player = Some(
            self.store
                .spawn(EntityKind::Player, spawn, PLAYER_RADIUS, SPRITE_PLAYER),
        );

        for _ in 0..ASTEROID_COUNT {
            self.spawn_asteroid();
        }
        for _ in 0..ENEMY_COUNT {
            self.spawn_enemy();
        }

        log::debug!(
            "reset: {} entities live (player id {})",
            self.store.len(),
            self.player.map(EntityId::raw).unwrap_or(0),
        );
    }

    /// A fresh spawn point: random horizontal position, random depth in the
    /// off-screen band above the display.
    pub fn random_spawn_point(&mut self) -> Vec2 {
        let x = self.rng.roll(DISPLAY_WIDTH as i32) as f32;
        let y = -OFFSCREEN_MARGIN - self.rng.roll(SPAWN_DEPTH) as f32;
        Vec2::new(x, y)
    }

    fn spawn_asteroid(&mut self) {
        let pos = self.random_spawn_point();
        let speed = self.rng.fall_speed();
        let rot = self.rng.roll_range(-ROT_SPEED_MAX, ROT_SPEED_MAX) as f32;

        let id = self
            .store
            .spawn(EntityKind::Asteroid, pos, HAZARD_RADIUS, SPRITE_ASTEROID);
        // Fresh handle, lookup cannot fail
        if let Ok(asteroid) = self.store.get_mut(id) {
            asteroid.velocity = Vec2::new(0.0, speed);
            asteroid.rot_speed = rot;
        }
    }

    fn spawn_enemy(&mut self) {
        let pos = self.random_spawn_point();
        let speed = self.rng.fall_speed();

        let id = self
            .store
            .spawn(EntityKind::Enemy, pos, HAZARD_RADIUS, SPRITE_ENEMY);
        if let Ok(enemy) = self.store.get_mut(id) {
            enemy.velocity = Vec2::new(0.0, speed);
        }
    }

    /// Fire a beam from the player's current position.
    ///
    /// The slot table is scanned in ascending index order; the first empty
    /// slot takes the new beam. A full table silently drops the request -
    /// the capacity bound caps concurrent projectiles.
    pub fn spawn_beam(&mut self) -> Result<(), StoreError> {
        let Some(player) = self.player else {
            return Ok(());
        };
        let Some(slot) = self.beams.iter().position(Option::is_none) else {
            log::trace!("beam request dropped: all {MAX_BEAMS} slots in use");
            return Ok(());
        };

        let pos = self.store.get(player)?.pos;
        let id = self
            .store
            .spawn(EntityKind::Beam, pos, BEAM_RADIUS, SPRITE_BEAM);
        self.store.get_mut(id)?.velocity = Vec2::new(0.0, -BEAM_SPEED);
        self.beams[slot] = Some(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_initial_counts() {
        let mut state = GameState::new(12345);
        assert!(state.player().is_none());

        state.reset();
        assert_eq!(state.store.count_of(EntityKind::Player), 1);
        assert_eq!(state.store.count_of(EntityKind::Asteroid), ASTEROID_COUNT);
        assert_eq!(state.store.count_of(EntityKind::Enemy), ENEMY_COUNT);
        assert!(state.beams().iter().all(Option::is_none));

        let player = state.store.get(state.player().unwrap()).unwrap();
        assert_eq!(
            player.pos,
            Vec2::new(DISPLAY_WIDTH / 2.0, DISPLAY_HEIGHT - PLAYER_BOTTOM_OFFSET)
        );
    }

    #[test]
    fn test_reset_discards_previous_entities() {
        let mut state = GameState::new(1);
        state.reset();
        let old_player = state.player().unwrap();
        state.spawn_beam().unwrap();

        state.reset();
        let new_player = state.player().unwrap();
        assert_ne!(old_player, new_player);
        assert!(!state.store.contains(old_player));
        assert!(state.beams().iter().all(Option::is_none));
        assert_eq!(state.store.len(), 1 + ASTEROID_COUNT + ENEMY_COUNT);
    }

    #[test]
    fn test_hazards_spawn_offscreen_above_falling_down() {
        let mut state = GameState::new(42);
        state.reset();

        for id in state.store.ids_of(EntityKind::Asteroid) {
            let a = state.store.get(id).unwrap();
            assert!(a.pos.y <= -OFFSCREEN_MARGIN);
            assert!((0.0..DISPLAY_WIDTH).contains(&a.pos.x));
            assert_eq!(a.velocity.x, 0.0);
            assert!((FALL_SPEED_MIN..FALL_SPEED_MIN + FALL_SPEED_SPREAD).contains(&a.velocity.y));
            assert!(a.rot_speed.abs() <= ROT_SPEED_MAX as f32);
        }
        for id in state.store.ids_of(EntityKind::Enemy) {
            let e = state.store.get(id).unwrap();
            assert!(e.pos.y <= -OFFSCREEN_MARGIN);
            assert!(e.velocity.y >= FALL_SPEED_MIN);
            assert_eq!(e.rot_speed, 0.0);
        }
    }

    #[test]
    fn test_spawn_beam_takes_lowest_empty_slot() {
        let mut state = GameState::new(7);
        state.reset();

        state.spawn_beam().unwrap();
        assert!(state.beams()[0].is_some());

        let beam = state.store.get(state.beams()[0].unwrap()).unwrap();
        let player = state.store.get(state.player().unwrap()).unwrap();
        assert_eq!(beam.pos, player.pos);
        assert_eq!(beam.velocity, Vec2::new(0.0, -BEAM_SPEED));
        assert_eq!(beam.kind, EntityKind::Beam);

        // Free slot 0 by hand, fire again: the hole is refilled first
        let first = state.beams()[0].unwrap();
        state.spawn_beam().unwrap();
        state.store.despawn(first);
        state.clear_beam_slot(0);
        state.spawn_beam().unwrap();
        assert!(state.beams()[0].is_some());
        assert_ne!(state.beams()[0].unwrap(), first);
    }

    #[test]
    fn test_spawn_beam_full_table_drops_silently() {
        let mut state = GameState::new(7);
        state.reset();

        for _ in 0..MAX_BEAMS {
            state.spawn_beam().unwrap();
        }
        let table = *state.beams();
        assert!(table.iter().all(Option::is_some));
        let live = state.store.count_of(EntityKind::Beam);
        assert_eq!(live, MAX_BEAMS);

        // Eleventh request: no new entity, table unchanged
        state.spawn_beam().unwrap();
        assert_eq!(state.store.count_of(EntityKind::Beam), live);
        assert_eq!(*state.beams(), table);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        a.reset();
        b.reset();

        for (ia, ib) in a
            .store
            .all_ids()
            .into_iter()
            .zip(b.store.all_ids())
        {
            let ea = a.store.get(ia).unwrap();
            let eb = b.store.get(ib).unwrap();
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.velocity, eb.velocity);
            assert_eq!(ea.rot_speed, eb.rot_speed);
        }
    }
}
