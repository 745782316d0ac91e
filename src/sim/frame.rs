//! Per-frame update
//!
//! One pass per display frame: read input, move and draw the player, then
//! advance, draw and collision-test every asteroid, beam and enemy in a
//! stable order. A player hit unwinds all iteration first and only then
//! resets, so no pre-reset handle is ever touched after teardown.

use std::ops::ControlFlow;

use glam::Vec2;

use super::state::GameState;
use crate::consts::*;
use crate::engine::{circles_overlap, EntityId, EntityKind, InputSource, Key, StoreError};
use crate::render::{Color, Surface};

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire was pressed this frame (edge, not held)
    pub fire: bool,
    /// Quit is held; the host loop terminates when set
    pub quit: bool,
}

impl FrameInput {
    /// Snapshot an input source for this frame. Movement and quit follow
    /// held keys; fire only triggers on the press edge.
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            left: source.key_held(Key::Left),
            right: source.key_held(Key::Right),
            up: source.key_held(Key::Up),
            down: source.key_held(Key::Down),
            fire: source.key_pressed(Key::Fire),
            quit: source.key_held(Key::Quit),
        }
    }
}

/// Advance the game by one frame and submit its draw calls to `surface`.
///
/// Expects a populated state ([`GameState::reset`] has run at least once).
/// The returned error only fires if a slot-table invariant was broken.
pub fn advance_frame(
    state: &mut GameState,
    input: &FrameInput,
    surface: &mut dyn Surface,
) -> Result<(), StoreError> {
    surface.clear(Color::BLACK);

    if run_frame(state, input, surface)?.is_break() {
        // The player was hit. All iteration has unwound, so every handle
        // from before this point is dead after the reset.
        log::info!("player hit, resetting");
        state.reset();
    }

    surface.present();
    Ok(())
}

/// The frame body. Breaks on a player hit so `advance_frame` can reset
/// outside of any entity iteration.
fn run_frame(
    state: &mut GameState,
    input: &FrameInput,
    surface: &mut dyn Surface,
) -> Result<ControlFlow<()>, StoreError> {
    let Some(player) = state.player() else {
        debug_assert!(false, "frame advanced before first reset");
        return Ok(ControlFlow::Continue(()));
    };

    steer_player(state, player, input)?;
    if input.fire {
        state.spawn_beam()?;
    }
    surface.draw(state.store.get(player)?);

    if asteroids(state, player, surface)?.is_break() {
        return Ok(ControlFlow::Break(()));
    }
    beams(state, surface)?;
    enemies(state, player, surface)
}

/// Move the ship by a fixed step per held axis. Diagonals are the plain
/// sum of both axes (deliberately √2 faster), and nothing clamps the ship
/// to the display.
fn steer_player(
    state: &mut GameState,
    player: EntityId,
    input: &FrameInput,
) -> Result<(), StoreError> {
    let mut step = Vec2::ZERO;
    if input.left {
        step.x -= SHIP_SPEED;
    }
    if input.right {
        step.x += SHIP_SPEED;
    }
    if input.up {
        step.y -= SHIP_SPEED;
    }
    if input.down {
        step.y += SHIP_SPEED;
    }
    state.store.get_mut(player)?.pos += step;
    Ok(())
}

fn asteroids(
    state: &mut GameState,
    player: EntityId,
    surface: &mut dyn Surface,
) -> Result<ControlFlow<()>, StoreError> {
    for id in state.store.ids_of(EntityKind::Asteroid) {
        state.store.get_mut(id)?.advance();
        surface.draw_rotated(state.store.get(id)?);

        // Fell past the bottom: recycle to a fresh spawn point, keeping
        // velocity and rotation speed
        if state.store.get(id)?.pos.y > DISPLAY_HEIGHT + OFFSCREEN_MARGIN {
            let respawn = state.random_spawn_point();
            state.store.get_mut(id)?.pos = respawn;
        }

        if circles_overlap(state.store.get(player)?, state.store.get(id)?) {
            return Ok(ControlFlow::Break(()));
        }
    }
    Ok(ControlFlow::Continue(()))
}

fn beams(state: &mut GameState, surface: &mut dyn Surface) -> Result<(), StoreError> {
    for slot in 0..MAX_BEAMS {
        let Some(id) = state.beams()[slot] else {
            continue;
        };
        state.store.get_mut(id)?.advance();
        surface.draw(state.store.get(id)?);

        // Off the top of the screen: slot and entity go together
        if state.store.get(id)?.pos.y < -OFFSCREEN_MARGIN {
            state.store.despawn(id);
            state.clear_beam_slot(slot);
        }
    }
    Ok(())
}

fn enemies(
    state: &mut GameState,
    player: EntityId,
    surface: &mut dyn Surface,
) -> Result<ControlFlow<()>, StoreError> {
    for id in state.store.ids_of(EntityKind::Enemy) {
        state.store.get_mut(id)?.advance();
        surface.draw(state.store.get(id)?);

        if circles_overlap(state.store.get(player)?, state.store.get(id)?) {
            return Ok(ControlFlow::Break(()));
        }

        // Lowest-indexed overlapping beam wins; one hit per enemy per frame
        for slot in 0..MAX_BEAMS {
            let Some(beam) = state.beams()[slot] else {
                continue;
            };
            if circles_overlap(state.store.get(beam)?, state.store.get(id)?) {
                state.store.despawn(beam);
                state.clear_beam_slot(slot);
                let respawn = state.random_spawn_point();
                state.store.get_mut(id)?.pos = respawn;
                log::debug!("enemy {} beamed, recycled", id.raw());
                break;
            }
        }
    }
    Ok(ControlFlow::Continue(()))
}
