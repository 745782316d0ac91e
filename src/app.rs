//! Host-facing game lifecycle
//!
//! The host engine owns the real loop and calls in three times: once at
//! startup, once per display frame, once at shutdown. [`Game`] wires an
//! input backend and a drawing surface to the simulation for those calls.

use crate::engine::{InputSource, StoreError};
use crate::render::Surface;
use crate::sim::{advance_frame, FrameInput, GameState};

/// A running game: state plus its input and surface collaborators
pub struct Game<I, S> {
    state: GameState,
    input: I,
    surface: S,
}

impl<I: InputSource, S: Surface> Game<I, S> {
    pub fn new(seed: u64, input: I, surface: S) -> Self {
        Self {
            state: GameState::new(seed),
            input,
            surface,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Startup: build the initial entity population.
    pub fn on_start(&mut self) {
        log::info!("game starting, seed {}", self.state.rng.seed());
        self.state.reset();
    }

    /// One display frame. Returns whether the host loop should terminate.
    ///
    /// `elapsed` is part of the host contract but does not scale motion:
    /// all speeds are units per frame and the step is fixed.
    pub fn on_frame(&mut self, _elapsed: f32) -> Result<bool, StoreError> {
        let input = FrameInput::poll(&self.input);
        advance_frame(&mut self.state, &input, &mut self.surface)?;
        Ok(input.quit)
    }

    /// Shutdown: tear down every entity.
    pub fn on_exit(&mut self) {
        self.state.store.clear();
        log::info!("game exited");
    }
}
