//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only (speeds are units per frame)
//! - Seeded RNG only
//! - Stable iteration order (ascending entity id, ascending beam slot)
//! - No windowing or backend dependencies (drawing goes through `Surface`)

pub mod frame;
pub mod state;

pub use frame::{advance_frame, FrameInput};
pub use state::GameState;
