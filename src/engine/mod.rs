//! Engine collaborator layer
//!
//! The operations the game delegates to its host engine, expressed as an
//! explicit contract: an id-keyed entity store, a polled input source, and a
//! seeded RNG. Everything here is deterministic and backend-free.

pub mod entity;
pub mod input;
pub mod rng;
pub mod store;

pub use entity::{circles_overlap, Entity, EntityId, EntityKind};
pub use input::{InputSource, Key, ScriptedInput};
pub use rng::GameRng;
pub use store::{EntityStore, StoreError};
