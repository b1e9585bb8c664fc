//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and buffers
//! them until the game loop drains them at the next tick. Only key presses
//! count; repeat and release events are ignored.

pub mod map;
pub mod queue;

pub use tetriz_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::{InputQueue, INPUT_QUEUE_CAPACITY};
