//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds all the game rules and has no dependency on terminals,
//! windows or I/O. Drawing goes out through the [`BlockSink`] trait and
//! randomness comes in through an injected, seedable generator, so the same
//! seed always plays the same game.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetrominoes and their rotation states
//! - [`piece`]: the falling piece and its moves (each with an exact inverse)
//! - [`grid`]: 20x25 playfield with collision, merge and line clearing
//! - [`rng`]: uniform random shape and color selection
//! - [`game_state`]: the per-frame state machine
//! - [`render`]: the block-fill drawing boundary
//!
//! # Example
//!
//! ```
//! use tetriz_core::{DrawList, GameState, TickEvent};
//! use tetriz_types::{GameAction, BLOCK_SIZE};
//!
//! let mut game = GameState::new(12345);
//!
//! // One frame: player input first, then gravity.
//! let event = game.step([GameAction::MoveLeft, GameAction::Rotate]);
//! assert_eq!(event, TickEvent::Fell);
//!
//! // Draw into any sink.
//! let mut frame = DrawList::new();
//! game.render(&mut frame, BLOCK_SIZE);
//! assert_eq!(frame.len(), 4);
//! ```

pub mod game_state;
pub mod grid;
pub mod piece;
pub mod render;
pub mod rng;
pub mod shapes;

pub use tetriz_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, TickEvent};
pub use grid::Grid;
pub use piece::ActivePiece;
pub use render::{BlockSink, DrawList, FillBlock};
pub use rng::PieceSource;
pub use shapes::{shape_for, Shape, SHAPES};
