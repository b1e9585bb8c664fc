//! Tetriz (workspace facade crate).
//!
//! Re-exports the member crates as `tetriz::{core,input,term,types}` and
//! holds the pieces only the binary needs: command-line configuration and
//! log setup.

pub mod config;
pub mod logging;

pub use tetriz_core as core;
pub use tetriz_input as input;
pub use tetriz_term as term;
pub use tetriz_types as types;
