//! Terminal presentation layer.
//!
//! Renders the game into a simple framebuffer (no widget toolkit) and flushes
//! it to the terminal with crossterm. Also owns the fixed-rate frame clock
//! the game loop paces itself with.
//!
//! - [`fb`]: styled glyph framebuffer
//! - [`game_view`]: maps core block fills onto the framebuffer
//! - [`renderer`]: raw-mode terminal output with differential redraw
//! - [`clock`]: N-ticks-per-second frame clock

pub mod clock;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetriz_core as core;
pub use tetriz_types as types;

pub use clock::FrameClock;
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
