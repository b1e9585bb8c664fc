//! Drawing boundary between the game core and whatever shows it.
//!
//! The core only ever asks for one primitive: fill a square block at a pixel
//! position with a color. Terminal views, test recorders and anything else
//! implement [`BlockSink`].

use crate::types::Color;

/// Receiver of block fill commands
pub trait BlockSink {
    /// Fill a `size` x `size` square whose top-left corner is at `(px, py)`.
    ///
    /// Coordinates can be negative for pieces still partly above the grid;
    /// sinks clip as they see fit.
    fn fill_block(&mut self, px: i32, py: i32, size: u32, color: Color);
}

/// A single recorded fill command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillBlock {
    pub px: i32,
    pub py: i32,
    pub size: u32,
    pub color: Color,
}

/// A sink that records every command it receives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    blocks: Vec<FillBlock>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[FillBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Forget recorded commands, keeping the allocation
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        self.blocks.iter().any(|b| b.px == px && b.py == py)
    }
}

impl BlockSink for DrawList {
    fn fill_block(&mut self, px: i32, py: i32, size: u32, color: Color) {
        self.blocks.push(FillBlock {
            px,
            py,
            size,
            color,
        });
    }
}
