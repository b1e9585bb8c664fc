//! Active piece - the falling tetromino
//!
//! A piece is a catalog shape, a rotation index, the grid position of its
//! bounding box's top-left corner and a color. Nothing here knows about the
//! grid: every operation either mutates blindly (with an exact inverse) or
//! returns a moved copy, and the caller validates with
//! [`Grid::collides`](crate::grid::Grid::collides).

use crate::render::BlockSink;
use crate::shapes::{RotationState, Shape};
use crate::types::{Color, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    shape: &'static Shape,
    rotation: usize,
    x: i32,
    y: i32,
    color: Color,
}

impl ActivePiece {
    /// Create a piece in its first rotation state at `(x, y)`
    pub fn new(shape: &'static Shape, color: Color, x: i32, y: i32) -> Self {
        Self {
            shape,
            rotation: 0,
            x,
            y,
            color,
        }
    }

    /// Create a piece at the spawn position: centered horizontally, row 0
    pub fn spawn(shape: &'static Shape, color: Color, grid_width: usize) -> Self {
        let x = grid_width as i32 / 2 - shape.size() / 2;
        Self::new(shape, color, x, 0)
    }

    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Offsets of the current rotation state
    pub fn offsets(&self) -> &'static RotationState {
        self.shape.rotation(self.rotation)
    }

    /// Absolute grid cells covered in the current rotation state
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.offsets().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Advance to the next rotation state, wrapping
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % self.shape.rotation_count();
    }

    /// Step back to the previous rotation state; inverse of [`rotate`](Self::rotate)
    pub fn rotate_back(&mut self) {
        let count = self.shape.rotation_count();
        self.rotation = (self.rotation + count - 1) % count;
    }

    /// Translate by `(dx, dy)`; `shift(-dx, -dy)` undoes it
    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Copy of this piece rotated one state forward
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut next = *self;
        next.rotate();
        next
    }

    /// Copy of this piece translated by `(dx, dy)`
    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut next = *self;
        next.shift(dx, dy);
        next
    }

    /// Emit one block per occupied cell at `(offset + cell) * block_size`
    pub fn render<S: BlockSink + ?Sized>(&self, sink: &mut S, block_size: u32) {
        let bs = block_size as i32;
        for (x, y) in self.cells() {
            sink.fill_block(x * bs, y * bs, block_size, self.color);
        }
    }
}
