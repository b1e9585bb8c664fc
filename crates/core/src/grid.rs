//! Grid module - the playfield
//!
//! A fixed-size grid of cells stored as one flat row-major vector.
//! Coordinates: (x, y) with x growing right from the left wall and y growing
//! down from the top row. The default grid is 20 columns by 25 rows.
//!
//! Rows above the top (`y < 0`) are not stored. Pieces may reach into them
//! while spawning or rotating; they never hold settled blocks.

use crate::piece::ActivePiece;
use crate::render::BlockSink;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Dimensions are fixed for the grid's lifetime.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y); `None` outside the stored area
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell at (x, y) would be blocked.
    ///
    /// Walls and the floor block; so does a filled cell. Above the top only
    /// the walls count.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.width || y >= self.height as i32 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.get(x, y).is_some_and(|cell| cell.is_filled())
    }

    /// True if any cell of the piece's current rotation is blocked
    pub fn collides(&self, piece: &ActivePiece) -> bool {
        piece.cells().iter().any(|&(x, y)| self.is_blocked(x, y))
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// The caller must already know `!self.collides(piece)`. Cells above the
    /// top have nowhere to go and are dropped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        debug_assert!(!self.collides(piece), "merge of a colliding piece");
        let cell = Cell::Filled(piece.color());
        for (x, y) in piece.cells() {
            self.set(x, y, cell);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(Cell::is_filled)
    }

    /// Cells of row `y`; empty when out of range
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Remove every full row and drop the rows above into the gap.
    ///
    /// One bottom-to-top pass: non-full rows are copied down to a write
    /// cursor, then the rows left above the cursor are emptied. The grid keeps
    /// its height. Returns how many rows were removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut cleared = 0;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);
        cleared
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Emit a block for every filled cell at `(col, row) * block_size`
    pub fn render<S: BlockSink + ?Sized>(&self, sink: &mut S, block_size: u32) {
        let bs = block_size as i32;
        for (y, row) in self.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Cell::Filled(color) = *cell {
                    sink.fill_block(x as i32 * bs, y as i32 * bs, block_size, color);
                }
            }
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}
