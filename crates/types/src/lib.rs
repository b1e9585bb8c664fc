//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the game core, the terminal layer and the binary alike.
//!
//! # Playfield Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_WIDTH` | 20 | Columns (indexed 0-19) |
//! | `GRID_HEIGHT` | 25 | Rows (indexed 0-24, row 0 at the top) |
//! | `BLOCK_SIZE` | 20 | Pixel edge of one cell on the canvas |
//! | `CANVAS_WIDTH` | 400 | `GRID_WIDTH * BLOCK_SIZE` |
//! | `CANVAS_HEIGHT` | 500 | `GRID_HEIGHT * BLOCK_SIZE` |
//!
//! # Timing
//!
//! The game advances one gravity row per tick at `TICKS_PER_SECOND` (10).
//!
//! # Examples
//!
//! ```
//! use tetriz_types::{Cell, Color, ShapeKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//!
//! let cell = Cell::Filled(Color::Red);
//! assert!(cell.is_filled());
//! assert!(Cell::default().is_empty());
//!
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (20, 25));
//! ```

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: usize = 20;

/// Grid height in cells (25 rows)
pub const GRID_HEIGHT: usize = 25;

/// Edge length of one block on the canvas, in pixels
pub const BLOCK_SIZE: u32 = 20;

/// Canvas width in pixels (400)
pub const CANVAS_WIDTH: u32 = GRID_WIDTH as u32 * BLOCK_SIZE;

/// Canvas height in pixels (500)
pub const CANVAS_HEIGHT: u32 = GRID_HEIGHT as u32 * BLOCK_SIZE;

/// Default tick rate; gravity moves the active piece one row per tick
pub const TICKS_PER_SECOND: u32 = 10;

/// Upper bound accepted for a configured tick rate
pub const MAX_TICKS_PER_SECOND: u32 = 1000;

/// The seven tetromino shape kinds
///
/// The kind is only the identity of a shape; the color a piece is drawn in
/// is picked separately from [`Color::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];
}

/// Block colors a piece can be drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// The palette new pieces draw their color from
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// 24-bit RGB value of the color
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::Green => (0, 255, 0),
            Color::Yellow => (255, 255, 0),
        }
    }
}

/// A cell of the playfield grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Player actions applied to the active piece
///
/// Quit is not an action: the input layer reports it separately and the
/// game loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks; gravity does)
    SoftDrop,
    /// Advance to the next rotation state
    Rotate,
}

/// Lifecycle of a game
///
/// `GameOver` is terminal: the state no longer changes, it is only drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    GameOver,
}
