//! Shape catalog - the seven tetrominoes and their rotation states
//!
//! Every shape lists its rotation states in order inside a square bounding
//! box that is the same for all of its states: 2x2 for O, 4x4 for I and 3x3
//! for the rest. Offsets are `(x, y)` from the box's top-left corner, with y
//! growing downwards.

use crate::types::ShapeKind;

/// Offset of a single occupied cell relative to the bounding box corner
pub type CellOffset = (i32, i32);

/// One rotation state - the four occupied cells of a tetromino
pub type RotationState = [CellOffset; 4];

/// An immutable tetromino definition
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    size: i32,
    rotations: &'static [RotationState],
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Edge length of the square bounding box
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of distinct rotation states (1, 2 or 4)
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Occupied cells of the rotation state at `index`, wrapping past the end
    pub fn rotation(&self, index: usize) -> &RotationState {
        &self.rotations[index % self.rotations.len()]
    }

    pub fn rotations(&self) -> &'static [RotationState] {
        self.rotations
    }
}

static I_ROTATIONS: [RotationState; 2] = [
    // horizontal on row 1
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    // vertical on column 2
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

static O_ROTATIONS: [RotationState; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

static T_ROTATIONS: [RotationState; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

static S_ROTATIONS: [RotationState; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

static Z_ROTATIONS: [RotationState; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

static J_ROTATIONS: [RotationState; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

static L_ROTATIONS: [RotationState; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// The full catalog, in [`ShapeKind::ALL`] order
pub static SHAPES: [Shape; 7] = [
    Shape {
        kind: ShapeKind::I,
        size: 4,
        rotations: &I_ROTATIONS,
    },
    Shape {
        kind: ShapeKind::O,
        size: 2,
        rotations: &O_ROTATIONS,
    },
    Shape {
        kind: ShapeKind::T,
        size: 3,
        rotations: &T_ROTATIONS,
    },
    Shape {
        kind: ShapeKind::S,
        size: 3,
        rotations: &S_ROTATIONS,
    },
    Shape {
        kind: ShapeKind::Z,
        size: 3,
        rotations: &Z_ROTATIONS,
    },
    Shape {
        kind: ShapeKind::J,
        size: 3,
        rotations: &J_ROTATIONS,
    },
    Shape {
        kind: ShapeKind::L,
        size: 3,
        rotations: &L_ROTATIONS,
    },
];

/// Look up the catalog entry for a shape kind
pub fn shape_for(kind: ShapeKind) -> &'static Shape {
    match kind {
        ShapeKind::I => &SHAPES[0],
        ShapeKind::O => &SHAPES[1],
        ShapeKind::T => &SHAPES[2],
        ShapeKind::S => &SHAPES[3],
        ShapeKind::Z => &SHAPES[4],
        ShapeKind::J => &SHAPES[5],
        ShapeKind::L => &SHAPES[6],
    }
}
