//! RNG module - random shape and color selection for new pieces
//!
//! Each spawn draws a shape uniformly from the catalog and, independently,
//! a color uniformly from the palette. The random source is injected so a
//! seed fully determines the spawn sequence; the default generator is
//! Xoshiro256**.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::shapes::{Shape, SHAPES};
use crate::types::Color;

/// Source of (shape, color) pairs for newly spawned pieces
#[derive(Debug, Clone)]
pub struct PieceSource<R = Xoshiro256StarStar> {
    rng: R,
}

impl PieceSource {
    /// Create a source seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PieceSource<R> {
    /// Wrap an existing random generator
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_shape(&mut self) -> &'static Shape {
        &SHAPES[self.rng.random_range(0..SHAPES.len())]
    }

    pub fn next_color(&mut self) -> Color {
        Color::ALL[self.rng.random_range(0..Color::ALL.len())]
    }

    /// Draw the shape and color of the next piece
    pub fn next_spawn(&mut self) -> (&'static Shape, Color) {
        let shape = self.next_shape();
        let color = self.next_color();
        (shape, color)
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}
