//! GameView: draws a `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The core emits pixel-space block fills; the
//! view maps each `block_size` pixel square onto `cell_w` x `cell_h`
//! terminal glyphs inside a bordered board.

use crate::core::{BlockSink, GameState};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Color, BLOCK_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const EMPTY_DOT: Style = Style::new(Rgb::new(60, 60, 60), BOARD_BG);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), BOARD_BG);
const LABEL: Style = Style::new(Rgb::WHITE, BOARD_BG).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), BOARD_BG);

const KEY_HELP: [&str; 5] = [
    "\u{2190}/h  left",
    "\u{2192}/l  right",
    "\u{2193}/j  drop",
    "\u{2191}/k  rotate",
    "q    quit",
];

/// Terminal renderer for the game board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
    /// Terminal rows per grid cell.
    cell_h: u16,
    block_size: u32,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares the cells with typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            block_size: BLOCK_SIZE,
        }
    }

    /// Outer size of the bordered board for a grid of `cols` x `rows`
    pub fn frame_size(&self, cols: usize, rows: usize) -> (u16, u16) {
        (
            (cols as u16).saturating_mul(self.cell_w).saturating_add(2),
            (rows as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Reuses `fb` across frames; it is only resized when the viewport
    /// changes.
    pub fn render_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let grid = game.grid();
        let (frame_w, frame_h) = self.frame_size(grid.width(), grid.height());
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        let mut canvas = BoardCanvas {
            fb: &mut *fb,
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            cols: grid.width() as u32,
            rows: grid.height() as u32,
            block_size: self.block_size,
        };
        canvas.dot_empty_cells();
        game.render(&mut canvas, self.block_size);

        self.draw_side_panel(fb, game, viewport, start_x + frame_w + 2, start_y);

        if game.is_game_over() {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &GameState,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "ROWS", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &game.rows_cleared().to_string(), VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECES", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &game.pieces_spawned().to_string(), VALUE);
        y = y.saturating_add(2);

        for line in KEY_HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, VALUE);
            y = y.saturating_add(1);
        }
    }
}

/// Block sink over the board area of a framebuffer.
struct BoardCanvas<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
    cols: u32,
    rows: u32,
    block_size: u32,
}

impl BoardCanvas<'_> {
    fn dot_empty_cells(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let (x, y) = self.glyph_origin(col, row);
                self.fb
                    .fill_rect(x, y, self.cell_w, self.cell_h, '\u{b7}', EMPTY_DOT);
            }
        }
    }

    fn glyph_origin(&self, col: u32, row: u32) -> (u16, u16) {
        (
            self.origin_x.saturating_add((col as u16).saturating_mul(self.cell_w)),
            self.origin_y.saturating_add((row as u16).saturating_mul(self.cell_h)),
        )
    }
}

impl BlockSink for BoardCanvas<'_> {
    fn fill_block(&mut self, px: i32, py: i32, size: u32, color: Color) {
        // Parts above the board are not shown.
        if px < 0 || py < 0 || self.block_size == 0 {
            return;
        }
        let col = px as u32 / self.block_size;
        let row = py as u32 / self.block_size;
        if col >= self.cols || row >= self.rows {
            return;
        }
        let span = (size / self.block_size).max(1) as u16;
        let (x, y) = self.glyph_origin(col, row);
        let style = Style::new(Rgb::from(color), BOARD_BG);
        self.fb.fill_rect(
            x,
            y,
            self.cell_w.saturating_mul(span),
            self.cell_h.saturating_mul(span),
            '\u{2588}',
            style,
        );
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put_char(x, y, '\u{250c}', BORDER);
    fb.put_char(right, y, '\u{2510}', BORDER);
    fb.put_char(x, bottom, '\u{2514}', BORDER);
    fb.put_char(right, bottom, '\u{2518}', BORDER);
    for cx in x + 1..right {
        fb.put_char(cx, y, '\u{2500}', BORDER);
        fb.put_char(cx, bottom, '\u{2500}', BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '\u{2502}', BORDER);
        fb.put_char(right, cy, '\u{2502}', BORDER);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let ty = y.saturating_add(h / 2);
    fb.put_str(tx, ty, text, Style::new(Rgb::WHITE, BOARD_BG).bold());
}
