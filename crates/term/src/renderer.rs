//! TerminalRenderer: flushes framebuffers to the real terminal.
//!
//! The first frame (and any frame after a resize or [`invalidate`]) is sent
//! whole; after that only runs of glyphs that changed since the previous
//! frame are rewritten.
//!
//! [`invalidate`]: TerminalRenderer::invalidate

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    previous: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            previous: None,
            out: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal to how [`enter`](Self::enter) found it.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Show `frame`, writing only what changed since the last one.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.out.clear();
        match &self.previous {
            Some(prev) if same_size(prev, frame) => encode_diff_into(prev, frame, &mut self.out)?,
            _ => encode_full_into(frame, &mut self.out)?,
        }
        self.flush().context("failed to write frame")?;

        match &mut self.previous {
            Some(prev) => prev.clone_from(frame),
            None => self.previous = Some(frame.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Encode a whole frame into `out` without touching stdout.
pub fn encode_full_into(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut current = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for glyph in frame.row(y) {
            write_glyph(out, glyph.ch, glyph.style, &mut current)?;
        }
    }
    finish(out)
}

/// Encode only the changed runs between two same-sized frames into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current = None;
    for y in 0..next.height() {
        let before = prev.row(y);
        let after = next.row(y);
        for (start, end) in changed_runs(before, after) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for glyph in &after[start..end] {
                write_glyph(out, glyph.ch, glyph.style, &mut current)?;
            }
        }
    }
    finish(out)
}

/// Half-open `[start, end)` ranges where two rows differ.
fn changed_runs<'a, T: PartialEq>(
    before: &'a [T],
    after: &'a [T],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let len = after.len();
    let differs = move |x: usize| before.get(x) != after.get(x);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < len && !differs(x) {
            x += 1;
        }
        if x >= len {
            return None;
        }
        let start = x;
        while x < len && differs(x) {
            x += 1;
        }
        Some((start, x))
    })
}

fn write_glyph(
    out: &mut Vec<u8>,
    ch: char,
    style: Style,
    current: &mut Option<Style>,
) -> Result<()> {
    if *current != Some(style) {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(term_color(style.fg)))?;
        out.queue(SetBackgroundColor(term_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        *current = Some(style);
    }
    out.queue(Print(ch))?;
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn term_color(rgb: Rgb) -> TermColor {
    TermColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
