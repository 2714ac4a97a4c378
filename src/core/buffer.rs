//! PixelBuffer: a 2D grid of cells that accumulate materials during
//! rasterization and resolve to exactly one glyph each at render time.

use std::fmt;

use crate::core::rng::SimpleRng;
use crate::core::viewport::Viewport;
use crate::error::{RasterError, RasterResult};
use crate::math::Vec2;
use crate::types::Material;

/// Row-major grid of material lists.
///
/// Invariant: every cell holds at least one material (the background
/// sentinel), so resolution never sees an empty list. Painting is
/// append-only; `clear` is the only way to reset a buffer for reuse.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    cells: Vec<Vec<Material>>,
}

impl PixelBuffer {
    /// Create a buffer with every cell initialized to the background
    /// sentinel. Zero dimensions are a configuration error.
    pub fn new(width: usize, height: usize) -> RasterResult<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidBufferSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![vec![Material::background()]; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Materials accumulated in one cell, in insertion order.
    /// Returns `None` out of bounds.
    pub fn cell(&self, x: i64, y: i64) -> Option<&[Material]> {
        self.idx(x, y).map(|i| self.cells[i].as_slice())
    }

    /// Append one material to the cell at (x, y).
    /// No-op outside the grid: partially-offscreen primitives are an
    /// expected case and still paint their visible part.
    pub fn paint(&mut self, x: i64, y: i64, m: Material) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i].push(m);
        }
    }

    /// Append every material of a set to the cell at (x, y), in order.
    pub fn paint_slice(&mut self, x: i64, y: i64, ms: &[Material]) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i].extend_from_slice(ms);
        }
    }

    /// Map normalized viewport coordinates to discrete cell
    /// coordinates. Uses floor so off-viewport negatives keep rounding
    /// down instead of collapsing toward zero.
    pub fn viewport_to_buffer(&self, n: Vec2) -> (i64, i64) {
        let x = ((n.x + 1.0) / 2.0 * self.width as f64).floor() as i64;
        let y = ((n.y + 1.0) / 2.0 * self.height as f64).floor() as i64;
        (x, y)
    }

    /// Compose the full transform pipeline: world point to cell
    /// coordinates through the given viewport.
    pub fn world_to_buffer(&self, viewport: &Viewport, p: Vec2) -> (i64, i64) {
        self.viewport_to_buffer(viewport.world_to_viewport(p))
    }

    /// Reset every cell to the lone background sentinel, keeping the
    /// allocation. Painting never removes materials, so a reused
    /// buffer must be cleared between frames.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
            cell.push(Material::background());
        }
    }

    /// Resolve every cell to one glyph and lay the grid out as text.
    ///
    /// Per cell: keep only the materials at the highest priority
    /// present, then draw one of them with probability proportional to
    /// its mix weight. The RNG is seeded once per call and consumed in
    /// row-major cell order, so identical buffer contents and seed
    /// give byte-identical output.
    ///
    /// Output layout: each cell emits its glyph plus a single space
    /// (2 characters per cell), each row ends with a newline.
    pub fn resolve(&self, seed: u32) -> String {
        log::debug!(
            "resolving {}x{} buffer with seed {}",
            self.width,
            self.height,
            seed
        );
        let mut rng = SimpleRng::new(seed);
        // glyph + space per cell, newline per row
        let mut out = String::with_capacity(self.height * (self.width * 2 + 1));

        for row in self.cells.chunks(self.width) {
            for cell in row {
                out.push(Self::resolve_cell(cell, &mut rng));
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    fn resolve_cell(cell: &[Material], rng: &mut SimpleRng) -> char {
        let max_priority = cell
            .iter()
            .map(|m| m.priority)
            .max()
            .expect("cell invariant: at least the background sentinel");

        let sum_mix: f64 = cell
            .iter()
            .filter(|m| m.priority == max_priority)
            .map(|m| m.mix)
            .sum();

        // Weighted draw in accumulation order. If every candidate has
        // zero mix the draw degenerates to r = 0 and the first
        // candidate wins.
        let mut r = rng.next_f64() * sum_mix;
        let mut chosen = None;
        for m in cell.iter().filter(|m| m.priority == max_priority) {
            chosen = Some(m);
            r -= m.mix;
            if r <= 0.0 {
                break;
            }
        }
        chosen
            .expect("cell invariant: at least the background sentinel")
            .glyph
    }
}

impl fmt::Display for PixelBuffer {
    /// Renders with seed 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve(0))
    }
}
