//! Line segment rasterization (bidirectional integer Bresenham).

use crate::core::{PixelBuffer, Viewport};
use crate::error::RasterResult;
use crate::math::Vec2;
use crate::primitives::require_well_formed;
use crate::types::Material;

/// A world-space segment painted with one material set.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p1: Vec2,
    p2: Vec2,
    materials: Vec<Material>,
}

impl Line {
    pub fn new(p1: Vec2, p2: Vec2, material: Material) -> RasterResult<Self> {
        Self::with_materials(p1, p2, vec![material])
    }

    /// A segment painted with several equal-role materials per cell.
    /// An empty set is legal and paints nothing.
    pub fn with_materials(p1: Vec2, p2: Vec2, materials: Vec<Material>) -> RasterResult<Self> {
        require_well_formed(&materials)?;
        Ok(Self { p1, p2, materials })
    }

    pub fn rasterize(&self, viewport: &Viewport, buffer: &mut PixelBuffer) {
        let (x1, y1) = buffer.world_to_buffer(viewport, self.p1);
        let (x2, y2) = buffer.world_to_buffer(viewport, self.p2);

        let w = buffer.width() as i64;
        let h = buffer.height() as i64;
        // Both endpoints strictly on the same out-of-bounds side means
        // the segment cannot touch the grid.
        if (x1 < 0 && x2 < 0)
            || (x1 >= w && x2 >= w)
            || (y1 < 0 && y2 < 0)
            || (y1 >= h && y2 >= h)
        {
            log::debug!("line ({x1},{y1})-({x2},{y2}) outside {w}x{h} buffer, skipping");
            return;
        }

        draw_segment_cells(buffer, (x1, y1), (x2, y2), &self.materials);
    }
}

/// Cells this far outside the grid cannot change it. Projected
/// endpoints get clipped to this band so the walk stays bounded and
/// the error arithmetic cannot overflow on extreme coordinates.
const CLIP_MARGIN: i64 = 64;

/// Coordinates are saturated to this range before clipping. Past a
/// million cells the slope across the visible window no longer moves
/// by a whole cell, and f64 still resolves the clip intersections
/// exactly at this scale.
pub(crate) const COORD_LIMIT: i64 = 1 << 20;

/// Parametric clip of the segment to the guard band around a `w`x`h`
/// grid. Returns `None` when the segment misses the band entirely.
/// Segments already inside the band come back unchanged.
fn clip_to_band(a: (i64, i64), b: (i64, i64), w: i64, h: i64) -> Option<((i64, i64), (i64, i64))> {
    let (x_lo, x_hi) = (-CLIP_MARGIN, w - 1 + CLIP_MARGIN);
    let (y_lo, y_hi) = (-CLIP_MARGIN, h - 1 + CLIP_MARGIN);
    let inside = |p: (i64, i64)| p.0 >= x_lo && p.0 <= x_hi && p.1 >= y_lo && p.1 <= y_hi;
    if inside(a) && inside(b) {
        return Some((a, b));
    }

    let (x1, y1) = (a.0 as f64, a.1 as f64);
    let dx = b.0 as f64 - x1;
    let dy = b.1 as f64 - y1;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, x1 - x_lo as f64),
        (dx, x_hi as f64 - x1),
        (-dy, y1 - y_lo as f64),
        (dy, y_hi as f64 - y1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    let point = |t: f64| {
        (
            ((x1 + t * dx).round() as i64).clamp(x_lo, x_hi),
            ((y1 + t * dy).round() as i64).clamp(y_lo, y_hi),
        )
    };
    Some((point(t0), point(t1)))
}

/// Paint every cell of the segment from `a` to `b` inclusive.
///
/// Bidirectional Bresenham: independent step signs per axis and a
/// single error accumulator, so every slope and direction produces a
/// gap-free path and each cell is painted exactly once. Endpoints far
/// outside the grid are clipped to a guard band first.
pub(crate) fn draw_segment_cells(
    buffer: &mut PixelBuffer,
    a: (i64, i64),
    b: (i64, i64),
    materials: &[Material],
) {
    let w = buffer.width() as i64;
    let h = buffer.height() as i64;
    let cap = |(px, py): (i64, i64)| {
        (
            px.clamp(-COORD_LIMIT, COORD_LIMIT),
            py.clamp(-COORD_LIMIT, COORD_LIMIT),
        )
    };
    let Some(((mut x, mut y), (x2, y2))) = clip_to_band(cap(a), cap(b), w, h) else {
        return;
    };

    let dx = (x2 - x).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let dy = -(y2 - y).abs();
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        buffer.paint_slice(x, y, materials);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// World-space variant used by triangle and polygon outlines.
pub(crate) fn draw_segment(
    viewport: &Viewport,
    buffer: &mut PixelBuffer,
    a: Vec2,
    b: Vec2,
    materials: &[Material],
) {
    let pa = buffer.world_to_buffer(viewport, a);
    let pb = buffer.world_to_buffer(viewport, b);

    let w = buffer.width() as i64;
    let h = buffer.height() as i64;
    if (pa.0 < 0 && pb.0 < 0)
        || (pa.0 >= w && pb.0 >= w)
        || (pa.1 < 0 && pb.1 < 0)
        || (pa.1 >= h && pb.1 >= h)
    {
        return;
    }

    draw_segment_cells(buffer, pa, pb, materials);
}
