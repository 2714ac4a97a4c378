//! Circle rasterization (midpoint outline + disc fill).

use crate::core::{PixelBuffer, Viewport};
use crate::error::RasterResult;
use crate::math::Vec2;
use crate::primitives::require_well_formed;
use crate::types::Material;

/// A world-space circle with an outline material set and an optional
/// fill material.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Vec2,
    radius: f64,
    edge: Vec<Material>,
    fill: Option<Material>,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64, edge: Material, fill: Option<Material>) -> RasterResult<Self> {
        Self::with_edge_set(center, radius, vec![edge], fill)
    }

    /// A circle whose outline cells each receive a whole set of
    /// equal-role materials. An empty set draws no outline.
    pub fn with_edge_set(
        center: Vec2,
        radius: f64,
        edge: Vec<Material>,
        fill: Option<Material>,
    ) -> RasterResult<Self> {
        require_well_formed(&edge)?;
        if let Some(f) = &fill {
            require_well_formed(std::slice::from_ref(f))?;
        }
        Ok(Self {
            center,
            radius,
            edge,
            fill,
        })
    }

    pub fn rasterize(&self, viewport: &Viewport, buffer: &mut PixelBuffer) {
        let (cx, cy) = buffer.world_to_buffer(viewport, self.center);
        // Buffer-space radius: x-distance between the projected
        // (radius, 0) and the projected origin. This keeps the radius
        // honest for off-center and non-uniform viewports. Widened to
        // i128 because both projections saturate independently, and
        // clamped so squared distances stay representable.
        let (rx, _) = buffer.world_to_buffer(viewport, Vec2::new(self.radius, 0.0));
        let (ox, _) = buffer.world_to_buffer(viewport, Vec2::ZERO);
        const RADIUS_CLAMP: i128 = 1 << 62;
        let r = (i128::from(rx) - i128::from(ox)).min(RADIUS_CLAMP);

        // Collapsed to a point (or inverted): nothing to draw.
        if r <= 0 {
            log::debug!("circle at ({cx},{cy}) has degenerate buffer radius {r}, skipping");
            return;
        }

        let w = buffer.width() as i64;
        let h = buffer.height() as i64;
        let (cxl, cyl) = (i128::from(cx), i128::from(cy));
        if cxl + r < 0 || cxl - r >= i128::from(w) || cyl + r < 0 || cyl - r >= i128::from(h) {
            log::debug!("circle at ({cx},{cy}) r={r} outside {w}x{h} buffer, skipping");
            return;
        }

        self.draw_outline(buffer, cx, cy, r);

        if let Some(fill) = self.fill {
            // Disc test restricted to the grid intersection of the
            // bounding square, so the walk is bounded by the buffer
            // area no matter how large the radius is.
            let x_lo = (cxl - r).max(0) as i64;
            let x_hi = (cxl + r - 1).min(i128::from(w) - 1) as i64;
            let y_lo = (cyl - r).max(0) as i64;
            let y_hi = (cyl + r - 1).min(i128::from(h) - 1) as i64;
            let r_sq = r * r;
            for py in y_lo..=y_hi {
                for px in x_lo..=x_hi {
                    let dx = i128::from(px) - cxl;
                    let dy = i128::from(py) - cyl;
                    if dx * dx + dy * dy <= r_sq {
                        buffer.paint(px, py, fill);
                    }
                }
            }
        }
    }

    fn draw_outline(&self, buffer: &mut PixelBuffer, cx: i64, cy: i64, r: i128) {
        if self.edge.is_empty() {
            return;
        }
        let w = buffer.width() as i64;
        let h = buffer.height() as i64;

        // Outline cells track the ideal radius within two cells, so a
        // circle that much farther out than the farthest grid corner
        // cannot touch the grid at all.
        let far_sq = [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)]
            .into_iter()
            .map(|(px, py)| {
                let dx = i128::from(cx) - i128::from(px);
                let dy = i128::from(cy) - i128::from(py);
                dx * dx + dy * dy
            })
            .fold(0, i128::max);
        if (r - 2) * (r - 2) > far_sq {
            log::debug!("circle at ({cx},{cy}) r={r} has no outline cells in bounds, skipping");
            return;
        }

        // The midpoint walk costs about one iteration per radius cell.
        // An arc that wide crosses the grid as a near-straight sliver;
        // it is dropped rather than walked.
        if r > i128::from(8 * (w + h)) {
            log::debug!("circle at ({cx},{cy}) r={r} too wide for outline walk, skipping");
            return;
        }
        let r = r as i64;

        // Midpoint circle: walk one octant, paint all 8 reflections.
        let mut x0 = r;
        let mut y0: i64 = 0;
        let mut decision = 1 - r;
        while x0 >= y0 {
            for i in [-1, 1] {
                for j in [-1, 1] {
                    buffer.paint_slice(cx + i * x0, cy + j * y0, &self.edge);
                    buffer.paint_slice(cx + i * y0, cy + j * x0, &self.edge);
                }
            }
            y0 += 1;
            if decision < 0 {
                decision += 2 * y0 + 1;
            } else {
                x0 -= 1;
                decision += 2 * (y0 - x0 + 1);
            }
        }
    }
}
