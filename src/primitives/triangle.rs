//! Triangle rasterization (world-space edges + barycentric fill).

use crate::core::{PixelBuffer, Viewport};
use crate::error::RasterResult;
use crate::math::Vec2;
use crate::primitives::line::{draw_segment, COORD_LIMIT};
use crate::primitives::require_well_formed;
use crate::types::Material;

/// A world-space triangle with an outline material set and an optional
/// fill material.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Vec2; 3],
    edge: Vec<Material>,
    fill: Option<Material>,
}

impl Triangle {
    pub fn new(
        p1: Vec2,
        p2: Vec2,
        p3: Vec2,
        edge: Material,
        fill: Option<Material>,
    ) -> RasterResult<Self> {
        Self::with_edge_set(p1, p2, p3, vec![edge], fill)
    }

    pub fn with_edge_set(
        p1: Vec2,
        p2: Vec2,
        p3: Vec2,
        edge: Vec<Material>,
        fill: Option<Material>,
    ) -> RasterResult<Self> {
        require_well_formed(&edge)?;
        if let Some(f) = &fill {
            require_well_formed(std::slice::from_ref(f))?;
        }
        Ok(Self {
            vertices: [p1, p2, p3],
            edge,
            fill,
        })
    }

    pub fn rasterize(&self, viewport: &Viewport, buffer: &mut PixelBuffer) {
        // Edges go through the line rasterizer in world coordinates,
        // inheriting its early-exit and precision.
        let [a, b, c] = self.vertices;
        draw_segment(viewport, buffer, a, b, &self.edge);
        draw_segment(viewport, buffer, b, c, &self.edge);
        draw_segment(viewport, buffer, c, a, &self.edge);

        if let Some(fill) = self.fill {
            fill_triangle(viewport, buffer, self.vertices, fill);
        }
    }
}

/// Barycentric fill over the buffer-space bounding box of the
/// transformed vertices. Boundary cells are included, so they carry
/// both edge and fill materials; the edge's higher priority wins at
/// resolve time. A zero-area triangle fills nothing.
pub(crate) fn fill_triangle(
    viewport: &Viewport,
    buffer: &mut PixelBuffer,
    vertices: [Vec2; 3],
    fill: Material,
) {
    // Saturated projections stay representable through the area and
    // barycentric products.
    let cap = |(px, py): (i64, i64)| {
        (
            px.clamp(-COORD_LIMIT, COORD_LIMIT),
            py.clamp(-COORD_LIMIT, COORD_LIMIT),
        )
    };
    let (x1, y1) = cap(buffer.world_to_buffer(viewport, vertices[0]));
    let (x2, y2) = cap(buffer.world_to_buffer(viewport, vertices[1]));
    let (x3, y3) = cap(buffer.world_to_buffer(viewport, vertices[2]));

    // Signed doubled area. Zero means the vertices are collinear in
    // buffer space; the outline alone represents the triangle then.
    let det = (y2 - y3) * (x1 - x3) + (x3 - x2) * (y1 - y3);
    if det == 0 {
        log::debug!("triangle ({x1},{y1}) ({x2},{y2}) ({x3},{y3}) is degenerate, skipping fill");
        return;
    }
    let det = det as f64;

    // Bounding box, clipped to the grid: cells outside would be
    // dropped by paint anyway.
    let min_x = x1.min(x2).min(x3).max(0);
    let max_x = x1.max(x2).max(x3).min(buffer.width() as i64 - 1);
    let min_y = y1.min(y2).min(y3).max(0);
    let max_y = y1.max(y2).max(y3).min(buffer.height() as i64 - 1);

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let alpha = ((y2 - y3) * (px - x3) + (x3 - x2) * (py - y3)) as f64 / det;
            let beta = ((y3 - y1) * (px - x3) + (x1 - x3) * (py - y3)) as f64 / det;
            let gamma = 1.0 - alpha - beta;
            if alpha >= 0.0 && beta >= 0.0 && gamma >= 0.0 {
                buffer.paint(px, py, fill);
            }
        }
    }
}
