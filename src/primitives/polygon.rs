//! Polygon rasterization (wrapped outline + fan-triangulated fill).

use crate::core::{PixelBuffer, Viewport};
use crate::error::{RasterError, RasterResult};
use crate::math::Vec2;
use crate::primitives::line::draw_segment;
use crate::primitives::require_well_formed;
use crate::primitives::triangle::fill_triangle;
use crate::types::Material;

/// An implicitly-closed world-space polygon with an outline material
/// set and an optional fill material.
///
/// The fill fan-triangulates from the first vertex, which is exact for
/// convex polygons only. Concave polygons keep a correct outline but
/// may fill outside their boundary; this mirrors the fan approach and
/// is a documented limitation, not a bug.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
    edge: Vec<Material>,
    fill: Option<Material>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>, edge: Material, fill: Option<Material>) -> RasterResult<Self> {
        Self::with_edge_set(points, vec![edge], fill)
    }

    pub fn with_edge_set(
        points: Vec<Vec2>,
        edge: Vec<Material>,
        fill: Option<Material>,
    ) -> RasterResult<Self> {
        if points.len() < 3 {
            return Err(RasterError::DegeneratePolygon(points.len()));
        }
        require_well_formed(&edge)?;
        if let Some(f) = &fill {
            require_well_formed(std::slice::from_ref(f))?;
        }
        Ok(Self { points, edge, fill })
    }

    pub fn rasterize(&self, viewport: &Viewport, buffer: &mut PixelBuffer) {
        let projected: Vec<(i64, i64)> = self
            .points
            .iter()
            .map(|&p| buffer.world_to_buffer(viewport, p))
            .collect();

        let w = buffer.width() as i64;
        let h = buffer.height() as i64;
        if projected.iter().all(|&(x, _)| x < 0)
            || projected.iter().all(|&(x, _)| x >= w)
            || projected.iter().all(|&(_, y)| y < 0)
            || projected.iter().all(|&(_, y)| y >= h)
        {
            log::debug!(
                "polygon with {} vertices outside {w}x{h} buffer, skipping",
                self.points.len()
            );
            return;
        }

        let n = self.points.len();
        for i in 0..n {
            draw_segment(
                viewport,
                buffer,
                self.points[i],
                self.points[(i + 1) % n],
                &self.edge,
            );
        }

        // Fan triangles share the outline already drawn above, so they
        // are filled without their own edge materials.
        if let Some(fill) = self.fill {
            for i in 1..n - 1 {
                fill_triangle(
                    viewport,
                    buffer,
                    [self.points[0], self.points[i], self.points[i + 1]],
                    fill,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_with(buffer: &PixelBuffer, glyph: char) -> Vec<(i64, i64)> {
        let mut cells = Vec::new();
        for y in 0..buffer.height() as i64 {
            for x in 0..buffer.width() as i64 {
                if buffer.cell(x, y).unwrap().iter().any(|m| m.glyph == glyph) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn test_too_few_vertices_rejected() {
        let m = Material::new('x', 1);
        let two = vec![Vec2::ZERO, Vec2::new(1.0, 0.0)];
        assert_eq!(
            Polygon::new(two, m, None).unwrap_err(),
            RasterError::DegeneratePolygon(2)
        );
        assert!(Polygon::new(Vec::new(), m, None).is_err());
    }

    #[test]
    fn test_square_fill_is_solid() {
        let vp = Viewport::default();
        let mut pb = PixelBuffer::new(40, 40).unwrap();
        // World square spanning buffer cells 10..=30 on both axes.
        let square = Polygon::new(
            vec![
                Vec2::new(-10.0, -10.0),
                Vec2::new(10.0, -10.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(-10.0, 10.0),
            ],
            Material::new('x', 1),
            Some(Material::new('.', 0)),
        )
        .unwrap();
        square.rasterize(&vp, &mut pb);

        // Every interior cell received fill.
        for y in 11..30 {
            for x in 11..30 {
                assert!(
                    pb.cell(x, y).unwrap().iter().any(|m| m.glyph == '.'),
                    "missing fill at ({x},{y})"
                );
            }
        }
        // And nothing outside the square did.
        for &(x, y) in &cells_with(&pb, '.') {
            assert!((10..=30).contains(&x) && (10..=30).contains(&y));
        }
    }

    #[test]
    fn test_offscreen_polygon_skipped() {
        let vp = Viewport::default();
        let mut pb = PixelBuffer::new(40, 40).unwrap();
        let fresh = pb.clone();
        let far = Polygon::new(
            vec![
                Vec2::new(100.0, 0.0),
                Vec2::new(110.0, 0.0),
                Vec2::new(105.0, 10.0),
            ],
            Material::new('x', 1),
            Some(Material::new('.', 0)),
        )
        .unwrap();
        far.rasterize(&vp, &mut pb);
        assert_eq!(pb, fresh);
    }

    #[test]
    fn test_outline_without_fill() {
        let vp = Viewport::default();
        let mut pb = PixelBuffer::new(40, 40).unwrap();
        let tri = Polygon::new(
            vec![
                Vec2::new(-5.0, -5.0),
                Vec2::new(5.0, -5.0),
                Vec2::new(0.0, 5.0),
            ],
            Material::new('x', 1),
            None,
        )
        .unwrap();
        tri.rasterize(&vp, &mut pb);
        assert!(!cells_with(&pb, 'x').is_empty());
    }
}
