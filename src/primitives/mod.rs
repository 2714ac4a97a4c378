//! The closed set of drawable primitives.
//!
//! Each primitive owns its world-space geometry plus its materials and
//! knows how to deposit glyphs into a pixel buffer through a viewport.
//! The set is fixed and small, so dispatch is a plain enum rather than
//! trait objects.

pub mod circle;
pub mod line;
pub mod polygon;
pub mod triangle;

pub use circle::Circle;
pub use line::Line;
pub use polygon::Polygon;
pub use triangle::Triangle;

use crate::core::{PixelBuffer, Viewport};
use crate::error::{RasterError, RasterResult};
use crate::types::Material;

/// Constructor-time material validation: every mix weight must be
/// finite and non-negative.
pub(crate) fn require_well_formed(materials: &[Material]) -> RasterResult<()> {
    for m in materials {
        if !m.is_well_formed() {
            return Err(RasterError::InvalidMaterial {
                glyph: m.glyph,
                mix: m.mix,
            });
        }
    }
    Ok(())
}

/// A render request held by a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle(Circle),
    Line(Line),
    Triangle(Triangle),
    Polygon(Polygon),
}

impl Primitive {
    /// Paint this primitive's materials into the buffer. Degenerate
    /// geometry is a local no-op; nothing here can fail.
    pub fn rasterize(&self, viewport: &Viewport, buffer: &mut PixelBuffer) {
        match self {
            Primitive::Circle(c) => c.rasterize(viewport, buffer),
            Primitive::Line(l) => l.rasterize(viewport, buffer),
            Primitive::Triangle(t) => t.rasterize(viewport, buffer),
            Primitive::Polygon(p) => p.rasterize(viewport, buffer),
        }
    }
}

impl From<Circle> for Primitive {
    fn from(c: Circle) -> Self {
        Primitive::Circle(c)
    }
}

impl From<Line> for Primitive {
    fn from(l: Line) -> Self {
        Primitive::Line(l)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

impl From<Polygon> for Primitive {
    fn from(p: Polygon) -> Self {
        Primitive::Polygon(p)
    }
}
