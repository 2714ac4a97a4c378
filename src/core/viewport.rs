//! Viewport: an axis-aligned world-space window mapped onto the
//! normalized square [-1,1] x [-1,1].

use crate::error::{RasterError, RasterResult};
use crate::math::Vec2;
use crate::types::{DEFAULT_VIEW_MAX, DEFAULT_VIEW_MIN};

/// An immutable world-space rectangle. Construction validates that the
/// rectangle has nonzero finite extent on both axes, so the affine map
/// is total afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> RasterResult<Self> {
        let width = x_max - x_min;
        let height = y_max - y_min;
        if width == 0.0 || height == 0.0 || !width.is_finite() || !height.is_finite() {
            return Err(RasterError::InvalidViewport {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// World-space width of the window
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// World-space height of the window
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Map a world point into normalized viewport coordinates.
    /// Points inside the window land in [-1, 1] on both axes; points
    /// outside map beyond it (they are clipped later, in buffer space).
    pub fn world_to_viewport(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            (p.x - self.x_min) / self.width() * 2.0 - 1.0,
            (p.y - self.y_min) / self.height() * 2.0 - 1.0,
        )
    }
}

impl Default for Viewport {
    /// The default [-20,20] x [-20,20] window. Infallible because the
    /// constants form a valid rectangle.
    fn default() -> Self {
        Self {
            x_min: DEFAULT_VIEW_MIN,
            x_max: DEFAULT_VIEW_MAX,
            y_min: DEFAULT_VIEW_MIN,
            y_max: DEFAULT_VIEW_MAX,
        }
    }
}
