//! Error taxonomy for configuration failures.
//!
//! Only construction-time problems are errors. Out-of-bounds paints
//! clip silently and degenerate geometry mid-render is a local no-op,
//! so rasterization itself is infallible.

use thiserror::Error;

/// Configuration errors surfaced at construction time.
#[derive(Debug, Error, PartialEq)]
pub enum RasterError {
    #[error("viewport has zero extent: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidViewport {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    #[error("pixel buffer dimensions must be nonzero, got {width}x{height}")]
    InvalidBufferSize { width: usize, height: usize },
    #[error("material '{glyph}' has invalid mix weight {mix} (must be finite and >= 0)")]
    InvalidMaterial { glyph: char, mix: f64 },
    #[error("polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),
}

/// Result type for construction operations.
pub type RasterResult<T> = Result<T, RasterError>;
