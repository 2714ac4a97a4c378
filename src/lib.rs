//! runegrid: renders 2D scenes of geometric primitives into a
//! character grid.
//!
//! Primitives are authored in world coordinates, mapped through a
//! viewport onto a discrete pixel buffer, and per-cell conflicts are
//! resolved by a priority-then-weighted-random material blend. The
//! whole pipeline is synchronous and deterministic for a given seed.

pub mod core;
pub mod error;
pub mod math;
pub mod primitives;
pub mod scene;
pub mod types;

pub use crate::core::{PixelBuffer, Viewport};
pub use crate::error::{RasterError, RasterResult};
pub use crate::math::Vec2;
pub use crate::primitives::{Circle, Line, Polygon, Primitive, Triangle};
pub use crate::scene::Scene;
pub use crate::types::Material;
