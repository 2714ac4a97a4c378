//! Core rendering machinery: pixel buffer, viewport transform and the
//! deterministic RNG behind resolve.

pub mod buffer;
pub mod rng;
pub mod viewport;

pub use buffer::PixelBuffer;
pub use rng::SimpleRng;
pub use viewport::Viewport;
