//! Scene: a primitive list, a viewport and buffer dimensions.
//!
//! A render pass always constructs a fresh pixel buffer. Painting is
//! additive and never clears, so reusing a buffer across frames would
//! accumulate stale materials; keeping only the dimensions here makes
//! the fresh-buffer default impossible to bypass. Callers that manage
//! their own `PixelBuffer` must call `clear` between frames.

use crate::core::{PixelBuffer, Viewport};
use crate::error::{RasterError, RasterResult};
use crate::primitives::Primitive;
use crate::types::{DEFAULT_BUFFER_HEIGHT, DEFAULT_BUFFER_WIDTH};

#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<Primitive>,
    viewport: Viewport,
    width: usize,
    height: usize,
}

impl Scene {
    /// An empty scene over the default [-20,20] window and 40x40 grid.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            viewport: Viewport::default(),
            width: DEFAULT_BUFFER_WIDTH,
            height: DEFAULT_BUFFER_HEIGHT,
        }
    }

    /// A scene with defaults and an initial primitive list.
    pub fn from_objects(objects: Vec<Primitive>) -> Self {
        Self {
            objects,
            ..Self::new()
        }
    }

    /// A fully configured scene. Zero buffer dimensions fail fast.
    pub fn with_config(
        objects: Vec<Primitive>,
        viewport: Viewport,
        width: usize,
        height: usize,
    ) -> RasterResult<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidBufferSize { width, height });
        }
        Ok(Self {
            objects,
            viewport,
            width,
            height,
        })
    }

    /// Append a primitive; later primitives deposit their materials
    /// after earlier ones in shared cells.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.objects.push(primitive.into());
    }

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Render with seed 0.
    pub fn render(&self) -> String {
        self.render_with_seed(0)
    }

    /// Rasterize every primitive in insertion order into a fresh
    /// buffer, then resolve it with the given seed.
    pub fn render_with_seed(&self, seed: u32) -> String {
        log::debug!(
            "rendering {} primitives into {}x{} buffer",
            self.objects.len(),
            self.width,
            self.height
        );
        let mut buffer = PixelBuffer::new(self.width, self.height)
            .expect("scene dimensions validated at construction");
        for obj in &self.objects {
            obj.rasterize(&self.viewport, &mut buffer);
        }
        buffer.resolve(seed)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
