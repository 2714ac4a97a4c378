//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

/// Default world-space viewport bounds (a square from -20 to 20)
pub const DEFAULT_VIEW_MIN: f64 = -20.0;
pub const DEFAULT_VIEW_MAX: f64 = 20.0;

/// Default pixel buffer dimensions (cells, not characters)
pub const DEFAULT_BUFFER_WIDTH: usize = 40;
pub const DEFAULT_BUFFER_HEIGHT: usize = 40;

/// Priority of the background sentinel every cell starts with.
/// Any user material at priority 0 or above paints over it.
pub const BACKGROUND_PRIORITY: i32 = -1;

/// A drawable paint unit: one display glyph, a priority tier and a
/// relative mix weight.
///
/// Higher `priority` wins outright over lower. Among equal-priority
/// materials deposited into the same cell, `mix` acts as an
/// unnormalized weight in a seeded stochastic choice at resolve time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub glyph: char,
    pub priority: i32,
    pub mix: f64,
}

impl Material {
    /// Create a material with unit mix weight
    pub fn new(glyph: char, priority: i32) -> Self {
        Self {
            glyph,
            priority,
            mix: 1.0,
        }
    }

    /// Create a material with an explicit mix weight
    pub fn with_mix(glyph: char, priority: i32, mix: f64) -> Self {
        Self {
            glyph,
            priority,
            mix,
        }
    }

    /// One unit-mix material per character of `glyphs`, all at the same
    /// priority. Painting the whole set into each edge cell is what
    /// produces the speckled multi-glyph outlines of the demo scenes.
    pub fn glyph_set(glyphs: &str, priority: i32) -> Vec<Material> {
        glyphs.chars().map(|g| Material::new(g, priority)).collect()
    }

    /// The sentinel every buffer cell is initialized with
    pub fn background() -> Self {
        Material::new(' ', BACKGROUND_PRIORITY)
    }

    /// A material is well-formed when its mix weight is finite and
    /// non-negative. Priority may be any integer.
    pub fn is_well_formed(&self) -> bool {
        self.mix.is_finite() && self.mix >= 0.0
    }
}
