//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`operations`](super::operations), which decides what
//! raster a placement needs, and the [`backend`](super::backend), which does
//! the pixel work.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    /// Quality used for print-resolution output (dpi >= 300).
    pub const PRINT: Quality = Quality(95);
    /// Quality used for screen-resolution output.
    pub const SCREEN: Quality = Quality(85);

    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::PRINT
    }
}

/// Parameters for a fit-inside resize that returns encoded bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    /// Bounding box in pixels; the result fits inside it.
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
