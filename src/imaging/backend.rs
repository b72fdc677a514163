//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the portfolio needs
//! from an image service: probing a file's pixel dimensions and format, and
//! producing a resized, re-encoded raster for embedding.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel dimensions of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Result of an identify operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub dimensions: Dimensions,
    /// Lowercase format name, e.g. `jpeg` or `png`.
    pub format: String,
}

pub trait ImageBackend {
    /// Probe dimensions and format without decoding pixel data.
    fn identify(&self, path: &Path) -> Result<ImageInfo, BackendError>;

    /// Resize to fit inside the requested box and return encoded bytes.
    fn resize(&self, params: &ResizeParams) -> Result<Vec<u8>, BackendError>;
}
