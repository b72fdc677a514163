//! High-level image operations.
//!
//! These functions combine calculations with backend execution.

use super::backend::{BackendError, Dimensions, ImageBackend, ImageInfo};
use super::calculations::{RasterPlan, plan_raster};
use super::params::ResizeParams;
use crate::geometry::Rect;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Probe an image, rejecting zero-sized results.
pub fn get_image_info(backend: &impl ImageBackend, path: &Path) -> Result<ImageInfo> {
    let info = backend.identify(path)?;
    let Dimensions { width, height } = info.dimensions;
    if width == 0 || height == 0 {
        return Err(BackendError::ProcessingFailed(format!(
            "{} reports empty dimensions {width}x{height}",
            path.display()
        )));
    }
    Ok(info)
}

/// Produce the encoded raster to embed for one placement.
///
/// Follows [`plan_raster`]; a failed resize falls back to the original file
/// bytes. Errors only when the original file itself cannot be read.
pub fn prepare_raster(
    backend: &impl ImageBackend,
    source: &Path,
    intrinsic: (u32, u32),
    placed: &Rect,
    dpi: f32,
) -> Result<Vec<u8>> {
    if let RasterPlan::Resize {
        width,
        height,
        quality,
    } = plan_raster(intrinsic, placed, dpi)
    {
        let params = ResizeParams {
            source: source.to_path_buf(),
            width,
            height,
            quality,
        };
        match backend.resize(&params) {
            Ok(bytes) => {
                log::debug!(
                    "resized {} to {width}x{height} (q{})",
                    source.display(),
                    quality.value()
                );
                return Ok(bytes);
            }
            Err(e) => log::warn!(
                "resize of {} failed ({e}), embedding original",
                source.display()
            ),
        }
    }
    Ok(std::fs::read(source)?)
}
