//! Pure calculation functions for image placement and raster resolution.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::Quality;
use crate::geometry::Rect;

/// Resolution at and above which rasters count as print quality.
pub const PRINT_DPI: f32 = 300.0;

/// Largest aspect-preserving rectangle that fits in `bounds`, centered in it.
///
/// Tries the width-constrained size first; if that is taller than the box,
/// falls back to the height-constrained size.
///
/// # Examples
/// ```
/// # use folio::geometry::Rect;
/// # use folio::imaging::fit_rect;
/// // 2:1 image in a 100x100 box → 100x50, centered vertically
/// let placed = fit_rect((200, 100), Rect::new(0.0, 0.0, 100.0, 100.0));
/// assert_eq!(placed, Rect::new(0.0, 25.0, 100.0, 50.0));
/// ```
pub fn fit_rect(intrinsic: (u32, u32), bounds: Rect) -> Rect {
    let (iw, ih) = intrinsic;
    debug_assert!(iw > 0 && ih > 0, "catalog records have non-zero dimensions");
    let ratio = iw as f32 / ih.max(1) as f32;

    let mut width = bounds.width;
    let mut height = bounds.width / ratio;
    if height > bounds.height {
        height = bounds.height;
        width = bounds.height * ratio;
    }

    Rect::new(
        bounds.x + (bounds.width - width) / 2.0,
        bounds.y + (bounds.height - height) / 2.0,
        width,
        height,
    )
}

/// Pixel size a placement needs at `dpi` (points × dpi / 72, at least 1px).
pub fn target_pixels(placed: &Rect, dpi: f32) -> (u32, u32) {
    let scale = dpi / 72.0;
    (
        ((placed.width * scale).round() as u32).max(1),
        ((placed.height * scale).round() as u32).max(1),
    )
}

/// Fit `source` inside `bounds` preserving aspect ratio, never enlarging.
pub fn fit_inside(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (sw, sh) = source;
    let (bw, bh) = bounds;
    if sw <= bw && sh <= bh {
        return source;
    }
    let scale = (bw as f64 / sw as f64).min(bh as f64 / sh as f64);
    (
        ((sw as f64 * scale).round() as u32).max(1),
        ((sh as f64 * scale).round() as u32).max(1),
    )
}

/// What raster to embed for one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterPlan {
    /// Embed the source file as is.
    Original,
    /// Request a re-encoded raster fitting inside `width × height`.
    Resize {
        width: u32,
        height: u32,
        quality: Quality,
    },
}

/// Decide whether a placement needs a resized raster.
///
/// Resizes when the document is below print resolution, or when the source
/// is more than twice as wide as the placement needs.
pub fn plan_raster(intrinsic: (u32, u32), placed: &Rect, dpi: f32) -> RasterPlan {
    let (target_w, target_h) = target_pixels(placed, dpi);
    let oversized = intrinsic.0 > target_w.saturating_mul(2);
    if dpi >= PRINT_DPI && !oversized {
        return RasterPlan::Original;
    }
    let (width, height) = fit_inside(intrinsic, (target_w, target_h));
    let quality = if dpi >= PRINT_DPI {
        Quality::PRINT
    } else {
        Quality::SCREEN
    };
    RasterPlan::Resize {
        width,
        height,
        quality,
    }
}
