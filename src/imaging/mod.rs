//! Image probing, fitting and raster preparation.
//!
//! | Operation | Where |
//! |---|---|
//! | **Identify** | [`ImageBackend::identify`] (`image` crate header probe) |
//! | **Fit** | [`fit_rect`]: aspect-preserving, centered placement |
//! | **Resolution** | [`plan_raster`]: target pixels from dpi, resize decision |
//! | **Resize → JPEG** | [`ImageBackend::resize`] (Lanczos3 + JPEG encoder) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for placement and resolution math
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, ImageInfo};
pub use calculations::{RasterPlan, fit_inside, fit_rect, plan_raster, target_pixels};
pub use operations::{get_image_info, prepare_raster};
pub use params::{Quality, ResizeParams};
pub use rust_backend::RustBackend;
