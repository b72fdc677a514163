//! # Folio
//!
//! Lays out a directory of artist project folders into a single print-ready
//! PDF portfolio. Each folder holds a `project.json` and its images; the
//! folder's layout instructions (or a default) decide how text and images
//! are arranged on each page.
//!
//! # Architecture: Scan, Plan, Render
//!
//! ```text
//! 1. Scan      portfolio/  →  Portfolio        (config + projects, sorted)
//! 2. Plan      Project     →  [PagePlan]       (catalog + pure page geometry)
//! 3. Render    PagePlan    →  portfolio.pdf    (rasters prepared, drawn, saved)
//! ```
//!
//! Planning is separated from rendering so every layout rule can be tested
//! as plain geometry, without decoding an image or writing a PDF. The only
//! inputs the planner needs from disk are the images' pixel dimensions, which
//! the catalog probes up front.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Finds the config and the project folders, loads each `project.json` |
//! | [`config`] | `config.json` loading, defaults and normalization |
//! | [`types`] | Project descriptor, image references and layout instructions |
//! | [`naming`] | `NNN-name` folder convention parser used for ordering |
//! | [`catalog`] | Resolves image references to probed, placeable records |
//! | [`layout`] | Page flow planning: info, gallery, full and cover pages |
//! | [`geometry`] | Rectangles, colors, page sizes |
//! | [`imaging`] | Image probing, aspect fitting, resolution planning and resizing |
//! | [`render`] | `DocumentWriter` trait and the `printpdf` implementation |
//! | [`generate`] | Drives a run: cover, projects, page emission, final write |
//! | [`output`] | CLI output formatting |
//! | [`logger`] | Console logger for the `log` facade |
//!
//! # Design Decisions
//!
//! ## Base-14 Fonts Only
//!
//! Text uses the fonts every PDF reader ships with (Helvetica, Times,
//! Courier and their variants), referenced by name. Nothing is embedded, so
//! text widths are estimated from per-family average glyph widths. The same
//! estimate drives wrapping and vertical centering, so measured and drawn
//! heights always agree.
//!
//! ## Soft Failures
//!
//! A missing image, a corrupt file or a failed resize never aborts a build.
//! The element is left out and a warning is logged; the page it belonged to
//! is still emitted. Only an output file that cannot be written is fatal.
//!
//! ## Print Resolution
//!
//! Images are embedded at their original resolution unless that is far more
//! than the placement needs at the configured DPI (or the DPI is below print
//! quality), in which case they are downsampled and re-encoded as JPEG. See
//! [`imaging::plan_raster`]. The PDF writer keeps whatever pixel size that
//! decision produced; it never resamples on save.

pub mod catalog;
pub mod config;
pub mod generate;
pub mod geometry;
pub mod imaging;
pub mod layout;
pub mod logger;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
