//! Image catalog: turns a project's declared image references into probed
//! records the layout engine can place.
//!
//! Resolution rules:
//!
//! - A bare string `"a.jpg"` means `{name: "a.jpg", border: false}`.
//! - `{"name" | "file": "a.jpg", "border": true}` forces a border on that image.
//! - The resolved border flag is `override || global policy`: an image can
//!   opt *in* to a border, but cannot opt out of a globally enabled one.
//! - A reference whose file is missing or cannot be probed is dropped with a
//!   warning. Layout slots that name it are skipped later.
//! - Order is preserved and duplicate names stay separate records.

use crate::imaging::{ImageBackend, get_image_info};
use crate::types::Project;
use std::path::{Path, PathBuf};

/// A probed, placeable image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub filename: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: String,
    /// Draw a border around this image's placement.
    pub border: bool,
}

impl ImageRecord {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Resolve every image reference of `project` against files in `project_dir`.
pub fn resolve(
    project: &Project,
    project_dir: &Path,
    border_enabled: bool,
    backend: &impl ImageBackend,
) -> Vec<ImageRecord> {
    project
        .images
        .iter()
        .filter_map(|reference| {
            let filename = reference.name().to_string();
            let path = project_dir.join(&filename);
            if !path.is_file() {
                log::warn!(
                    "{}: image {} not found, skipping",
                    project.dir_name,
                    path.display()
                );
                return None;
            }
            match get_image_info(backend, &path) {
                Ok(info) => Some(ImageRecord {
                    filename,
                    path,
                    width: info.dimensions.width,
                    height: info.dimensions.height,
                    format: info.format,
                    border: reference.border_override() || border_enabled,
                }),
                Err(e) => {
                    log::warn!(
                        "{}: cannot read image {} ({}), skipping",
                        project.dir_name,
                        path.display(),
                        e
                    );
                    None
                }
            }
        })
        .collect()
}

/// First record named `filename`.
pub fn find<'a>(records: &'a [ImageRecord], filename: &str) -> Option<&'a ImageRecord> {
    records.iter().find(|r| r.filename == filename)
}
