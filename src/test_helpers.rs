//! Shared test utilities for the folio test suite.
//!
//! Provides on-disk fixture builders (project folders, synthetic JPEG/PNG
//! files) and in-memory builders for catalog records.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_project(tmp.path(), "010-Tidal", &json!({"title": "Tidal"}));
//! let portfolio = scan(tmp.path(), "config.json").unwrap();
//! assert_eq!(project_titles(&portfolio), vec!["Tidal"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::ImageRecord;
use crate::scan::{PROJECT_FILE, Portfolio};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create `root/dir_name/project.json` holding `descriptor`.
pub fn write_project(root: &Path, dir_name: &str, descriptor: &serde_json::Value) -> PathBuf {
    let dir = root.join(dir_name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(PROJECT_FILE),
        serde_json::to_string_pretty(descriptor).unwrap(),
    )
    .unwrap();
    dir
}

/// Create empty files standing in for images a mock backend will answer for.
pub fn touch_images(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

/// Write a real, decodable JPEG of the given size.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    gradient(width, height)
        .save_with_format(path, image::ImageFormat::Jpeg)
        .unwrap();
}

/// Write a real, decodable PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    gradient(width, height)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

fn gradient(width: u32, height: u32) -> image::RgbImage {
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

// =========================================================================
// Builders
// =========================================================================

/// A catalog record for a file that need not exist.
pub fn record(filename: &str, width: u32, height: u32, border: bool) -> ImageRecord {
    ImageRecord {
        filename: filename.to_string(),
        path: PathBuf::from("/work").join(filename),
        width,
        height,
        format: "jpeg".to_string(),
        border,
    }
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All project titles in portfolio order.
pub fn project_titles(portfolio: &Portfolio) -> Vec<&str> {
    portfolio.projects.iter().map(|p| p.title.as_str()).collect()
}
