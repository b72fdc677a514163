//! End-to-end build: real project folders, real images, a real PDF.
//!
//! Exercises the whole pipeline through the public API with the production
//! image backend and PDF writer.

use folio::imaging::RustBackend;
use folio::{generate, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_image(path: &Path, width: u32, height: u32, format: image::ImageFormat) {
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 90])
    })
    .save_with_format(path, format)
    .unwrap();
}

fn write_json(path: &Path, value: serde_json::Value) {
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

fn setup() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_json(
        &root.join("config.json"),
        serde_json::json!({
            "title": "Selected Works",
            "author": "R. Vega",
            "email": "studio@example.org",
            "pageSize": "A4",
            "orientation": "landscape",
            "dpi": 150,
            "imageBorder": {"enabled": false, "width": 2, "color": "#333"}
        }),
    );

    let walks = root.join("010-Night-Walks");
    fs::create_dir_all(&walks).unwrap();
    write_image(&walks.join("001.jpg"), 300, 200, image::ImageFormat::Jpeg);
    write_image(&walks.join("002.jpg"), 200, 300, image::ImageFormat::Jpeg);
    write_image(&walks.join("003.png"), 240, 240, image::ImageFormat::Png);
    write_json(
        &walks.join("project.json"),
        serde_json::json!({
            "title": "Night Walks",
            "medium": "Photography",
            "year": 2022,
            "curator": "M. Ortiz",
            "images": ["001.jpg", {"file": "002.jpg", "border": true}, "003.png", "missing.jpg"]
        }),
    );

    let tidal = root.join("020-Tidal");
    fs::create_dir_all(&tidal).unwrap();
    write_image(&tidal.join("hero.jpg"), 400, 225, image::ImageFormat::Jpeg);
    write_json(
        &tidal.join("project.json"),
        serde_json::json!({
            "title": "Tidal",
            "medium": "Video installation",
            "year": "2021",
            "duration": "12 min",
            "description": "Twelve channels of water recorded along the coast.",
            "images": ["hero.jpg"],
            "layout": {"pages": [
                {"type": "info", "content": ["title", "medium", "year", "description", "hero.jpg"]},
                {"type": "full", "content": ["hero.jpg"]},
                {"type": "gallery", "content": ["hero.jpg", "hero.jpg", "hero.jpg"]},
                {"type": "full", "content": ["absent.jpg"]}
            ]}
        }),
    );

    fs::create_dir_all(root.join("030-Drafts")).unwrap();
    tmp
}

#[test]
fn builds_pdf_from_project_folders() {
    let tmp = setup();
    let portfolio = scan::scan(tmp.path(), "config.json").unwrap();
    assert_eq!(portfolio.projects.len(), 2);
    assert_eq!(portfolio.skipped.len(), 1);

    let output = tmp.path().join("portfolio.pdf");
    let summary = generate::generate(&portfolio, &output, &RustBackend::new()).unwrap();

    // cover + (info + 2 galleries) + 4 explicit pages
    assert_eq!(summary.pages, 8);
    assert_eq!(summary.projects[0].pages, 3);
    assert_eq!(summary.projects[0].images_placed, 3);
    assert_eq!(summary.projects[0].images_skipped, 1);
    assert_eq!(summary.projects[1].pages, 4);
    assert_eq!(summary.projects[1].images_placed, 5);

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn empty_input_produces_cover_only() {
    let tmp = TempDir::new().unwrap();
    let portfolio = scan::scan(tmp.path(), "config.json").unwrap();
    let output = tmp.path().join("portfolio.pdf");
    let summary = generate::generate(&portfolio, &output, &RustBackend::new()).unwrap();

    assert_eq!(summary.pages, 1);
    assert!(summary.projects.is_empty());
    assert!(fs::read(&output).unwrap().starts_with(b"%PDF"));
}

#[test]
fn unwritable_output_is_an_error() {
    let tmp = setup();
    let portfolio = scan::scan(tmp.path(), "config.json").unwrap();
    let output = tmp.path().join("no-such-dir").join("portfolio.pdf");
    let result = generate::generate(&portfolio, &output, &RustBackend::new());
    assert!(matches!(
        result,
        Err(generate::GenerateError::OpenOutput { .. })
    ));
}
