//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every project is shown by its position and title first, with folder names,
//! files and layout details as indented context lines. The same header shape
//! is used by `check` and `build`, so the two outputs line up.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Projects
//! 001 Night Walks (2 images)
//!     Source: 010-Night-Walks/
//!     Layout: default
//!     001 001.jpg (3000x2000 jpeg)
//!     002 002.jpg (2000x3000 jpeg, border)
//!     Missing: 003.jpg
//! 002 Tidal (1 image)
//!     Source: 020-Tidal/
//!     Layout: info, gallery, full
//!     001 hero.png (4000x3000 png)
//!
//! Skipped
//!     030-Drafts: No project.json in 030-Drafts
//!
//! Config
//!     Title: Portfolio
//!     Page: A4 landscape, 841.89 x 595.28 pt, margin 50
//!     DPI: 300
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Night Walks: 3 pages, 2 images
//! 002 Tidal: 3 pages, 1 image (1 skipped)
//! Generated 7 pages → portfolio.pdf
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::catalog::ImageRecord;
use crate::generate::GenerateSummary;
use crate::geometry::PageGeometry;
use crate::scan::Portfolio;
use crate::types::{PageSpec, Project};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// `001 Tidal (3 images)`
fn project_header(index: usize, title: &str, images: usize) -> String {
    format!(
        "{} {} ({})",
        format_index(index),
        title,
        plural(images, "image")
    )
}

fn layout_summary(project: &Project) -> String {
    let Some(layout) = &project.layout else {
        return "default".to_string();
    };
    if layout.pages.is_empty() {
        return "empty".to_string();
    }
    layout
        .pages
        .iter()
        .map(|spec| match spec {
            PageSpec::Info { .. } => "info",
            PageSpec::Gallery { .. } => "gallery",
            PageSpec::Full { .. } => "full",
            PageSpec::Unsupported => "unsupported",
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn record_line(index: usize, record: &ImageRecord) -> String {
    let border = if record.border { ", border" } else { "" };
    format!(
        "{} {} ({}x{} {}{})",
        format_index(index),
        record.filename,
        record.width,
        record.height,
        record.format,
        border
    )
}

// ============================================================================
// Check
// ============================================================================

/// Format the inventory shown by `check`.
///
/// `records[i]` is the resolved catalog of `portfolio.projects[i]`.
pub fn format_check_output(portfolio: &Portfolio, records: &[Vec<ImageRecord>]) -> Vec<String> {
    let mut lines = vec!["Projects".to_string()];

    for (i, (project, records)) in portfolio.projects.iter().zip(records).enumerate() {
        lines.push(project_header(i + 1, &project.title, records.len()));
        lines.push(format!("    Source: {}/", project.dir_name));
        lines.push(format!("    Layout: {}", layout_summary(project)));
        for (j, record) in records.iter().enumerate() {
            lines.push(format!("    {}", record_line(j + 1, record)));
        }
        for reference in &project.images {
            if !records.iter().any(|r| r.filename == reference.name()) {
                lines.push(format!("    Missing: {}", reference.name()));
            }
        }
    }

    if !portfolio.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skipped in &portfolio.skipped {
            lines.push(format!("    {}: {}", skipped.dir_name, skipped.reason));
        }
    }

    let config = &portfolio.config;
    let geometry = PageGeometry::from_config(config);
    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!("    Title: {}", config.title));
    lines.push(format!(
        "    Page: {} {}, {} x {} pt, margin {}",
        config.page_size, config.orientation, geometry.width, geometry.height, geometry.margin
    ));
    lines.push(format!("    DPI: {}", config.dpi));

    lines
}

pub fn print_check_output(portfolio: &Portfolio, records: &[Vec<ImageRecord>]) {
    for line in format_check_output(portfolio, records) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the per-project page counts and the final summary of `build`.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, project) in summary.projects.iter().enumerate() {
        let skipped = match project.images_skipped {
            0 => String::new(),
            n => format!(" ({n} skipped)"),
        };
        lines.push(format!(
            "{} {}: {}, {}{}",
            format_index(i + 1),
            project.title,
            plural(project.pages, "page"),
            plural(project.images_placed, "image"),
            skipped
        ));
    }
    lines.push(format!(
        "Generated {} \u{2192} {}",
        plural(summary.pages, "page"),
        summary.output.display()
    ));
    lines
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioConfig;
    use crate::generate::ProjectSummary;
    use crate::scan::SkippedProject;
    use crate::test_helpers::record;
    use crate::types::{ImageRef, Layout};
    use std::path::PathBuf;

    fn portfolio(projects: Vec<Project>) -> Portfolio {
        Portfolio {
            root: PathBuf::from("/work"),
            config: PortfolioConfig::default(),
            projects,
            skipped: Vec::new(),
        }
    }

    fn project(dir_name: &str, title: &str, images: &[&str]) -> Project {
        Project {
            dir_name: dir_name.into(),
            title: title.into(),
            images: images.iter().map(|&n| ImageRef::Name(n.into())).collect(),
            ..Project::default()
        }
    }

    #[test]
    fn check_lists_projects_with_images() {
        let portfolio = portfolio(vec![project("010-Night-Walks", "Night Walks", &["a.jpg"])]);
        let records = vec![vec![record("a.jpg", 3000, 2000, false)]];
        let lines = format_check_output(&portfolio, &records);

        assert_eq!(lines[0], "Projects");
        assert_eq!(lines[1], "001 Night Walks (1 image)");
        assert_eq!(lines[2], "    Source: 010-Night-Walks/");
        assert_eq!(lines[3], "    Layout: default");
        assert_eq!(lines[4], "    001 a.jpg (3000x2000 jpeg)");
    }

    #[test]
    fn check_flags_missing_images_and_borders() {
        let portfolio = portfolio(vec![project("010-A", "A", &["a.jpg", "gone.jpg"])]);
        let records = vec![vec![record("a.jpg", 10, 20, true)]];
        let lines = format_check_output(&portfolio, &records);

        assert!(lines.contains(&"    001 a.jpg (10x20 jpeg, border)".to_string()));
        assert!(lines.contains(&"    Missing: gone.jpg".to_string()));
    }

    #[test]
    fn check_shows_layout_page_types() {
        let mut p = project("010-A", "A", &[]);
        p.layout = Some(Layout {
            pages: vec![
                PageSpec::Info { content: vec![] },
                PageSpec::Full { content: vec![] },
            ],
        });
        let lines = format_check_output(&portfolio(vec![p]), &[vec![]]);
        assert!(lines.contains(&"    Layout: info, full".to_string()));
    }

    #[test]
    fn check_reports_skipped_folders_and_config() {
        let mut portfolio = portfolio(vec![]);
        portfolio.skipped.push(SkippedProject {
            dir_name: "030-Drafts".into(),
            reason: "No project.json in 030-Drafts".into(),
        });
        let lines = format_check_output(&portfolio, &[]);

        let skipped = lines.iter().position(|l| l == "Skipped").unwrap();
        assert_eq!(lines[skipped + 1], "    030-Drafts: No project.json in 030-Drafts");
        assert!(lines.contains(&"    Title: Portfolio".to_string()));
        assert!(lines.contains(&"    DPI: 300".to_string()));
    }

    #[test]
    fn generate_output_summarizes_projects() {
        let summary = GenerateSummary {
            output: PathBuf::from("portfolio.pdf"),
            pages: 5,
            projects: vec![
                ProjectSummary {
                    title: "Night Walks".into(),
                    pages: 3,
                    images_placed: 4,
                    images_skipped: 0,
                },
                ProjectSummary {
                    title: "Tidal".into(),
                    pages: 1,
                    images_placed: 1,
                    images_skipped: 2,
                },
            ],
        };
        let lines = format_generate_output(&summary);
        assert_eq!(
            lines,
            vec![
                "001 Night Walks: 3 pages, 4 images",
                "002 Tidal: 1 page, 1 image (2 skipped)",
                "Generated 5 pages \u{2192} portfolio.pdf",
            ]
        );
    }

    #[test]
    fn pluralization() {
        assert_eq!(plural(0, "page"), "0 pages");
        assert_eq!(plural(1, "page"), "1 page");
        assert_eq!(plural(2, "image"), "2 images");
    }
}
