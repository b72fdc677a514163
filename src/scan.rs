//! Input directory scanning.
//!
//! Discovers the portfolio configuration and the project folders under the
//! input root.
//!
//! ## Directory Structure
//!
//! ```text
//! portfolio/                       # Input root
//! ├── config.json                  # Portfolio settings (optional)
//! ├── 010-Night-Walks/             # Project (numbered = explicit order)
//! │   ├── project.json             # Project descriptor
//! │   ├── 001.jpg
//! │   └── 002.jpg
//! ├── 020-Tidal/
//! │   ├── project.json
//! │   └── hero.png
//! └── sketches/                    # Unnumbered = after numbered, by name
//!     └── project.json
//! ```
//!
//! ## Failure Handling
//!
//! Only a missing input root is an error. A project folder without a
//! readable, well-formed `project.json` is skipped with a warning and
//! recorded in [`Portfolio::skipped`]; a missing or malformed config falls
//! back to defaults (see [`config::load_config`]).

use crate::config::{self, PortfolioConfig};
use crate::naming;
use crate::types::Project;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub const PROJECT_FILE: &str = "project.json";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Input directory not found: {0}")]
    RootNotFound(PathBuf),
    #[error("No project.json in {0}")]
    MissingDescriptor(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid project.json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the generator needs from the input directory.
#[derive(Debug)]
pub struct Portfolio {
    pub root: PathBuf,
    pub config: PortfolioConfig,
    /// Loaded projects in portfolio order.
    pub projects: Vec<Project>,
    pub skipped: Vec<SkippedProject>,
}

/// A project folder that could not be loaded.
#[derive(Debug, Clone)]
pub struct SkippedProject {
    pub dir_name: String,
    pub reason: String,
}

impl Portfolio {
    /// Folder holding a project's descriptor and images.
    pub fn project_dir(&self, project: &Project) -> PathBuf {
        self.root.join(&project.dir_name)
    }
}

pub fn scan(root: &Path, config_file: &str) -> Result<Portfolio, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }

    let config = config::load_config(root, config_file);

    let mut projects = Vec::new();
    let mut skipped = Vec::new();
    for dir in project_dirs(root) {
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match load_project(&dir) {
            Ok(mut project) => {
                project.dir_name = dir_name;
                if project.title.trim().is_empty() {
                    project.title = naming::parse_entry_name(&project.dir_name).display_title;
                }
                log::debug!(
                    "loaded project {} ({} images)",
                    project.dir_name,
                    project.images.len()
                );
                projects.push(project);
            }
            Err(e) => {
                log::warn!("skipping project {}: {}", dir_name, e);
                skipped.push(SkippedProject {
                    dir_name,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(Portfolio {
        root: root.to_path_buf(),
        config,
        projects,
        skipped,
    })
}

/// Immediate, non-hidden subdirectories of `root` in portfolio order.
fn project_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("cannot read entry in {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
        .map(|entry| entry.into_path())
        .collect();

    dirs.sort_by_key(|d| {
        naming::sort_key(
            &d.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        )
    });
    dirs
}

/// Read and parse one folder's `project.json`.
pub fn load_project(dir: &Path) -> Result<Project, ScanError> {
    let path = dir.join(PROJECT_FILE);
    if !path.is_file() {
        return Err(ScanError::MissingDescriptor(dir.to_path_buf()));
    }
    let content = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}
