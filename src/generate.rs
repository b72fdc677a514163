//! Document assembly.
//!
//! Drives a whole run: the cover page, then every project in portfolio order,
//! each starting on a fresh page. For each project the image catalog is
//! resolved, the page plans are computed, and every draw operation is issued
//! to a [`DocumentWriter`]. The serialized document is written to the output
//! file once, at the end.
//!
//! ## Failure Handling
//!
//! | Failure | Effect |
//! |---|---|
//! | Output file cannot be created | [`GenerateError::OpenOutput`], before any work |
//! | Image missing or unprobeable | Dropped from the catalog (see [`catalog`]) |
//! | Resize fails | Original file embedded (see [`prepare_raster`]) |
//! | Raster unreadable or undecodable | Image and its border left off the page |
//! | Writing the document fails | [`GenerateError::Render`] |
//!
//! A page whose images all fail still exists: layout decisions are made from
//! the catalog before any raster is touched.

use crate::catalog::{self, ImageRecord};
use crate::config::PortfolioConfig;
use crate::geometry::PageGeometry;
use crate::imaging::{ImageBackend, prepare_raster};
use crate::layout::cover::cover_page;
use crate::layout::{DrawOp, ImageDraw, PagePlan, Theme, plan_project};
use crate::render::{DocumentWriter, PdfWriter, RenderError};
use crate::scan::Portfolio;
use crate::types::Project;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Cannot create output file {path}: {source}")]
    OpenOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub pages: usize,
    pub projects: Vec<ProjectSummary>,
}

impl GenerateSummary {
    pub fn images_placed(&self) -> usize {
        self.projects.iter().map(|p| p.images_placed).sum()
    }

    pub fn images_skipped(&self) -> usize {
        self.projects.iter().map(|p| p.images_skipped).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub title: String,
    pub pages: usize,
    pub images_placed: usize,
    /// Catalog drops plus rasters that failed at embed time.
    pub images_skipped: usize,
}

/// Owns the output file and the document writer for the duration of a run.
pub struct Assembler<'a, W: DocumentWriter, B: ImageBackend> {
    output: PathBuf,
    sink: BufWriter<File>,
    writer: W,
    backend: &'a B,
    theme: Theme,
    border_enabled: bool,
    dpi: f32,
    projects: Vec<ProjectSummary>,
}

/// Counters for the page currently being emitted.
#[derive(Debug, Default, Clone, Copy)]
struct PageOutcome {
    placed: usize,
    failed: usize,
}

impl<'a, W: DocumentWriter, B: ImageBackend> Assembler<'a, W, B> {
    /// Open `output` and prepare to write a document styled by `config`.
    pub fn create(
        output: &Path,
        config: &PortfolioConfig,
        writer: W,
        backend: &'a B,
    ) -> Result<Self, GenerateError> {
        let file = File::create(output).map_err(|source| GenerateError::OpenOutput {
            path: output.to_path_buf(),
            source,
        })?;
        Ok(Self {
            output: output.to_path_buf(),
            sink: BufWriter::new(file),
            writer,
            backend,
            theme: Theme::from_config(config),
            border_enabled: config.image_border.enabled,
            dpi: config.dpi,
            projects: Vec::new(),
        })
    }

    pub fn add_cover(&mut self, config: &PortfolioConfig) {
        let plan = cover_page(config, &self.theme);
        self.emit_page(&plan);
    }

    /// Resolve, plan and emit every page of one project.
    pub fn add_project(&mut self, project: &Project, project_dir: &Path) -> &ProjectSummary {
        let records = catalog::resolve(project, project_dir, self.border_enabled, self.backend);
        let dropped = project.images.len().saturating_sub(records.len());
        self.add_planned(project, &records, dropped)
    }

    fn add_planned(
        &mut self,
        project: &Project,
        records: &[ImageRecord],
        dropped: usize,
    ) -> &ProjectSummary {
        let theme = self.theme;
        let mut summary = ProjectSummary {
            title: project.title.clone(),
            pages: 0,
            images_placed: 0,
            images_skipped: dropped,
        };
        for plan in plan_project(project, records, &theme) {
            let outcome = self.emit_page(&plan);
            summary.pages += 1;
            summary.images_placed += outcome.placed;
            summary.images_skipped += outcome.failed;
        }
        log::debug!(
            "{}: {} pages, {} images",
            project.dir_name,
            summary.pages,
            summary.images_placed
        );
        let index = self.projects.len();
        self.projects.push(summary);
        &self.projects[index]
    }

    /// Start a page and issue every draw operation in `plan`.
    fn emit_page(&mut self, plan: &PagePlan) -> PageOutcome {
        self.writer.begin_page();
        let mut outcome = PageOutcome::default();
        for op in &plan.ops {
            match op {
                DrawOp::Text(text) => self.writer.draw_text(text),
                DrawOp::Image(image) => match self.embed(image) {
                    Ok(()) => {
                        outcome.placed += 1;
                        if let Some(stroke) = image.stroke() {
                            self.writer.stroke_rect(&stroke);
                        }
                    }
                    Err(reason) => {
                        log::warn!("skipping image {}: {}", image.path.display(), reason);
                        outcome.failed += 1;
                    }
                },
            }
        }
        outcome
    }

    fn embed(&mut self, image: &ImageDraw) -> Result<(), String> {
        let raster = prepare_raster(
            self.backend,
            &image.path,
            image.intrinsic,
            &image.rect,
            self.dpi,
        )
        .map_err(|e| e.to_string())?;
        self.writer
            .draw_image(image, &raster)
            .map_err(|e| e.to_string())
    }

    /// Serialize the document into the output file.
    pub fn finish(mut self) -> Result<GenerateSummary, GenerateError> {
        let pages = self.writer.page_count();
        self.writer.finish(&mut self.sink)?;
        self.sink.flush()?;
        Ok(GenerateSummary {
            output: self.output,
            pages,
            projects: self.projects,
        })
    }
}

/// Build the portfolio PDF at `output`.
pub fn generate(
    portfolio: &Portfolio,
    output: &Path,
    backend: &impl ImageBackend,
) -> Result<GenerateSummary, GenerateError> {
    let config = &portfolio.config;
    let writer = PdfWriter::new(
        &config.title,
        &config.author,
        PageGeometry::from_config(config),
    );
    generate_with(portfolio, output, writer, backend)
}

/// [`generate`] with a caller-supplied document writer.
pub fn generate_with<W: DocumentWriter, B: ImageBackend>(
    portfolio: &Portfolio,
    output: &Path,
    writer: W,
    backend: &B,
) -> Result<GenerateSummary, GenerateError> {
    let mut assembler = Assembler::create(output, &portfolio.config, writer, backend)?;
    assembler.add_cover(&portfolio.config);
    for project in &portfolio.projects {
        assembler.add_project(project, &portfolio.project_dir(project));
    }
    assembler.finish()
}
