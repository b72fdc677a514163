//! Per-project page sequencing.
//!
//! A project with an explicit layout produces one page per instruction, even
//! when the instruction resolves to nothing. A project without one gets the
//! default info page followed by its images two to a page. Pages are planned
//! lazily, so the assembler can render each one before the next is computed.

use super::Theme;
use super::draw::{PagePlan, place_image};
use super::gallery::{gallery_of, gallery_page};
use super::info::{default_info_page, info_page};
use crate::catalog::{self, ImageRecord};
use crate::types::{ContentToken, PageSpec, Project};

/// Images per page when a project has no layout.
pub const DEFAULT_IMAGES_PER_PAGE: usize = 2;

/// Plan every page of `project`, in order.
pub fn plan_project<'a>(
    project: &'a Project,
    records: &'a [ImageRecord],
    theme: &'a Theme,
) -> Box<dyn Iterator<Item = PagePlan> + 'a> {
    match project.layout.as_ref() {
        Some(layout) => Box::new(
            layout
                .pages
                .iter()
                .filter_map(move |spec| plan_page(spec, project, records, theme)),
        ),
        None => {
            let info = std::iter::once_with(move || default_info_page(project, records, theme));
            let galleries = records.chunks(DEFAULT_IMAGES_PER_PAGE).map(move |chunk| {
                let images: Vec<&ImageRecord> = chunk.iter().collect();
                gallery_of(&images, theme)
            });
            Box::new(info.chain(galleries))
        }
    }
}

/// Plan a single layout instruction. Unsupported page types produce no page.
pub fn plan_page(
    spec: &PageSpec,
    project: &Project,
    records: &[ImageRecord],
    theme: &Theme,
) -> Option<PagePlan> {
    match spec {
        PageSpec::Info { content } => Some(info_page(content, project, records, theme)),
        PageSpec::Gallery { content } => {
            Some(gallery_page(content, &project.dir_name, records, theme))
        }
        PageSpec::Full { content } => Some(full_page(content, project, records, theme)),
        PageSpec::Unsupported => {
            log::warn!("{}: skipping unsupported page type", project.dir_name);
            None
        }
    }
}

/// One image fitted to the content area. An empty page if the first token
/// does not name an available image.
pub fn full_page(
    content: &[ContentToken],
    project: &Project,
    records: &[ImageRecord],
    theme: &Theme,
) -> PagePlan {
    let mut plan = PagePlan::new();
    let Some(ContentToken::Image(name)) = content.first() else {
        log::debug!("{}: full page without an image", project.dir_name);
        return plan;
    };
    match catalog::find(records, name) {
        Some(record) => plan.ops.push(place_image(
            record,
            theme.geometry.content_area(),
            theme.border,
        )),
        None => log::warn!(
            "{}: full page image {} not available, page left empty",
            project.dir_name,
            name
        ),
    }
    plan
}
