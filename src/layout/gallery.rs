//! Gallery pages: several images arranged in the content area.
//!
//! ```text
//! n = 1          n = 2          n = 5 (3 × 2)
//! ┌──────────┐   ┌──────────┐   ┌──┐ ┌──┐ ┌──┐
//! │          │   │    1     │   │1 │ │2 │ │3 │
//! │    1     │   └──────────┘   └──┘ └──┘ └──┘
//! │          │   ┌──────────┐   ┌──┐ ┌──┐
//! │          │   │    2     │   │4 │ │5 │
//! └──────────┘   └──────────┘   └──┘ └──┘
//! ```
//!
//! Two images always stack vertically, whatever their orientation. Three or
//! more use `ceil(sqrt n)` columns; the last row is left-aligned and its
//! trailing cells stay empty.

use super::Theme;
use super::draw::{PagePlan, place_image};
use crate::catalog::{self, ImageRecord};
use crate::geometry::Rect;
use crate::types::ContentToken;

pub const GRID_GAP: f32 = 20.0;

/// Slots for `count` images inside `area`, in row-major order.
pub fn grid(count: usize, area: Rect) -> Vec<Rect> {
    match count {
        0 => Vec::new(),
        1 => vec![area],
        2 => {
            let height = (area.height - GRID_GAP) / 2.0;
            vec![
                Rect::new(area.x, area.y, area.width, height),
                Rect::new(area.x, area.y + height + GRID_GAP, area.width, height),
            ]
        }
        n => {
            let cols = (n as f64).sqrt().ceil() as usize;
            let rows = n.div_ceil(cols);
            let cell_w = (area.width - (cols - 1) as f32 * GRID_GAP) / cols as f32;
            let cell_h = (area.height - (rows - 1) as f32 * GRID_GAP) / rows as f32;
            (0..n)
                .map(|i| {
                    let (row, col) = (i / cols, i % cols);
                    Rect::new(
                        area.x + col as f32 * (cell_w + GRID_GAP),
                        area.y + row as f32 * (cell_h + GRID_GAP),
                        cell_w,
                        cell_h,
                    )
                })
                .collect()
        }
    }
}

/// Place `images` on the grid for their count.
pub fn gallery_of(images: &[&ImageRecord], theme: &Theme) -> PagePlan {
    let mut plan = PagePlan::new();
    let slots = grid(images.len(), theme.geometry.content_area());
    for (record, slot) in images.iter().zip(slots) {
        plan.ops.push(place_image(record, slot, theme.border));
    }
    plan
}

/// Lay out a `gallery` instruction. Keywords, names without an image suffix
/// and names missing from the catalog are left out before the grid is sized.
pub fn gallery_page(
    content: &[ContentToken],
    dir_name: &str,
    records: &[ImageRecord],
    theme: &Theme,
) -> PagePlan {
    let images: Vec<&ImageRecord> = content
        .iter()
        .filter_map(ContentToken::image_name)
        .filter_map(|name| {
            let found = catalog::find(records, name);
            if found.is_none() {
                log::debug!("{dir_name}: gallery image {name} not available");
            }
            found
        })
        .collect();
    gallery_of(&images, theme)
}
