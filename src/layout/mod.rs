//! Page flow planning: turns a project and its probed images into per-page
//! draw instructions.
//!
//! ## Page Types
//!
//! | Instruction | Module | Output |
//! |---|---|---|
//! | `info` | [`info`] | Single-column flow, or text + image columns on landscape pages |
//! | `gallery` | [`gallery`] | 1, 2 stacked, or a `ceil(sqrt n)` grid of images |
//! | `full` | [`planner`] | One image fitted to the content area |
//! | *(no layout)* | [`planner`] | Default info page, then two images per page |
//!
//! Everything here is pure geometry over [`PageGeometry`]: no file reads, no
//! writer calls. The [`generate`](crate::generate) module feeds the resulting
//! [`PagePlan`]s to a [`DocumentWriter`](crate::render::DocumentWriter).

pub mod cover;
pub mod draw;
pub mod gallery;
pub mod info;
pub mod planner;
pub mod text;

pub use draw::{Align, BorderStyle, DrawOp, ImageDraw, PagePlan, StrokeDraw, TextDraw};
pub use planner::plan_project;
pub use text::{Font, TextStyle};

use crate::config::PortfolioConfig;
use crate::geometry::{Color, PageGeometry};

pub const TITLE_SIZE: f32 = 24.0;
pub const HEADING_SIZE: f32 = 14.0;
pub const BODY_SIZE: f32 = 11.0;
pub const CAPTION_SIZE: f32 = 10.0;

/// Resolved page geometry, text styles and border policy for one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub geometry: PageGeometry,
    pub title: TextStyle,
    pub heading: TextStyle,
    pub body: TextStyle,
    pub caption: TextStyle,
    pub border: BorderStyle,
}

impl Theme {
    pub fn from_config(config: &PortfolioConfig) -> Self {
        let fonts = &config.fonts;
        let border_color = Color::parse_hex(&config.image_border.color).unwrap_or_else(|| {
            log::warn!(
                "invalid image border color {:?}, using black",
                config.image_border.color
            );
            Color::BLACK
        });
        Self {
            geometry: PageGeometry::from_config(config),
            title: style(Font::resolve(&fonts.title, Font::HelveticaBold), TITLE_SIZE),
            heading: style(Font::resolve(&fonts.heading, Font::HelveticaBold), HEADING_SIZE),
            body: style(Font::resolve(&fonts.body, Font::Helvetica), BODY_SIZE),
            caption: style(Font::resolve(&fonts.caption, Font::HelveticaOblique), CAPTION_SIZE),
            border: BorderStyle {
                width: config.image_border.width,
                color: border_color,
            },
        }
    }

    /// The fixed Helvetica styles used by the default info page, independent
    /// of the configured font roles.
    pub fn with_base_fonts(&self) -> Self {
        Self {
            title: style(Font::HelveticaBold, TITLE_SIZE),
            heading: style(Font::Helvetica, HEADING_SIZE),
            body: style(Font::Helvetica, BODY_SIZE),
            caption: style(Font::Helvetica, CAPTION_SIZE),
            ..*self
        }
    }
}

fn style(font: Font, size: f32) -> TextStyle {
    TextStyle::new(font, size, Color::BLACK)
}
