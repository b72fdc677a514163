//! Draw instructions: the output of the layout engine.
//!
//! A [`PagePlan`] is everything that goes on one physical page, in paint
//! order. Plans are pure data so they can be inspected in tests and handed
//! to any [`DocumentWriter`](crate::render::DocumentWriter).

use super::text::TextStyle;
use crate::catalog::ImageRecord;
use crate::geometry::{Color, Rect};
use crate::imaging::fit_rect;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Pre-wrapped text, laid out top-down from `(x, y)` inside `width`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub lines: Vec<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub style: TextStyle,
    pub align: Align,
}

impl TextDraw {
    /// Wrap `text` to `width` and position it at `(x, y)`.
    pub fn wrapped(text: &str, x: f32, y: f32, width: f32, style: TextStyle, align: Align) -> Self {
        Self {
            lines: style.wrap(text, width),
            x,
            y,
            width,
            style,
            align,
        }
    }

    pub fn height(&self) -> f32 {
        self.style.block_height(self.lines.len())
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageDraw {
    pub filename: String,
    pub path: PathBuf,
    /// Source pixel dimensions.
    pub intrinsic: (u32, u32),
    /// Aspect-preserving placement in page points.
    pub rect: Rect,
    /// Stroke drawn around `rect` once the image itself is on the page.
    pub border: Option<BorderStyle>,
}

impl ImageDraw {
    pub fn stroke(&self) -> Option<StrokeDraw> {
        self.border.map(|border| StrokeDraw {
            rect: self.rect,
            width: border.width,
            color: border.color,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDraw {
    pub rect: Rect,
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextDraw),
    Image(ImageDraw),
}

/// Border stroke applied to images whose record asks for one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub width: f32,
    pub color: Color,
}

/// Draw operations for one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePlan {
    pub ops: Vec<DrawOp>,
}

impl PagePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn extend(&mut self, ops: impl IntoIterator<Item = DrawOp>) {
        self.ops.extend(ops);
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextDraw> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageDraw> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Image(i) => Some(i),
            _ => None,
        })
    }

    /// Border strokes of the placed images, in paint order.
    pub fn strokes(&self) -> impl Iterator<Item = StrokeDraw> + '_ {
        self.images().filter_map(ImageDraw::stroke)
    }
}

/// Fit `record` into `bounds`, carrying its border when the record asks for one.
pub fn place_image(record: &ImageRecord, bounds: Rect, border: BorderStyle) -> DrawOp {
    DrawOp::Image(ImageDraw {
        filename: record.filename.clone(),
        path: record.path.clone(),
        intrinsic: record.dimensions(),
        rect: fit_rect(record.dimensions(), bounds),
        border: record.border.then_some(border),
    })
}
