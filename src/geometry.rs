//! Page geometry primitives shared by the layout engine, the image fitter and
//! the PDF writer.
//!
//! All coordinates are PDF points (1/72 inch) with the origin at the **top-left**
//! corner of the page and `y` growing downwards. Only the PDF writer flips to
//! the bottom-left origin that PDF content streams use.
//!
//! ## Page Sizes
//!
//! | Token | Portrait size (pt) |
//! |---|---|
//! | `A3` | 841.89 × 1190.55 |
//! | `A4` | 595.28 × 841.89 |
//! | `A5` | 419.53 × 595.28 |
//! | `LETTER` | 612 × 792 |
//! | `LEGAL` | 612 × 1008 |
//! | `TABLOID` | 792 × 1224 |
//!
//! Tokens are case-insensitive. Unknown tokens fall back to A4.

use crate::config::PortfolioConfig;

/// An axis-aligned rectangle in page points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True if `other` lies entirely inside `self`, allowing `eps` of slack.
    pub fn contains(&self, other: &Rect, eps: f32) -> bool {
        other.x >= self.x - eps
            && other.y >= self.y - eps
            && other.right() <= self.right() + eps
            && other.bottom() <= self.bottom() + eps
    }

    /// True if the interiors of the two rectangles overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional).
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };
        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Parse an orientation token. Anything other than `portrait` is landscape.
    pub fn parse(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("portrait") {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// Portrait `(width, height)` in points for a page size token.
pub fn page_size_points(token: &str) -> (f32, f32) {
    match token.trim().to_ascii_uppercase().as_str() {
        "A3" => (841.89, 1190.55),
        "A5" => (419.53, 595.28),
        "LETTER" => (612.0, 792.0),
        "LEGAL" => (612.0, 1008.0),
        "TABLOID" => (792.0, 1224.0),
        _ => (595.28, 841.89),
    }
}

/// Fixed page geometry for the whole document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn from_config(config: &PortfolioConfig) -> Self {
        let (short, long) = page_size_points(&config.page_size);
        let (width, height) = match Orientation::parse(&config.orientation) {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        };
        Self::new(width, height, config.margin)
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    /// The page minus its margins on all four sides.
    pub fn content_area(&self) -> Rect {
        Rect::new(
            self.margin,
            self.margin,
            self.content_width(),
            self.content_height(),
        )
    }
}
