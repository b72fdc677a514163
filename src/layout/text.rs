//! Text styles and the approximate text measurement used for flow layout.
//!
//! Fonts are the PDF base-14 set, referenced by name. There is no font
//! embedding, so widths come from a per-family average glyph width rather
//! than real metrics. Both the centering pre-pass and the render pass use
//! the same functions, so measured heights always agree with drawn heights.

use crate::geometry::Color;

/// Line height as a multiple of the font size.
pub const LINE_SPACING: f32 = 1.2;

/// PDF base-14 fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Symbol,
    ZapfDingbats,
}

impl Font {
    /// Look up a base-14 font by its PostScript name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let font = match name.trim().to_ascii_lowercase().as_str() {
            "helvetica" => Font::Helvetica,
            "helvetica-bold" => Font::HelveticaBold,
            "helvetica-oblique" => Font::HelveticaOblique,
            "helvetica-boldoblique" => Font::HelveticaBoldOblique,
            "times-roman" | "times" => Font::TimesRoman,
            "times-bold" => Font::TimesBold,
            "times-italic" => Font::TimesItalic,
            "times-bolditalic" => Font::TimesBoldItalic,
            "courier" => Font::Courier,
            "courier-bold" => Font::CourierBold,
            "courier-oblique" => Font::CourierOblique,
            "courier-boldoblique" => Font::CourierBoldOblique,
            "symbol" => Font::Symbol,
            "zapfdingbats" => Font::ZapfDingbats,
            _ => return None,
        };
        Some(font)
    }

    /// Resolve a configured font name, falling back with a warning.
    pub fn resolve(name: &str, fallback: Font) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!("unknown font {name:?}, using {fallback:?}");
            fallback
        })
    }

    /// Average advance width as a fraction of the font size.
    fn average_width(self) -> f32 {
        match self {
            Font::Courier
            | Font::CourierBold
            | Font::CourierOblique
            | Font::CourierBoldOblique => 0.6,
            Font::HelveticaBold | Font::HelveticaBoldOblique => 0.55,
            Font::TimesRoman | Font::TimesItalic => 0.45,
            Font::TimesBold | Font::TimesBoldItalic => 0.5,
            _ => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: Font, size: f32, color: Color) -> Self {
        Self { font, size, color }
    }

    pub fn line_height(&self) -> f32 {
        self.size * LINE_SPACING
    }

    /// Approximate rendered width of a single line.
    pub fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * self.font.average_width()
    }

    /// Greedy word wrap to `width`. Explicit newlines start new lines; a
    /// single word wider than `width` gets a line of its own.
    pub fn wrap(&self, text: &str, width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.lines() {
            let mut current = String::new();
            for word in paragraph.split_whitespace() {
                if current.is_empty() {
                    current.push_str(word);
                    continue;
                }
                let candidate = format!("{current} {word}");
                if self.measure(&candidate) <= width {
                    current = candidate;
                } else {
                    lines.push(std::mem::replace(&mut current, word.to_string()));
                }
            }
            lines.push(current);
        }
        lines
    }

    /// Height of `line_count` lines in this style.
    pub fn block_height(&self, line_count: usize) -> f32 {
        line_count as f32 * self.line_height()
    }
}
