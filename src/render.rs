//! Document writing: turns draw operations into a serialized PDF.
//!
//! The [`DocumentWriter`] trait is the seam between the layout engine and the
//! output format. [`PdfWriter`] implements it with `printpdf`, using the
//! base-14 fonts only (nothing is embedded).
//!
//! Layout coordinates have their origin at the top-left; PDF content streams
//! measure `y` up from the bottom-left. The flip happens here and nowhere else.
//!
//! Rasters arrive as encoded bytes (the original file, or a JPEG produced by
//! the image backend). They are decoded with the `image` crate and placed at
//! 72 dpi, scaled to the planned rectangle. On save the pixels are stored
//! flate-compressed at the size they arrived in.

use crate::geometry::{Color, PageGeometry, Rect};
use crate::layout::{Align, Font, ImageDraw, StrokeDraw, TextDraw};
use printpdf::{
    BuiltinFont, ImageCompression, ImageOptimizationOptions, Line, LinePoint, Mm, Op,
    PdfDocument, PdfPage, PdfSaveOptions, Point, Pt, RawImage, RawImageData, RawImageFormat, Rgb,
    TextItem, XObjectTransform,
};
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot embed image: {0}")]
    Image(String),
}

/// A paginated document that accepts absolutely positioned draw calls.
pub trait DocumentWriter {
    /// Start a new page. Draw calls go to the most recently begun page.
    fn begin_page(&mut self);

    fn draw_text(&mut self, text: &TextDraw);

    /// Place an encoded raster at `image.rect`.
    fn draw_image(&mut self, image: &ImageDraw, raster: &[u8]) -> Result<(), RenderError>;

    fn stroke_rect(&mut self, stroke: &StrokeDraw);

    /// Number of pages begun so far.
    fn page_count(&self) -> usize;

    /// Serialize the document into `sink`.
    fn finish(&mut self, sink: &mut dyn Write) -> Result<(), RenderError>;
}

/// [`DocumentWriter`] backed by `printpdf`.
pub struct PdfWriter {
    doc: PdfDocument,
    geometry: PageGeometry,
    pages: Vec<PdfPage>,
    current: Option<Vec<Op>>,
}

impl PdfWriter {
    pub fn new(title: &str, author: &str, geometry: PageGeometry) -> Self {
        let mut doc = PdfDocument::new(title);
        doc.metadata.info.author = author.to_string();
        Self {
            doc,
            geometry,
            pages: Vec::new(),
            current: None,
        }
    }

    fn flush_page(&mut self) {
        if let Some(ops) = self.current.take() {
            self.pages.push(PdfPage::new(
                points_to_mm(self.geometry.width),
                points_to_mm(self.geometry.height),
                ops,
            ));
        }
    }

    /// Ops of the current page, starting one if nothing has been begun.
    fn ops(&mut self) -> &mut Vec<Op> {
        self.current.get_or_insert_with(Vec::new)
    }

    /// PDF-space `y` for a layout-space `y`.
    fn flip(&self, y: f32) -> f32 {
        self.geometry.height - y
    }
}

impl DocumentWriter for PdfWriter {
    fn begin_page(&mut self) {
        self.flush_page();
        self.current = Some(Vec::new());
    }

    fn draw_text(&mut self, text: &TextDraw) {
        let size = text.style.size;
        let line_height = text.style.line_height();
        let mut ops = vec![
            Op::SaveGraphicsState,
            Op::SetFillColor {
                col: pdf_color(text.style.color),
            },
        ];
        for (i, line) in text.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let x = match text.align {
                Align::Left => text.x,
                Align::Center => text.x + ((text.width - text.style.measure(line)) / 2.0).max(0.0),
            };
            // Baseline sits one font size below the top of the line box.
            let baseline = text.y + i as f32 * line_height + size;
            ops.extend([
                Op::StartTextSection,
                Op::SetTextCursor {
                    pos: Point {
                        x: Pt(x),
                        y: Pt(self.flip(baseline)),
                    },
                },
                Op::SetFontSizeBuiltinFont {
                    font: builtin_font(text.style.font),
                    size: Pt(size),
                },
                Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(line.clone())],
                    font: builtin_font(text.style.font),
                },
                Op::EndTextSection,
            ]);
        }
        ops.push(Op::RestoreGraphicsState);
        self.ops().extend(ops);
    }

    fn draw_image(&mut self, image: &ImageDraw, raster: &[u8]) -> Result<(), RenderError> {
        let raw = decode_raster(raster)?;
        let (px_w, px_h) = (raw.width as f32, raw.height as f32);
        let id = self.doc.add_image(&raw);
        let transform = XObjectTransform {
            translate_x: Some(Pt(image.rect.x)),
            translate_y: Some(Pt(self.flip(image.rect.bottom()))),
            scale_x: Some(image.rect.width / px_w),
            scale_y: Some(image.rect.height / px_h),
            dpi: Some(72.0),
            ..Default::default()
        };
        self.ops().push(Op::UseXobject { id, transform });
        Ok(())
    }

    fn stroke_rect(&mut self, stroke: &StrokeDraw) {
        let line = Line {
            points: rect_corners(&stroke.rect)
                .into_iter()
                .map(|(x, y)| LinePoint {
                    p: Point {
                        x: Pt(x),
                        y: Pt(self.flip(y)),
                    },
                    bezier: false,
                })
                .collect(),
            is_closed: true,
        };
        let ops = [
            Op::SaveGraphicsState,
            Op::SetOutlineColor {
                col: pdf_color(stroke.color),
            },
            Op::SetOutlineThickness {
                pt: Pt(stroke.width),
            },
            Op::DrawLine { line },
            Op::RestoreGraphicsState,
        ];
        self.ops().extend(ops);
    }

    fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.current.is_some())
    }

    fn finish(&mut self, sink: &mut dyn Write) -> Result<(), RenderError> {
        self.flush_page();
        self.doc.pages = std::mem::take(&mut self.pages);
        let mut warnings = Vec::new();
        let bytes = self.doc.save(&save_options(), &mut warnings);
        for warning in &warnings {
            log::debug!("pdf: {warning:?}");
        }
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }
}

/// Rasters are already sized for the configured DPI, so printpdf must not
/// downsample or re-encode them. Pixels are stored losslessly.
fn save_options() -> PdfSaveOptions {
    PdfSaveOptions {
        image_optimization: Some(ImageOptimizationOptions {
            quality: None,
            max_image_size: None,
            dither_greyscale: None,
            convert_to_greyscale: None,
            auto_optimize: Some(false),
            format: Some(ImageCompression::Flate),
        }),
        ..PdfSaveOptions::default()
    }
}

fn points_to_mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// Clockwise from the top-left, in layout space.
fn rect_corners(rect: &Rect) -> [(f32, f32); 4] {
    [
        (rect.x, rect.y),
        (rect.right(), rect.y),
        (rect.right(), rect.bottom()),
        (rect.x, rect.bottom()),
    ]
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
        icc_profile: None,
    })
}

pub fn builtin_font(font: Font) -> BuiltinFont {
    match font {
        Font::Helvetica => BuiltinFont::Helvetica,
        Font::HelveticaBold => BuiltinFont::HelveticaBold,
        Font::HelveticaOblique => BuiltinFont::HelveticaOblique,
        Font::HelveticaBoldOblique => BuiltinFont::HelveticaBoldOblique,
        Font::TimesRoman => BuiltinFont::TimesRoman,
        Font::TimesBold => BuiltinFont::TimesBold,
        Font::TimesItalic => BuiltinFont::TimesItalic,
        Font::TimesBoldItalic => BuiltinFont::TimesBoldItalic,
        Font::Courier => BuiltinFont::Courier,
        Font::CourierBold => BuiltinFont::CourierBold,
        Font::CourierOblique => BuiltinFont::CourierOblique,
        Font::CourierBoldOblique => BuiltinFont::CourierBoldOblique,
        Font::Symbol => BuiltinFont::Symbol,
        Font::ZapfDingbats => BuiltinFont::ZapfDingbats,
    }
}

/// Decode an encoded raster into 8-bit RGB pixels for embedding.
fn decode_raster(bytes: &[u8]) -> Result<RawImage, RenderError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| RenderError::Image(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(RawImage {
        pixels: RawImageData::U8(rgb.into_raw()),
        width: width as usize,
        height: height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    })
}
