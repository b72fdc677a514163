//! Info pages: project text flowed down the page, optionally beside an image.
//!
//! ## Single Column
//!
//! Tokens are walked in order with a running [`Cursor`] starting at
//! `margin + 20`. Each keyword draws its text at the cursor and then advances
//! it by the block height plus a fixed spacing:
//!
//! | Token | Style | Spacing after |
//! |---|---|---|
//! | `title` | title | 20 |
//! | `medium` | heading | 10 |
//! | `year` | body | 10 |
//! | `credits` | body, one line per credit | 15 |
//! | `description` | body, wrapped | 20 |
//! | `link` | caption | 15 |
//!
//! Empty fields draw nothing and leave the cursor where it is, and so do
//! words that are neither a keyword nor an image filename. An image token
//! gets a box the full content width and `min(60% of the space left, 40% of
//! the page height, 400pt)` tall, then the cursor moves past it by 20.
//!
//! ## Two Columns
//!
//! Used when the content names an image file and the page is landscape.
//! Keywords go in the left column, vertically centered using the same block
//! heights the render pass produces. The first image token fills the right column.

use super::Theme;
use super::draw::{Align, DrawOp, PagePlan, TextDraw, place_image};
use super::text::TextStyle;
use crate::catalog::{self, ImageRecord};
use crate::geometry::Rect;
use crate::types::{ContentToken, Keyword, Project};

const TOP_OFFSET: f32 = 20.0;
const IMAGE_SPACING: f32 = 20.0;
const COLUMN_GAP: f32 = 30.0;
const TEXT_COLUMN_SHARE: f32 = 0.45;
const MAX_IMAGE_HEIGHT: f32 = 400.0;

/// Content of the default info page, drawn when a project has no layout.
pub const DEFAULT_INFO_CONTENT: [Keyword; 6] = [
    Keyword::Title,
    Keyword::Medium,
    Keyword::Year,
    Keyword::Credits,
    Keyword::Description,
    Keyword::Link,
];

/// Vertical flow position on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub y: f32,
}

impl Cursor {
    pub fn at(y: f32) -> Self {
        Self { y }
    }

    #[must_use]
    pub fn advance(self, by: f32) -> Self {
        Self { y: self.y + by }
    }
}

/// The text a keyword produces at a given position, and how far it moves the
/// cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordBlock {
    pub texts: Vec<TextDraw>,
    pub advance: f32,
}

/// Lay out one keyword at `(x, y)` in a column `width` wide.
///
/// Returns `None` when the project has nothing to show for the keyword.
pub fn keyword_block(
    keyword: Keyword,
    project: &Project,
    theme: &Theme,
    x: f32,
    y: f32,
    width: f32,
) -> Option<KeywordBlock> {
    let single = |text: &str, style: TextStyle, spacing: f32| {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let draw = TextDraw::wrapped(text, x, y, width, style, Align::Left);
        let advance = draw.height() + spacing;
        Some(KeywordBlock {
            texts: vec![draw],
            advance,
        })
    };

    match keyword {
        Keyword::Title => single(&project.title, theme.title, 20.0),
        Keyword::Medium => single(&project.medium, theme.heading, 10.0),
        Keyword::Year => single(&project.year_line(), theme.body, 10.0),
        Keyword::Description => single(project.description.as_deref()?, theme.body, 20.0),
        Keyword::Link => single(project.link.as_deref()?, theme.caption, 15.0),
        Keyword::Credits => {
            let lines = project.credit_lines();
            if lines.is_empty() {
                return None;
            }
            let mut texts = Vec::with_capacity(lines.len());
            let mut line_y = y;
            for line in lines {
                let draw = TextDraw::wrapped(&line, x, line_y, width, theme.body, Align::Left);
                line_y = draw.bottom();
                texts.push(draw);
            }
            Some(KeywordBlock {
                advance: line_y - y + 15.0,
                texts,
            })
        }
    }
}

/// Lay out an `info` instruction, picking single or two-column flow.
pub fn info_page(
    content: &[ContentToken],
    project: &Project,
    records: &[ImageRecord],
    theme: &Theme,
) -> PagePlan {
    if uses_two_columns(content, theme) {
        two_column(content, project, records, theme)
    } else {
        single_column(content, project, records, theme)
    }
}

/// Two columns only make sense with an image to put beside the text, and
/// only when the page is wider than it is tall.
pub fn uses_two_columns(content: &[ContentToken], theme: &Theme) -> bool {
    theme.geometry.is_landscape() && content.iter().any(|t| t.image_name().is_some())
}

/// The info page drawn for projects without a layout, in base Helvetica.
pub fn default_info_page(project: &Project, records: &[ImageRecord], theme: &Theme) -> PagePlan {
    let content: Vec<ContentToken> = DEFAULT_INFO_CONTENT
        .iter()
        .map(|&k| ContentToken::Keyword(k))
        .collect();
    single_column(&content, project, records, &theme.with_base_fonts())
}

pub fn single_column(
    content: &[ContentToken],
    project: &Project,
    records: &[ImageRecord],
    theme: &Theme,
) -> PagePlan {
    let geometry = theme.geometry;
    let x = geometry.margin;
    let width = geometry.content_width();
    let mut plan = PagePlan::new();

    let mut cursor = Cursor::at(geometry.margin + TOP_OFFSET);
    for token in content {
        match token {
            ContentToken::Keyword(keyword) => {
                if let Some(block) = keyword_block(*keyword, project, theme, x, cursor.y, width) {
                    plan.extend(block.texts.into_iter().map(DrawOp::Text));
                    cursor = cursor.advance(block.advance);
                }
            }
            ContentToken::Image(name) => {
                if token.image_name().is_none() {
                    log::debug!(
                        "{}: info token {} is not a keyword or image",
                        project.dir_name,
                        name
                    );
                    continue;
                }
                let Some(record) = catalog::find(records, name) else {
                    log::debug!("{}: info image {} not available", project.dir_name, name);
                    continue;
                };
                let remaining = geometry.height - geometry.margin - cursor.y;
                let height = (0.6 * remaining)
                    .min(0.4 * geometry.height)
                    .min(MAX_IMAGE_HEIGHT)
                    .max(0.0);
                let bounds = Rect::new(x, cursor.y, width, height);
                plan.ops.push(place_image(record, bounds, theme.border));
                cursor = cursor.advance(height + IMAGE_SPACING);
            }
        }
    }
    plan
}

pub fn two_column(
    content: &[ContentToken],
    project: &Project,
    records: &[ImageRecord],
    theme: &Theme,
) -> PagePlan {
    let geometry = theme.geometry;
    let usable = geometry.width - 2.0 * geometry.margin;
    let text_x = geometry.margin;
    let text_width = TEXT_COLUMN_SHARE * usable - COLUMN_GAP;
    let image_x = geometry.margin + TEXT_COLUMN_SHARE * usable;
    let image_width = (1.0 - TEXT_COLUMN_SHARE) * usable;

    let keywords: Vec<Keyword> = content
        .iter()
        .filter_map(|t| match t {
            ContentToken::Keyword(k) => Some(*k),
            ContentToken::Image(_) => None,
        })
        .collect();

    let total = text_height(&keywords, project, theme, text_width);
    let mut cursor = Cursor::at(geometry.margin.max((geometry.height - total) / 2.0));

    let mut plan = PagePlan::new();
    for keyword in keywords {
        if let Some(block) = keyword_block(keyword, project, theme, text_x, cursor.y, text_width) {
            plan.extend(block.texts.into_iter().map(DrawOp::Text));
            cursor = cursor.advance(block.advance);
        }
    }

    let first_image = content.iter().find_map(ContentToken::image_name);
    if let Some(name) = first_image {
        match catalog::find(records, name) {
            Some(record) => {
                let bounds = Rect::new(
                    image_x,
                    geometry.margin + TOP_OFFSET,
                    image_width,
                    geometry.height - 2.0 * geometry.margin - 2.0 * TOP_OFFSET,
                );
                plan.ops.push(place_image(record, bounds, theme.border));
            }
            None => log::debug!("{}: info image {} not available", project.dir_name, name),
        }
    }
    plan
}

/// Total cursor advance of `keywords` in a column `width` wide.
pub fn text_height(keywords: &[Keyword], project: &Project, theme: &Theme, width: f32) -> f32 {
    keywords
        .iter()
        .filter_map(|&k| keyword_block(k, project, theme, 0.0, 0.0, width))
        .map(|block| block.advance)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioConfig;
    use crate::geometry::PageGeometry;
    use crate::layout::Font;
    use crate::test_helpers::record;

    fn theme(width: f32, height: f32) -> Theme {
        Theme {
            geometry: PageGeometry::new(width, height, 50.0),
            ..Theme::from_config(&PortfolioConfig::default())
        }
    }

    fn landscape() -> Theme {
        theme(841.89, 595.28)
    }

    fn portrait() -> Theme {
        theme(595.28, 841.89)
    }

    fn project() -> Project {
        Project {
            dir_name: "010-Tidal".into(),
            title: "Tidal".into(),
            medium: "Video installation".into(),
            year: "2021".into(),
            description: Some("Twelve channels of water recorded along the coast.".into()),
            link: Some("https://example.org/tidal".into()),
            curator: Some("M. Ortiz".into()),
            ..Project::default()
        }
    }

    fn tokens(names: &[&str]) -> Vec<ContentToken> {
        names.iter().map(|&n| ContentToken::from(n)).collect()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn cursor_advances() {
        assert_eq!(Cursor::at(70.0).advance(20.0), Cursor::at(90.0));
    }

    #[test]
    fn single_column_increments() {
        let theme = portrait();
        let plan = single_column(
            &tokens(&["title", "medium", "year", "link"]),
            &project(),
            &[],
            &theme,
        );
        let ys: Vec<f32> = plan.texts().map(|t| t.y).collect();

        let title_h = theme.title.line_height();
        let medium_h = theme.heading.line_height();
        let year_h = theme.body.line_height();
        let start = 70.0;
        assert_eq!(ys[0], start);
        assert_close(ys[1], start + title_h + 20.0);
        assert_close(ys[2], ys[1] + medium_h + 10.0);
        assert_close(ys[3], ys[2] + year_h + 10.0);
    }

    #[test]
    fn empty_fields_leave_cursor_in_place() {
        let theme = portrait();
        let mut project = project();
        project.medium.clear();
        project.curator = None;

        let plan = single_column(
            &tokens(&["medium", "credits", "title"]),
            &project,
            &[],
            &theme,
        );
        let texts: Vec<&TextDraw> = plan.texts().collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].lines, vec!["Tidal"]);
        assert_eq!(texts[0].y, 70.0);
    }

    #[test]
    fn credits_draw_one_line_per_present_field() {
        let theme = portrait();
        let project = Project {
            collective: Some("Salt".into()),
            publisher: Some("Harbour Press".into()),
            ..project()
        };
        let block = keyword_block(Keyword::Credits, &project, &theme, 50.0, 100.0, 400.0).unwrap();
        let lines: Vec<&str> = block.texts.iter().map(|t| t.lines[0].as_str()).collect();
        assert_eq!(
            lines,
            vec!["Collective: Salt", "Curator: M. Ortiz", "Publisher: Harbour Press"]
        );
        assert_close(block.texts[1].y, 100.0 + theme.body.line_height());
        assert_close(block.advance, 3.0 * theme.body.line_height() + 15.0);
    }

    #[test]
    fn single_column_image_box() {
        let theme = portrait();
        let records = vec![record("a.jpg", 1000, 1000, false)];
        let plan = single_column(&tokens(&["a.jpg", "title"]), &project(), &records, &theme);

        // remaining = 841.89 - 50 - 70; 60% of that exceeds the 400pt cap but
        // 40% of page height (336.76) is smaller still
        let image = plan.images().next().unwrap();
        let expected_h = 0.4 * 841.89_f32;
        assert!((image.rect.height - expected_h).abs() < 0.01);
        assert!((image.rect.width - expected_h).abs() < 0.01);
        let title = plan.texts().next().unwrap();
        assert!((title.y - (70.0 + expected_h + 20.0)).abs() < 0.01);
    }

    #[test]
    fn single_column_image_respects_remaining_space() {
        let theme = portrait();
        let records = vec![record("a.jpg", 100, 100, false)];
        let long = Project {
            description: Some("word ".repeat(900)),
            ..project()
        };
        let plan = single_column(&tokens(&["description", "a.jpg"]), &long, &records, &theme);

        let description = plan.texts().next().unwrap();
        let cursor = description.bottom() + 20.0;
        let remaining = 841.89 - 50.0 - cursor;
        let image = plan.images().next().unwrap();
        assert!(image.rect.height <= (0.6 * remaining).max(0.0) + 0.01);
    }

    #[test]
    fn unresolved_image_is_skipped_without_moving_cursor() {
        let theme = portrait();
        let plan = single_column(&tokens(&["missing.jpg", "title"]), &project(), &[], &theme);
        assert_eq!(plan.images().count(), 0);
        assert_eq!(plan.texts().next().unwrap().y, 70.0);
    }

    #[test]
    fn two_columns_need_landscape_and_an_image() {
        let with_image = tokens(&["title", "a.jpg"]);
        let text_only = tokens(&["title", "description"]);
        assert!(uses_two_columns(&with_image, &landscape()));
        assert!(!uses_two_columns(&with_image, &portrait()));
        assert!(!uses_two_columns(&text_only, &landscape()));
    }

    #[test]
    fn stray_words_do_not_trigger_two_columns() {
        let theme = landscape();
        let content = tokens(&["title", "duration", "description"]);
        assert!(!uses_two_columns(&content, &theme));

        let plan = info_page(&content, &project(), &[], &theme);
        let texts: Vec<&TextDraw> = plan.texts().collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].y, 70.0);
        for text in texts {
            assert_eq!(text.x, 50.0);
            assert!((text.width - theme.geometry.content_width()).abs() < 0.01);
        }
        assert_eq!(plan.images().count(), 0);
    }

    #[test]
    fn two_column_skips_stray_words_when_picking_the_image() {
        let theme = landscape();
        let records = vec![record("a.jpg", 400, 300, false)];
        let content = tokens(&["title", "duration", "a.jpg"]);
        let plan = two_column(&content, &project(), &records, &theme);
        let images: Vec<&str> = plan.images().map(|i| i.filename.as_str()).collect();
        assert_eq!(images, vec!["a.jpg"]);
    }

    #[test]
    fn portrait_info_with_image_is_single_column() {
        let theme = portrait();
        let records = vec![record("a.jpg", 400, 300, false)];
        let plan = info_page(&tokens(&["title", "a.jpg"]), &project(), &records, &theme);
        let image = plan.images().next().unwrap();
        assert_eq!(image.rect.x, 50.0);
        assert!((image.rect.width - theme.geometry.content_width()).abs() < 0.01);
    }

    #[test]
    fn two_column_geometry() {
        let theme = landscape();
        let records = vec![record("a.jpg", 400, 300, false)];
        let content = tokens(&["title", "description", "a.jpg"]);
        let plan = info_page(&content, &project(), &records, &theme);

        let usable = 841.89_f32 - 100.0;
        let image_col = Rect::new(
            50.0 + 0.45 * usable,
            70.0,
            0.55 * usable,
            595.28 - 100.0 - 40.0,
        );
        let image = plan.images().next().unwrap();
        assert!(image_col.contains(&image.rect, 0.01));

        for text in plan.texts() {
            assert_eq!(text.x, 50.0);
            assert!((text.width - (0.45 * usable - 30.0)).abs() < 0.01);
        }
    }

    #[test]
    fn two_column_text_is_vertically_centered() {
        let theme = landscape();
        let records = vec![record("a.jpg", 400, 300, false)];
        let content = tokens(&["title", "medium", "credits", "a.jpg"]);
        let project = project();
        let plan = two_column(&content, &project, &records, &theme);

        let usable = 841.89_f32 - 100.0;
        let width = 0.45 * usable - 30.0;
        let total = text_height(
            &[Keyword::Title, Keyword::Medium, Keyword::Credits],
            &project,
            &theme,
            width,
        );
        let first = plan.texts().next().unwrap();
        assert!((first.y - (595.28 - total) / 2.0).abs() < 0.01);
    }

    #[test]
    fn measured_height_matches_rendered_height() {
        let theme = landscape();
        let records = vec![record("a.jpg", 400, 300, false)];
        let content = tokens(&["title", "medium", "year", "credits", "description", "link", "a.jpg"]);
        let project = Project {
            description: Some("A long description that wraps. ".repeat(20)),
            ..project()
        };
        let plan = two_column(&content, &project, &records, &theme);

        let width = 0.45 * (841.89_f32 - 100.0) - 30.0;
        let total = text_height(&DEFAULT_INFO_CONTENT, &project, &theme, width);
        let texts: Vec<&TextDraw> = plan.texts().collect();
        let first = texts.first().unwrap().y;
        // last block is the link, followed by its 15pt spacing
        let rendered = texts.last().unwrap().bottom() + 15.0 - first;
        assert!((rendered - total).abs() < 0.01);
    }

    #[test]
    fn tall_text_starts_at_margin() {
        let theme = landscape();
        let records = vec![record("a.jpg", 400, 300, false)];
        let project = Project {
            description: Some("overflowing text ".repeat(400)),
            ..project()
        };
        let plan = two_column(&tokens(&["description", "a.jpg"]), &project, &records, &theme);
        assert_eq!(plan.texts().next().unwrap().y, 50.0);
    }

    #[test]
    fn two_column_uses_first_image_token_only() {
        let theme = landscape();
        let records = vec![
            record("a.jpg", 400, 300, false),
            record("b.jpg", 400, 300, false),
        ];
        let plan = two_column(&tokens(&["b.jpg", "a.jpg"]), &project(), &records, &theme);
        let images: Vec<&str> = plan.images().map(|i| i.filename.as_str()).collect();
        assert_eq!(images, vec!["b.jpg"]);
    }

    #[test]
    fn two_column_unresolved_first_image_draws_no_image() {
        let theme = landscape();
        let records = vec![record("a.jpg", 400, 300, false)];
        let plan = two_column(&tokens(&["title", "gone.jpg", "a.jpg"]), &project(), &records, &theme);
        assert_eq!(plan.images().count(), 0);
        assert_eq!(plan.texts().count(), 1);
    }

    #[test]
    fn default_info_page_uses_base_fonts() {
        let mut config = PortfolioConfig::default();
        config.fonts.title = "Times-Bold".into();
        config.fonts.body = "Courier".into();
        let theme = Theme::from_config(&config);

        let plan = default_info_page(&project(), &[], &theme);
        let fonts: Vec<Font> = plan.texts().map(|t| t.style.font).collect();
        assert_eq!(fonts[0], Font::HelveticaBold);
        assert!(fonts[1..].iter().all(|&f| f == Font::Helvetica));
        assert_eq!(plan.images().count(), 0);
    }

    #[test]
    fn bordered_image_on_info_page_gets_stroke() {
        let theme = portrait();
        let records = vec![record("a.jpg", 400, 300, true)];
        let plan = single_column(&tokens(&["a.jpg"]), &project(), &records, &theme);
        let image = plan.images().next().unwrap();
        let stroke = plan.strokes().next().unwrap();
        assert_eq!(stroke.rect, image.rect);
    }
}
