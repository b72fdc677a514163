//! The cover page: portfolio title, subtitle and author centered in the upper
//! third, contact details near the bottom margin.

use super::Theme;
use super::draw::{Align, DrawOp, PagePlan, TextDraw};
use super::text::TextStyle;
use crate::config::PortfolioConfig;

pub const COVER_TITLE_SIZE: f32 = 36.0;
pub const COVER_SUBTITLE_SIZE: f32 = 18.0;
pub const COVER_AUTHOR_SIZE: f32 = 14.0;
const CONTACT_OFFSET: f32 = 60.0;
const BLOCK_SPACING: f32 = 12.0;

pub fn cover_page(config: &PortfolioConfig, theme: &Theme) -> PagePlan {
    let geometry = theme.geometry;
    let x = geometry.margin;
    let width = geometry.content_width();
    let centered = |text: &str, y: f32, style: TextStyle| {
        TextDraw::wrapped(text, x, y, width, style, Align::Center)
    };

    let mut plan = PagePlan::new();
    let mut y = geometry.height / 3.0;

    let title_style = TextStyle {
        size: COVER_TITLE_SIZE,
        ..theme.title
    };
    let title = centered(&config.title, y, title_style);
    y = title.bottom() + BLOCK_SPACING;
    plan.ops.push(DrawOp::Text(title));

    if !config.subtitle.trim().is_empty() {
        let style = TextStyle {
            size: COVER_SUBTITLE_SIZE,
            ..theme.heading
        };
        let subtitle = centered(config.subtitle.trim(), y, style);
        y = subtitle.bottom() + BLOCK_SPACING;
        plan.ops.push(DrawOp::Text(subtitle));
    }

    if !config.author.trim().is_empty() {
        let style = TextStyle {
            size: COVER_AUTHOR_SIZE,
            ..theme.body
        };
        plan.ops.push(DrawOp::Text(centered(config.author.trim(), y, style)));
    }

    let contact: Vec<&str> = [config.email.as_deref(), config.website.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if !contact.is_empty() {
        let y = geometry.height - geometry.margin - CONTACT_OFFSET;
        plan.ops
            .push(DrawOp::Text(centered(&contact.join("\n"), y, theme.body)));
    }

    plan
}
