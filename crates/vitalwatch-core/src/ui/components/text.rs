//! Single-line text labels
//!
//! Fonts come from the ISO 8859-1 set so German umlauts render correctly.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_7X13, FONT_7X13_BOLD, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

extern crate alloc;
use alloc::string::String;

/// Font sizes available to labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    /// 6x10, captions
    Small,
    /// 7x13, body text
    Medium,
    /// 7x13 bold, emphasised body text
    MediumBold,
    /// 10x20, headlines
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Medium => &FONT_7X13,
            TextSize::MediumBold => &FONT_7X13_BOLD,
            TextSize::Large => &FONT_10X20,
        }
    }
}

/// A line of text anchored at a point.
///
/// The anchor is the vertical middle of the line; horizontally it is the left
/// edge, center or right edge depending on the alignment.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    anchor: Point,
    size: TextSize,
    color: Rgb565,
    alignment: Alignment,
}

impl Label {
    /// Create a centered label
    pub fn centered(text: impl Into<String>, anchor: Point, size: TextSize, color: Rgb565) -> Self {
        Self {
            text: text.into(),
            anchor,
            size,
            color,
            alignment: Alignment::Center,
        }
    }

    /// Set the horizontal alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Area covered by the rendered text
    pub fn bounds(&self) -> Rectangle {
        self.as_text().bounding_box()
    }

    fn as_text(&self) -> Text<'_, MonoTextStyle<'static, Rgb565>> {
        let character_style = MonoTextStyle::new(self.size.font(), self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(&self.text, self.anchor, character_style, text_style)
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        EgDrawable::draw(&self.as_text(), display)?;
        Ok(())
    }
}
