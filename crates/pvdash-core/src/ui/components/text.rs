//! Text labels anchored at fixed canvas positions

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15, FONT_10X20};
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text as EgText, TextStyleBuilder};

use crate::ui::core::Drawable;
use crate::ui::styling::{inverted_text_style, text_style};

/// Maximum label length in characters; longer text is cut off.
pub const MAX_LABEL_LENGTH: usize = 96;

/// Text size variants
///
/// - `Small`: 6x10 font, axis labels and header
/// - `Medium`: 9x15 font, default body text
/// - `Large`: 10x20 font, readings and the error screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Medium => &FONT_9X15,
            TextSize::Large => &FONT_10X20,
        }
    }
}

/// A single line of text whose anchor is its top edge
///
/// The anchor x is the left edge, centre or right edge of the text
/// depending on the alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: heapless::String<MAX_LABEL_LENGTH>,
    anchor: Point,
    size: TextSize,
    alignment: Alignment,
    inverted: bool,
}

impl Label {
    pub fn new(text: &str, anchor: Point, size: TextSize) -> Self {
        let mut owned = heapless::String::new();
        for c in text.chars() {
            if owned.push(c).is_err() {
                break;
            }
        }

        Self {
            text: owned,
            anchor,
            size,
            alignment: Alignment::Left,
            inverted: false,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Draw paper-coloured text on an ink background.
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    fn text_width(&self) -> u32 {
        let font = self.size.font();
        let count = self.text.chars().count() as u32;
        if count == 0 {
            return 0;
        }
        count * font.character_size.width + (count - 1) * font.character_spacing
    }
}

impl Drawable for Label {
    fn draw<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        let character_style = if self.inverted {
            inverted_text_style(self.size)
        } else {
            text_style(self.size)
        };
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Top)
            .build();

        EgText::with_text_style(&self.text, self.anchor, character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        let width = self.text_width();
        let left = match self.alignment {
            Alignment::Left => self.anchor.x,
            Alignment::Center => self.anchor.x - (width / 2) as i32,
            Alignment::Right => self.anchor.x - width as i32,
        };
        Rectangle::new(
            Point::new(left, self.anchor.y),
            Size::new(width, self.size.font().character_size.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_truncates_long_text() {
        let long = "x".repeat(MAX_LABEL_LENGTH + 10);
        let label = Label::new(&long, Point::zero(), TextSize::Small);
        assert_eq!(label.text().len(), MAX_LABEL_LENGTH);
    }

    #[test]
    fn test_bounds_follow_alignment() {
        let anchor = Point::new(100, 10);
        let left = Label::new("327W", anchor, TextSize::Large);
        let right = left.clone().with_alignment(Alignment::Right);
        let centre = left.clone().with_alignment(Alignment::Center);

        assert_eq!(left.bounds(), Rectangle::new(anchor, Size::new(40, 20)));
        assert_eq!(right.bounds().top_left, Point::new(60, 10));
        assert_eq!(centre.bounds().top_left, Point::new(80, 10));
    }
}
