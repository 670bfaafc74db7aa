//! Colors and text styles for the 16-level grayscale panel
//!
//! E-paper content is drawn in ink on paper. A handful of elements (the
//! boiler temperature over a full tank) use the inverted style, paper on ink.

use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::{Gray4, GrayColor};

use super::components::TextSize;

/// Foreground: fully saturated black.
pub const INK: Gray4 = Gray4::BLACK;

/// Background: the unprinted panel.
pub const PAPER: Gray4 = Gray4::WHITE;

/// Mid gray used by the outline icon fallback for fills.
pub const SHADE: Gray4 = Gray4::new(10);

/// Ink on transparent background.
pub fn text_style(size: TextSize) -> MonoTextStyle<'static, Gray4> {
    MonoTextStyle::new(size.font(), INK)
}

/// Paper on an ink box, for labels drawn over filled areas.
pub fn inverted_text_style(size: TextSize) -> MonoTextStyle<'static, Gray4> {
    MonoTextStyleBuilder::new()
        .font(size.font())
        .text_color(PAPER)
        .background_color(INK)
        .build()
}
