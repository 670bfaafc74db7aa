//! Core UI traits and types for the dashboard

use core::fmt;

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Trait for any UI element that can be drawn onto the grayscale canvas
///
/// The panel is always refreshed as a whole, so elements carry no dirty
/// state: every frame draws every element once.
pub trait Drawable {
    /// Draw the element to the display
    fn draw<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;
}

/// Wall-clock time of the last successful refresh, shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl Timestamp {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

/// Formats as `DD.MM.YYYY HH:MM`.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}.{:02}.{:04} {:02}:{:02}",
            self.day, self.month, self.year, self.hour, self.minute
        )
    }
}
