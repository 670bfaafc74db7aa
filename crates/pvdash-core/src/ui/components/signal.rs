//! Wi-Fi signal indicator
//!
//! Concentric arcs opening upward; every quality band that is reached adds
//! its arc, so a strong signal shows all five.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::Drawable;
use crate::ui::styling::INK;

use super::arc::draw_arc;

/// Shared sweep of all signal arcs, in degrees.
pub const SIGNAL_SWEEP: (i32, i32) = (225, 315);

pub const SIGNAL_BAND_COUNT: usize = 5;

/// (minimum quality in percent, arc radius in pixels), strongest first.
pub const SIGNAL_BANDS: [(u8, u32); SIGNAL_BAND_COUNT] =
    [(80, 16), (40, 12), (20, 8), (10, 4), (0, 2)];

/// Radii of the arcs to draw for `quality` percent.
pub fn signal_arc_radii(quality: u8) -> heapless::Vec<u32, SIGNAL_BAND_COUNT> {
    SIGNAL_BANDS
        .iter()
        .filter(|(threshold, _)| quality >= *threshold)
        .map(|(_, radius)| *radius)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalIndicator {
    center: Point,
    quality: u8,
}

impl SignalIndicator {
    pub fn new(center: Point, quality: u8) -> Self {
        Self { center, quality }
    }
}

impl Drawable for SignalIndicator {
    fn draw<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        for radius in signal_arc_radii(self.quality) {
            draw_arc(
                display,
                self.center,
                radius,
                INK,
                SIGNAL_SWEEP.0,
                SIGNAL_SWEEP.1,
            )?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        let outer = SIGNAL_BANDS[0].1;
        Rectangle::new(
            self.center - Point::new(outer as i32, outer as i32),
            Size::new(2 * outer + 1, outer + 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_cumulative() {
        assert_eq!(signal_arc_radii(100).as_slice(), &[16, 12, 8, 4, 2]);
        assert_eq!(signal_arc_radii(80).as_slice(), &[16, 12, 8, 4, 2]);
        assert_eq!(signal_arc_radii(56).as_slice(), &[12, 8, 4, 2]);
        assert_eq!(signal_arc_radii(15).as_slice(), &[4, 2]);
        assert_eq!(signal_arc_radii(0).as_slice(), &[2]);
    }
}
