//! Battery gauge for the header

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::ui::core::Drawable;
use crate::ui::styling::INK;

pub const GAUGE_WIDTH_PX: u32 = 40;
pub const GAUGE_HEIGHT_PX: u32 = 16;
pub const GAUGE_BAR_COUNT: u32 = 40;
pub const NUB_WIDTH_PX: u32 = 4;
pub const NUB_HEIGHT_PX: u32 = 10;
pub const NUB_OFFSET_Y_PX: i32 = 3;

/// Number of one-pixel bars lit for `capacity_pct`, capped at full.
pub fn filled_bars(capacity_pct: u8) -> u32 {
    u32::from(capacity_pct.min(100)) * GAUGE_BAR_COUNT / 100
}

/// Outline with a terminal nub, filled left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryGauge {
    top_left: Point,
    capacity_pct: u8,
}

impl BatteryGauge {
    pub fn new(top_left: Point, capacity_pct: u8) -> Self {
        Self {
            top_left,
            capacity_pct,
        }
    }
}

impl Drawable for BatteryGauge {
    fn draw<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        let stroke = PrimitiveStyle::with_stroke(INK, 1);

        Rectangle::new(self.top_left, Size::new(GAUGE_WIDTH_PX, GAUGE_HEIGHT_PX))
            .into_styled(stroke)
            .draw(display)?;
        Rectangle::new(
            self.top_left + Point::new(GAUGE_WIDTH_PX as i32, NUB_OFFSET_Y_PX),
            Size::new(NUB_WIDTH_PX, NUB_HEIGHT_PX),
        )
        .into_styled(stroke)
        .draw(display)?;

        let bottom = GAUGE_HEIGHT_PX as i32 - 1;
        for bar in 0..filled_bars(self.capacity_pct) as i32 {
            Line::new(
                self.top_left + Point::new(bar, 0),
                self.top_left + Point::new(bar, bottom),
            )
            .into_styled(stroke)
            .draw(display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(
            self.top_left,
            Size::new(GAUGE_WIDTH_PX + NUB_WIDTH_PX, GAUGE_HEIGHT_PX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::styling::PAPER;

    #[test]
    fn test_filled_bars() {
        assert_eq!(filled_bars(0), 0);
        assert_eq!(filled_bars(1), 0);
        assert_eq!(filled_bars(3), 1);
        assert_eq!(filled_bars(50), 20);
        assert_eq!(filled_bars(100), 40);
        assert_eq!(filled_bars(250), 40);
    }

    #[test]
    fn test_bars_fill_from_the_left() {
        let origin = Point::new(100, 11);
        let mut frame = FrameBuffer::new();
        BatteryGauge::new(origin, 50).draw(&mut frame).unwrap();

        let mid_row = origin.y + 8;
        assert_eq!(frame.pixel(Point::new(origin.x + 10, mid_row)), Some(INK));
        assert_eq!(frame.pixel(Point::new(origin.x + 19, mid_row)), Some(INK));
        assert_eq!(frame.pixel(Point::new(origin.x + 20, mid_row)), Some(PAPER));
        assert_eq!(frame.pixel(Point::new(origin.x + 38, mid_row)), Some(PAPER));
        // right border of the outline
        assert_eq!(frame.pixel(Point::new(origin.x + 39, mid_row)), Some(INK));
    }
}
