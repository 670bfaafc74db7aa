//! Dashed zero reference line
//!
//! Drawn across the plot box when the y-domain straddles zero, so positive
//! and negative readings (e.g. forecast temperatures) are easy to tell apart.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use crate::ui::styling::INK;

use super::constants::{ZERO_DASH_LENGTH_PX, ZERO_DASH_PERIOD_PX};
use super::viewport::Viewport;

/// Start and end x of every dash between `x_start` and `x_end`.
///
/// Dashes start every [`ZERO_DASH_PERIOD_PX`] and stop one period short of
/// `x_end` so the last dash never touches the plot box border.
pub fn dashed_segments(x_start: i32, x_end: i32) -> impl Iterator<Item = (i32, i32)> {
    (x_start..x_end - ZERO_DASH_PERIOD_PX)
        .step_by(ZERO_DASH_PERIOD_PX as usize)
        .map(|x| (x, x + ZERO_DASH_LENGTH_PX))
}

/// Row of the zero line, if the domain straddles zero.
pub(super) fn zero_line_row(viewport: &Viewport) -> Option<i32> {
    viewport
        .data_bounds()
        .straddles_zero()
        .then(|| viewport.screen_y(0.0))
}

/// Draw the dashed zero line; returns its row when drawn.
pub(super) fn draw_zero_line<D: DrawTarget<Color = Gray4>>(
    viewport: &Viewport,
    display: &mut D,
) -> Result<Option<i32>, D::Error> {
    let Some(y) = zero_line_row(viewport) else {
        return Ok(None);
    };

    let plot_area = viewport.plot_area();
    let x_start = plot_area.top_left.x;
    let x_end = x_start + plot_area.size.width as i32;
    let style = PrimitiveStyle::with_stroke(INK, 1);

    for (x0, x1) in dashed_segments(x_start, x_end) {
        Line::new(Point::new(x0, y), Point::new(x1, y))
            .into_styled(style)
            .draw(display)?;
    }

    Ok(Some(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_dash_pattern() {
        let dashes: Vec<_> = dashed_segments(100, 140).collect();
        assert_eq!(dashes, [(100, 105), (110, 115), (120, 125)]);
    }

    #[test]
    fn test_no_dashes_in_narrow_box() {
        assert_eq!(dashed_segments(100, 105).count(), 0);
    }
}
