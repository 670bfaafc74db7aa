//! Axis label formatting and rendering
//!
//! Y labels show only the domain bounds; x labels show every integer step,
//! numbered from zero.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Alignment;
use heapless::String;

use crate::ui::components::text::{Label, TextSize};
use crate::ui::core::Drawable;

use super::constants::{
    LABEL_COLUMN_BASE_PX, LABEL_COLUMN_PER_CHAR_DECI_PX, LABEL_MARGIN_PX, MAX_AXIS_LABEL_LENGTH,
    TICK_LABEL_OFFSET_PX, ZERO_LABEL_OFFSET_PX,
};
use super::viewport::Viewport;

pub(super) type AxisLabel = String<MAX_AXIS_LABEL_LENGTH>;

/// Format a y-domain bound as a whole number.
pub(super) fn format_bound(value: f32) -> AxisLabel {
    let mut s = String::new();
    let _ = core::fmt::write(&mut s, format_args!("{:.0}", value));
    s
}

/// Width reserved left of the plot box for the longer of the two y labels.
pub(super) fn label_column_width(y_min: &str, y_max: &str) -> i32 {
    let longest = y_min.len().max(y_max.len()) as i32;
    LABEL_COLUMN_BASE_PX + longest * LABEL_COLUMN_PER_CHAR_DECI_PX / 10
}

/// Draw the y max label above the plot box and the y min label at its bottom.
pub(super) fn draw_y_labels<D: DrawTarget<Color = Gray4>>(
    origin_x: i32,
    y_min: &str,
    y_max: &str,
    viewport: &Viewport,
    display: &mut D,
) -> Result<(), D::Error> {
    let plot_area = viewport.plot_area();
    let x = origin_x + LABEL_MARGIN_PX;
    let top = plot_area.top_left.y;
    let bottom = top + plot_area.size.height as i32;

    Label::new(y_max, Point::new(x, top - 5), TextSize::Small).draw(display)?;
    Label::new(y_min, Point::new(x, bottom - 3), TextSize::Small).draw(display)?;

    Ok(())
}

/// Draw one tick label per x step below the plot box.
pub(super) fn draw_x_labels<D: DrawTarget<Color = Gray4>>(
    viewport: &Viewport,
    display: &mut D,
) -> Result<(), D::Error> {
    let plot_area = viewport.plot_area();
    let bounds = viewport.data_bounds();
    let y = plot_area.top_left.y + plot_area.size.height as i32 + TICK_LABEL_OFFSET_PX;

    for (step, x) in (bounds.x_min..=bounds.x_max).enumerate() {
        let mut text: AxisLabel = String::new();
        let _ = core::fmt::write(&mut text, format_args!("{}", step));

        Label::new(&text, Point::new(viewport.screen_x(x), y), TextSize::Small)
            .with_alignment(Alignment::Center)
            .draw(display)?;
    }

    Ok(())
}

/// Mark the zero line with a "0" left of the plot box.
pub(super) fn draw_zero_label<D: DrawTarget<Color = Gray4>>(
    row: i32,
    viewport: &Viewport,
    display: &mut D,
) -> Result<(), D::Error> {
    let x = viewport.plot_area().top_left.x - ZERO_LABEL_OFFSET_PX;
    Label::new("0", Point::new(x, row), TextSize::Small).draw(display)
}
