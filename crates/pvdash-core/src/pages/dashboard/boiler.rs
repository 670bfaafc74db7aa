//! Hot water tank with its fill level and temperature

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Alignment;

use crate::snapshot::BoilerReadings;
use crate::ui::components::{Label, TextSize};
use crate::ui::core::Drawable;
use crate::ui::format::{CELSIUS, Token, format_value};
use crate::ui::icons::{Icon, IconSet};
use crate::ui::styling::INK;

use super::constants::{
    BODY_ORIGIN, BOILER_EMPTY_ROW_PX, BOILER_FILL_X_PX, BOILER_FULL_ROW_PX,
    BOILER_FULL_TEMPERATURE_C, BOILER_ICON_X_PX, BOILER_LABEL_BOTTOM_Y_PX,
    BOILER_LABEL_FLOAT_BELOW_PCT, BOILER_LABEL_INVERT_ABOVE_PCT, BOILER_LABEL_MIDDLE_Y_PX,
    BOILER_LABEL_X_PX, BOILER_OFFSET,
};

/// Where and how the temperature is printed over the tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoilerLabelStyle {
    /// Ink on paper in the middle of a mostly empty tank.
    Floating,
    /// Paper on ink in the middle of a mostly full tank.
    InvertedMiddle,
    /// Paper on ink near the bottom, inside the filled part.
    InvertedBottom,
}

impl BoilerLabelStyle {
    pub fn for_fill(percent: u8) -> Self {
        if percent < BOILER_LABEL_FLOAT_BELOW_PCT {
            BoilerLabelStyle::Floating
        } else if percent > BOILER_LABEL_INVERT_ABOVE_PCT {
            BoilerLabelStyle::InvertedMiddle
        } else {
            BoilerLabelStyle::InvertedBottom
        }
    }
}

/// Fill level in whole percent, full at [`BOILER_FULL_TEMPERATURE_C`].
pub fn fill_percent(water_temperature: f64) -> u8 {
    let percent = (water_temperature * 100.0 / BOILER_FULL_TEMPERATURE_C).clamp(0.0, 100.0);
    // NaN saturates to 0
    percent as u8
}

/// Topmost filled row relative to the panel top; the fill runs down to
/// [`BOILER_EMPTY_ROW_PX`].
///
/// An empty tank still shows a two-row sliver at the bottom.
pub fn fill_top_row(percent: u8) -> i32 {
    let span = (BOILER_EMPTY_ROW_PX - BOILER_FULL_ROW_PX) as f64;
    let level = (BOILER_EMPTY_ROW_PX as f64 - span * percent.min(100) as f64 / 100.0) as i32;
    (level - 1).max(BOILER_FULL_ROW_PX + 1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoilerView {
    pub fill_percent: u8,
    pub label: Token,
    pub label_style: BoilerLabelStyle,
}

impl BoilerView {
    pub fn new(boiler: &BoilerReadings) -> Self {
        let percent = fill_percent(boiler.water_temperature);
        Self {
            fill_percent: percent,
            label: format_value(boiler.water_temperature, CELSIUS),
            label_style: BoilerLabelStyle::for_fill(percent),
        }
    }

    pub fn draw<D, I>(&self, icons: &I, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        I: IconSet,
    {
        let origin = BODY_ORIGIN + BOILER_OFFSET;
        icons.draw_icon(Icon::Boiler, origin + Point::new(BOILER_ICON_X_PX, 0), display)?;

        let (left, right) = BOILER_FILL_X_PX;
        let fill = PrimitiveStyle::with_stroke(INK, 1);
        for row in fill_top_row(self.fill_percent)..=BOILER_EMPTY_ROW_PX {
            Line::new(
                origin + Point::new(left, row),
                origin + Point::new(right, row),
            )
            .into_styled(fill)
            .draw(display)?;
        }

        let (y, inverted) = match self.label_style {
            BoilerLabelStyle::Floating => (BOILER_LABEL_MIDDLE_Y_PX, false),
            BoilerLabelStyle::InvertedMiddle => (BOILER_LABEL_MIDDLE_Y_PX, true),
            BoilerLabelStyle::InvertedBottom => (BOILER_LABEL_BOTTOM_Y_PX, true),
        };
        let label = Label::new(
            &self.label,
            origin + Point::new(BOILER_LABEL_X_PX, y),
            TextSize::Medium,
        )
        .with_alignment(Alignment::Center);
        if inverted {
            label.inverted().draw(display)
        } else {
            label.draw(display)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_percent() {
        assert_eq!(fill_percent(21.1), 28);
        assert_eq!(fill_percent(75.0), 100);
        assert_eq!(fill_percent(90.0), 100);
        assert_eq!(fill_percent(-4.0), 0);
        assert_eq!(fill_percent(f64::NAN), 0);
    }

    #[test]
    fn test_label_style_thresholds() {
        assert_eq!(BoilerLabelStyle::for_fill(39), BoilerLabelStyle::Floating);
        assert_eq!(BoilerLabelStyle::for_fill(40), BoilerLabelStyle::InvertedBottom);
        assert_eq!(BoilerLabelStyle::for_fill(65), BoilerLabelStyle::InvertedBottom);
        assert_eq!(BoilerLabelStyle::for_fill(66), BoilerLabelStyle::InvertedMiddle);
    }

    #[test]
    fn test_fill_rows() {
        assert_eq!(fill_top_row(0), 77);
        // 78 - 0.76 * 28 = 56.72, truncated to 56
        assert_eq!(fill_top_row(28), 55);
        assert_eq!(fill_top_row(100), 3);
    }

    #[test]
    fn test_cold_tank_label() {
        let view = BoilerView::new(&BoilerReadings {
            water_temperature: 21.1,
            ..Default::default()
        });
        assert_eq!(view.label.as_str(), "21C");
        assert_eq!(view.label_style, BoilerLabelStyle::Floating);
    }
}
