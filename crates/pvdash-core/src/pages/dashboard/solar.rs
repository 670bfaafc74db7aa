//! Solar panel symbol with live power and daily yield

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Alignment;

use crate::snapshot::InverterReadings;
use crate::ui::components::{Label, TextSize};
use crate::ui::core::Drawable;
use crate::ui::format::{KILOWATT_HOURS, Token, WATTS, format_value};
use crate::ui::icons::{Icon, IconSet};

use super::constants::{
    BODY_ORIGIN, SOLAR_ARROW_HEAD_OFFSET, SOLAR_ARROW_OFFSET, SOLAR_OFFSET, SOLAR_POWER_Y_PX,
    SOLAR_SIZE, SOLAR_YIELD_Y_PX,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SolarView {
    pub power: Token,
    pub daily_yield: Token,
    /// Panels are producing; adds the arrow head on the line to the inverter.
    pub producing: bool,
}

impl SolarView {
    pub fn new(inverter: &InverterReadings) -> Self {
        // trailing space keeps the power clear of the panel frame
        let mut power = format_value(inverter.active_power, WATTS);
        let _ = power.push(' ');

        Self {
            power,
            daily_yield: format_value(inverter.daily_yield_kwh, KILOWATT_HOURS),
            producing: inverter.active_power > 0.0,
        }
    }

    pub fn draw<D, I>(&self, icons: &I, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        I: IconSet,
    {
        let origin = BODY_ORIGIN + SOLAR_OFFSET;
        icons.draw_icon(Icon::Solar, origin, display)?;

        let right = origin.x + SOLAR_SIZE.width as i32;
        Label::new(
            &self.power,
            Point::new(right, origin.y + SOLAR_POWER_Y_PX),
            TextSize::Large,
        )
        .with_alignment(Alignment::Right)
        .draw(display)?;
        Label::new(
            &self.daily_yield,
            Point::new(right, origin.y + SOLAR_YIELD_Y_PX),
            TextSize::Large,
        )
        .with_alignment(Alignment::Right)
        .draw(display)?;

        let arrow = BODY_ORIGIN + SOLAR_ARROW_OFFSET;
        icons.draw_icon(Icon::LineUpDown, arrow, display)?;
        if self.producing {
            icons.draw_icon(Icon::ArrowDown, arrow + SOLAR_ARROW_HEAD_OFFSET, display)?;
        }

        Ok(())
    }
}
