//! PV input block: string voltages and currents, peak power, inverter state

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::snapshot::InverterReadings;
use crate::ui::components::{Label, TextSize};
use crate::ui::core::Drawable;
use crate::ui::format::{AMPS_FINE, Token, VOLTS, WATTS, fixed_width};
use crate::ui::icons::{Icon, IconSet};
use crate::ui::styling::INK;

use super::constants::{
    BODY_ORIGIN, PV_ICON_INSET_PX, PV_INFO_OFFSET, PV_INFO_SIZE, PV_LABEL_X_PX, PV_ROW_Y_PX,
    PV_STATE_Y_PX, PV_VALUE_WIDTH, PV_VALUE_X_PX,
};

const ROW_TITLES: [&str; 5] = [
    "PV1 Voltage:",
    "PV1 Current:",
    "PV2 Voltage:",
    "PV2 Current:",
    "PV PowerPeak:",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PvInfoView<'a> {
    /// Formatted values, in the order of the row titles.
    pub values: [Token; 5],
    pub state: &'a str,
}

impl<'a> PvInfoView<'a> {
    pub fn new(inverter: &'a InverterReadings) -> Self {
        let [pv1, pv2] = inverter.pv;
        Self {
            values: [
                fixed_width(pv1.voltage, VOLTS, PV_VALUE_WIDTH),
                fixed_width(pv1.current, AMPS_FINE, PV_VALUE_WIDTH),
                fixed_width(pv2.voltage, VOLTS, PV_VALUE_WIDTH),
                fixed_width(pv2.current, AMPS_FINE, PV_VALUE_WIDTH),
                fixed_width(inverter.peak_power_today, WATTS, PV_VALUE_WIDTH),
            ],
            state: &inverter.state,
        }
    }

    pub fn draw<D, I>(&self, icons: &I, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        I: IconSet,
    {
        let area = Rectangle::new(BODY_ORIGIN + PV_INFO_OFFSET, PV_INFO_SIZE);
        let origin = area.top_left;
        area.into_styled(PrimitiveStyle::with_stroke(INK, 1))
            .draw(display)?;

        for ((title, value), y) in ROW_TITLES.iter().zip(&self.values).zip(PV_ROW_Y_PX) {
            Label::new(title, origin + Point::new(PV_LABEL_X_PX, y), TextSize::Medium)
                .draw(display)?;
            Label::new(value, origin + Point::new(PV_VALUE_X_PX, y), TextSize::Medium)
                .draw(display)?;
        }
        Label::new(
            self.state,
            origin + Point::new(PV_LABEL_X_PX, PV_STATE_Y_PX),
            TextSize::Medium,
        )
        .draw(display)?;

        let inset = Point::new(PV_ICON_INSET_PX, PV_ICON_INSET_PX);
        let bottom_right = origin + PV_INFO_SIZE;
        icons.draw_icon(Icon::SolarSmall, bottom_right - inset, display)
    }
}
