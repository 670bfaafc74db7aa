//! Power flow links between the diagram symbols
//!
//! Every link is a horizontal line with an optional value above it and
//! either a direction arrow or "OFF" below it.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Alignment;

use crate::snapshot::{BoilerReadings, GridReadings, InverterReadings};
use crate::ui::components::{Label, TextSize};
use crate::ui::core::Drawable;
use crate::ui::format::{Token, WATTS, format_value};
use crate::ui::icons::{Icon, IconSet};

use super::constants::{
    BODY_ORIGIN, BOILER_LINK_OFFSET, BOILER_OFF_OFFSET, GRID_LABEL_OFFSET, GRID_LINK_OFFSET,
    INVERTER_LINK_OFFSET, INVERTER_OFF_OFFSET, LINK_ARROW_OFFSET, LINK_LABEL_CENTRE,
    LINK_LINE_Y_PX,
};

const OFF: &str = "OFF";

/// Direction of the net exchange with the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDirection {
    /// Drawn from the grid into the house; arrow points left.
    Import,
    /// Fed into the grid; arrow points right.
    Export,
}

impl GridDirection {
    /// Positive meter power is export; zero and below is import.
    pub fn from_meter_power(power: f64) -> Self {
        if power > 0.0 {
            GridDirection::Export
        } else {
            GridDirection::Import
        }
    }

    fn arrow(self) -> Icon {
        match self {
            GridDirection::Import => Icon::ArrowLeft,
            GridDirection::Export => Icon::ArrowRight,
        }
    }
}

fn draw_link_line<D, I>(origin: Point, icons: &I, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    I: IconSet,
{
    icons.draw_icon(
        Icon::LineLeftRight,
        origin + Point::new(0, LINK_LINE_Y_PX),
        display,
    )
}

fn draw_centred_value<D>(value: &str, origin: Point, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    Label::new(value, origin + LINK_LABEL_CENTRE, TextSize::Large)
        .with_alignment(Alignment::Center)
        .draw(display)
}

/// Boiler ↔ inverter: heating power, arrow towards the boiler while it heats.
#[derive(Debug, Clone, PartialEq)]
pub struct BoilerLinkView {
    pub power: Token,
    pub heating: bool,
}

impl BoilerLinkView {
    pub fn new(boiler: &BoilerReadings) -> Self {
        Self {
            power: format_value(boiler.power, WATTS),
            heating: boiler.is_heating(),
        }
    }

    pub fn draw<D, I>(&self, icons: &I, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        I: IconSet,
    {
        let origin = BODY_ORIGIN + BOILER_LINK_OFFSET;
        draw_centred_value(&self.power, origin, display)?;
        draw_link_line(origin, icons, display)?;

        if self.heating {
            icons.draw_icon(Icon::ArrowLeft, origin + LINK_ARROW_OFFSET, display)
        } else {
            Label::new(OFF, origin + BOILER_OFF_OFFSET, TextSize::Large).draw(display)
        }
    }
}

/// Inverter → house: metered inverter output, or "OFF" when nothing flows.
#[derive(Debug, Clone, PartialEq)]
pub struct InverterFlowView {
    pub power: Option<Token>,
}

impl InverterFlowView {
    pub fn new(inverter: &InverterReadings) -> Self {
        let power = inverter.metered_output_power;
        Self {
            power: (power > 0.0).then(|| format_value(power, WATTS)),
        }
    }

    pub fn draw<D, I>(&self, icons: &I, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        I: IconSet,
    {
        let origin = BODY_ORIGIN + INVERTER_LINK_OFFSET;
        draw_link_line(origin, icons, display)?;

        match &self.power {
            Some(power) => {
                draw_centred_value(power, origin, display)?;
                icons.draw_icon(Icon::ArrowRight, origin + LINK_ARROW_OFFSET, display)
            }
            None => Label::new(OFF, origin + INVERTER_OFF_OFFSET, TextSize::Large).draw(display),
        }
    }
}

/// House ↔ grid: unsigned exchange with an arrow for its direction.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFlowView {
    pub direction: GridDirection,
    pub label: Token,
}

impl GridFlowView {
    pub fn new(grid: &GridReadings) -> Self {
        Self {
            direction: GridDirection::from_meter_power(grid.meter_power),
            label: format_value(grid.meter_power.abs(), WATTS),
        }
    }

    pub fn draw<D, I>(&self, icons: &I, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        I: IconSet,
    {
        let origin = BODY_ORIGIN + GRID_LINK_OFFSET;
        draw_link_line(origin, icons, display)?;
        Label::new(&self.label, origin + GRID_LABEL_OFFSET, TextSize::Large).draw(display)?;
        icons.draw_icon(self.direction.arrow(), origin + LINK_ARROW_OFFSET, display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_import_keeps_magnitude() {
        let view = GridFlowView::new(&GridReadings {
            meter_power: -327.0,
            ..Default::default()
        });
        assert_eq!(view.direction, GridDirection::Import);
        assert_eq!(view.label.as_str(), "327W");
    }

    #[test]
    fn test_grid_export() {
        let view = GridFlowView::new(&GridReadings {
            meter_power: 1250.4,
            ..Default::default()
        });
        assert_eq!(view.direction, GridDirection::Export);
        assert_eq!(view.label.as_str(), "1250W");
    }

    #[test]
    fn test_zero_exchange_is_import() {
        assert_eq!(GridDirection::from_meter_power(0.0), GridDirection::Import);
    }

    #[test]
    fn test_inverter_flow_off() {
        let idle = InverterFlowView::new(&InverterReadings::default());
        assert_eq!(idle.power, None);

        let running = InverterFlowView::new(&InverterReadings {
            metered_output_power: 194.0,
            ..Default::default()
        });
        assert_eq!(running.power.as_deref(), Some("194W"));
    }

    #[test]
    fn test_boiler_link() {
        let idle = BoilerLinkView::new(&BoilerReadings::default());
        assert!(!idle.heating);
        assert_eq!(idle.power.as_str(), "0W");

        let heating = BoilerLinkView::new(&BoilerReadings {
            status: 1.0,
            power: 1800.0,
            water_temperature: 52.0,
        });
        assert!(heating.heating);
        assert_eq!(heating.power.as_str(), "1800W");
    }
}
