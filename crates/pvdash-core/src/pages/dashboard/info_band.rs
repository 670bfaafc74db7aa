//! Bottom band: consumption sentence and the four forecast/history graphs

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::{String, Vec};
use log::warn;

use crate::snapshot::{Consumption, TelemetrySnapshot};
use crate::ui::components::graph::constants::MAX_SERIES;
use crate::ui::components::graph::draw_empty_graph;
use crate::ui::components::text::MAX_LABEL_LENGTH;
use crate::ui::components::{DataBounds, Graph, GraphResult, Label, TextSize};
use crate::ui::core::Drawable;
use crate::ui::format::{NumberFormat, fixed_width};
use crate::ui::styling::INK;

use super::constants::{
    AUTO_SCALE_FLOOR, BODY_ORIGIN, CLOUDS_RANGE_PCT, CONSUMPTION_BOX_Y_PX,
    CONSUMPTION_TEXT_OFFSET, INFO_BAND_OFFSET, INFO_BAND_SIZE, INFO_GRAPH_ORIGINS,
    INFO_GRAPH_SIZE, INFO_GRAPH_X_MAX, TEMPERATURE_RANGE_C,
};

const GAS: NumberFormat = NumberFormat::new(2, "m3");
const WATER: NumberFormat = NumberFormat::new(0, "liters");
const ELECTRICITY: NumberFormat = NumberFormat::new(2, "kWh");
const CONSUMPTION_VALUE_WIDTH: usize = 3;

pub type Sentence = String<MAX_LABEL_LENGTH>;

/// "Consumption is 1.25m3 of Gas, 140liters of Water and 6.20kWh of power"
pub fn consumption_sentence(consumption: &Consumption) -> Sentence {
    let gas = fixed_width(consumption.gas_m3, GAS, CONSUMPTION_VALUE_WIDTH);
    let water = fixed_width(consumption.water_litres, WATER, CONSUMPTION_VALUE_WIDTH);
    let electricity = fixed_width(
        consumption.electricity_kwh,
        ELECTRICITY,
        CONSUMPTION_VALUE_WIDTH,
    );

    let mut sentence = Sentence::new();
    let _ = core::fmt::write(
        &mut sentence,
        format_args!(
            "Consumption is {} of Gas, {} of Water and {} of power",
            gas, water, electricity
        ),
    );
    sentence
}

/// Upper bound for a graph scaled to its running maximum.
///
/// Rounds up to a whole number and never goes below [`AUTO_SCALE_FLOOR`],
/// so an empty history still gets a usable domain.
pub fn auto_scale_max(running_max: f32) -> f32 {
    if !running_max.is_finite() {
        return AUTO_SCALE_FLOOR;
    }
    let fraction = running_max % 1.0;
    let ceiling = if fraction > 0.0 {
        running_max - fraction + 1.0
    } else {
        running_max - fraction
    };
    ceiling.max(AUTO_SCALE_FLOOR)
}

/// Everything one band graph needs before it is laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSpec<'a> {
    pub title: &'static str,
    pub y_range: (f32, f32),
    pub series: Vec<&'a [f32], MAX_SERIES>,
}

impl<'a> GraphSpec<'a> {
    fn new(title: &'static str, y_range: (f32, f32), series: &[&'a [f32]]) -> Self {
        let mut owned = Vec::new();
        for values in series.iter().take(MAX_SERIES) {
            let _ = owned.push(*values);
        }
        Self {
            title,
            y_range,
            series: owned,
        }
    }

    fn build(&self, bounds: Rectangle) -> GraphResult<Graph<'a>> {
        let (y_min, y_max) = self.y_range;
        let mut graph = Graph::new(
            self.title,
            bounds,
            DataBounds::new(0, INFO_GRAPH_X_MAX, y_min, y_max),
        )?;
        for values in &self.series {
            graph.add_series(values)?;
        }
        Ok(graph)
    }

    /// Draw the graph, or its empty frame if the domain is unusable.
    fn draw<D: DrawTarget<Color = Gray4>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let bounds = Rectangle::new(origin, INFO_GRAPH_SIZE);
        match self.build(bounds) {
            Ok(graph) => graph.draw(display),
            Err(err) => {
                warn!("Skipping {} graph: {}", self.title, err);
                draw_empty_graph(self.title, bounds, display)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoBandView<'a> {
    pub sentence: Sentence,
    /// Temperature, power consumption, clouds and yield, left to right.
    pub graphs: [GraphSpec<'a>; 4],
}

impl<'a> InfoBandView<'a> {
    pub fn new(snapshot: &'a TelemetrySnapshot) -> Self {
        let forecast = snapshot.forecast();
        let power = &snapshot.power_history;
        let yields = &snapshot.yield_history;

        Self {
            sentence: consumption_sentence(&snapshot.consumption),
            graphs: [
                GraphSpec::new(
                    "Temperature (C)",
                    TEMPERATURE_RANGE_C,
                    &[&forecast.max_temp[..], &forecast.min_temp[..]],
                ),
                GraphSpec::new(
                    "Power consumption",
                    (0.0, auto_scale_max(power.max())),
                    &[&power.values()[..]],
                ),
                GraphSpec::new("Clouds (%)", CLOUDS_RANGE_PCT, &[&forecast.clouds[..]]),
                GraphSpec::new(
                    "Yield (kWh)",
                    (0.0, auto_scale_max(yields.max())),
                    &[&yields.values()[..]],
                ),
            ],
        }
    }
}

impl Drawable for InfoBandView<'_> {
    fn draw<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        let origin = self.bounds().top_left;
        let sentence_box = Rectangle::new(
            origin + Point::new(0, CONSUMPTION_BOX_Y_PX),
            Size::new(
                INFO_BAND_SIZE.width,
                INFO_BAND_SIZE.height - CONSUMPTION_BOX_Y_PX as u32,
            ),
        );
        sentence_box
            .into_styled(PrimitiveStyle::with_stroke(INK, 1))
            .draw(display)?;
        Label::new(
            &self.sentence,
            origin + CONSUMPTION_TEXT_OFFSET,
            TextSize::Medium,
        )
        .draw(display)?;

        for (spec, graph_origin) in self.graphs.iter().zip(INFO_GRAPH_ORIGINS) {
            spec.draw(graph_origin, display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(BODY_ORIGIN + INFO_BAND_OFFSET, INFO_BAND_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::snapshot::Forecast;

    #[test]
    fn test_consumption_sentence() {
        let sentence = consumption_sentence(&Consumption {
            gas_m3: 1.254,
            water_litres: 140.0,
            electricity_kwh: 6.2,
            temperature_c: 12.0,
        });
        assert_eq!(
            sentence.as_str(),
            "Consumption is 1.25m3 of Gas, 140liters of Water and 6.20kWh of power"
        );
    }

    #[test]
    fn test_auto_scale_max() {
        assert_eq!(auto_scale_max(0.0), 1.0);
        assert_eq!(auto_scale_max(0.4), 1.0);
        assert_eq!(auto_scale_max(14.7), 15.0);
        assert_eq!(auto_scale_max(19.0), 19.0);
        assert_eq!(auto_scale_max(f32::NAN), 1.0);
        assert_eq!(auto_scale_max(3.0e9), 3.0e9);
        assert!(auto_scale_max(1.0e12) >= 1.0e12);
    }

    #[test]
    fn test_graph_specs() {
        let mut snapshot = TelemetrySnapshot::new();
        snapshot.power_history.record(2, 14.7).unwrap();
        let view = InfoBandView::new(&snapshot);

        let titles: [&str; 4] = view.graphs.each_ref().map(|g| g.title);
        assert_eq!(
            titles,
            ["Temperature (C)", "Power consumption", "Clouds (%)", "Yield (kWh)"]
        );
        assert_eq!(view.graphs[0].series.len(), 2);
        assert_eq!(view.graphs[0].y_range, (-20.0, 30.0));
        assert_eq!(view.graphs[1].y_range, (0.0, 15.0));
        assert_eq!(view.graphs[3].y_range, (0.0, 1.0));
    }

    #[test]
    fn test_degenerate_graph_draws_empty_frame() {
        let spec = GraphSpec::new("Yield (kWh)", (0.0, 0.0), &[]);
        let origin = INFO_GRAPH_ORIGINS[3];
        assert!(spec.build(Rectangle::new(origin, INFO_GRAPH_SIZE)).is_err());

        let mut frame = FrameBuffer::new();
        spec.draw(origin, &mut frame).unwrap();
        assert!(frame.inked_pixel_count() > 0);
    }

    #[test]
    fn test_band_draws_forecast() {
        let mut snapshot = TelemetrySnapshot::new();
        snapshot.set_forecast(Forecast {
            max_temp: [12.0; 8],
            min_temp: [-3.0; 8],
            clouds: [50.0; 8],
        });
        let view = InfoBandView::new(&snapshot);

        let mut frame = FrameBuffer::new();
        view.draw(&mut frame).unwrap();
        assert!(frame.inked_pixel_count() > 0);
    }
}
