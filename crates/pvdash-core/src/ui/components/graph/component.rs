//! Main graph component with Drawable trait implementation
//!
//! The Graph component owns the layout of title, labels and plot box, and
//! borrows the series it plots from the snapshot.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Alignment;

use crate::ui::components::text::{Label, TextSize};
use crate::ui::core::Drawable;
use crate::ui::styling::INK;

use super::axis::{
    AxisLabel, draw_x_labels, draw_y_labels, draw_zero_label, format_bound, label_column_width,
};
use super::constants::{
    LABEL_COLUMN_BASE_PX, LABEL_MARGIN_PX, MAX_POINTS, MAX_SERIES, PLOT_BOTTOM_MARGIN_PX,
    PLOT_HORIZONTAL_MARGIN_PX, PLOT_OFFSET_Y_PX, POINT_DIAMETER_PX, TITLE_OFFSET_Y_PX,
};
use super::grid::{draw_zero_line, zero_line_row};
use super::viewport::{DataBounds, Viewport};
use super::{GraphError, GraphResult};

/// Auto-scaled line/point graph
///
/// Series are plain slices indexed from `x_min`: element `i` is drawn at
/// `x_min + i`. Elements past `x_max` are ignored and a shorter slice simply
/// ends the line early.
#[derive(Debug, Clone)]
pub struct Graph<'a> {
    title: &'a str,
    bounds: Rectangle,
    viewport: Viewport,
    y_min_label: AxisLabel,
    y_max_label: AxisLabel,
    series: heapless::Vec<&'a [f32], MAX_SERIES>,
}

impl<'a> Graph<'a> {
    /// Build a graph filling `bounds`.
    ///
    /// Fails with [`GraphError::InvalidDataBounds`] if either domain is
    /// empty, inverted or non-finite.
    pub fn new(title: &'a str, bounds: Rectangle, data_bounds: DataBounds) -> GraphResult<Self> {
        data_bounds.validate()?;

        let y_min_label = format_bound(data_bounds.y_min);
        let y_max_label = format_bound(data_bounds.y_max);
        let label_width = label_column_width(&y_min_label, &y_max_label);
        let viewport = Viewport::new(data_bounds, plot_area_for(bounds, label_width))?;

        Ok(Self {
            title,
            bounds,
            viewport,
            y_min_label,
            y_max_label,
            series: heapless::Vec::new(),
        })
    }

    /// Add a series; all series share the graph's axes.
    pub fn add_series(&mut self, values: &'a [f32]) -> GraphResult<()> {
        self.series
            .push(values)
            .map_err(|_| GraphError::SeriesCapacityExceeded { max: MAX_SERIES })
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn plot_area(&self) -> Rectangle {
        self.viewport.plot_area()
    }

    /// Row of the dashed zero line, or `None` when the domain does not cross zero.
    pub fn zero_line_y(&self) -> Option<i32> {
        zero_line_row(&self.viewport)
    }

    /// Screen positions of `values`, one per x step.
    pub fn plot_points(&self, values: &[f32]) -> heapless::Vec<Point, MAX_POINTS> {
        let bounds = self.viewport.data_bounds();
        let mut points = heapless::Vec::new();
        for (x, value) in (bounds.x_min..=bounds.x_max).zip(values.iter()) {
            if points.push(self.viewport.map(x, *value)).is_err() {
                break;
            }
        }
        points
    }

    fn draw_series<D: DrawTarget<Color = Gray4>>(
        &self,
        values: &[f32],
        display: &mut D,
    ) -> Result<(), D::Error> {
        let point_style = PrimitiveStyle::with_fill(INK);
        let line_style = PrimitiveStyle::with_stroke(INK, 1);
        let mut previous: Option<Point> = None;

        for point in self.plot_points(values) {
            Circle::with_center(point, POINT_DIAMETER_PX)
                .into_styled(point_style)
                .draw(display)?;
            if let Some(prev) = previous {
                Line::new(prev, point)
                    .into_styled(line_style)
                    .draw(display)?;
            }
            previous = Some(point);
        }

        Ok(())
    }
}

impl Drawable for Graph<'_> {
    fn draw<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        draw_title(self.title, self.bounds, display)?;
        draw_y_labels(
            self.bounds.top_left.x,
            &self.y_min_label,
            &self.y_max_label,
            &self.viewport,
            display,
        )?;
        draw_x_labels(&self.viewport, display)?;

        self.plot_area()
            .into_styled(PrimitiveStyle::with_stroke(INK, 1))
            .draw(display)?;

        if let Some(row) = draw_zero_line(&self.viewport, display)? {
            draw_zero_label(row, &self.viewport, display)?;
        }

        for values in &self.series {
            self.draw_series(values, display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

/// Draw only the title and an empty plot box.
///
/// Stands in for a graph whose domain was rejected, so the band keeps its
/// shape.
pub fn draw_empty_graph<D: DrawTarget<Color = Gray4>>(
    title: &str,
    bounds: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    draw_title(title, bounds, display)?;
    plot_area_for(bounds, LABEL_COLUMN_BASE_PX)
        .into_styled(PrimitiveStyle::with_stroke(INK, 1))
        .draw(display)?;
    Ok(())
}

fn draw_title<D: DrawTarget<Color = Gray4>>(
    title: &str,
    bounds: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    let anchor = Point::new(
        bounds.top_left.x + bounds.size.width as i32 / 2,
        bounds.top_left.y + TITLE_OFFSET_Y_PX,
    );
    Label::new(title, anchor, TextSize::Medium)
        .with_alignment(Alignment::Center)
        .draw(display)
}

fn plot_area_for(bounds: Rectangle, label_width: i32) -> Rectangle {
    let top_left = Point::new(
        bounds.top_left.x + LABEL_MARGIN_PX + label_width + LABEL_MARGIN_PX,
        bounds.top_left.y + PLOT_OFFSET_Y_PX,
    );
    let width = (bounds.size.width as i32 - label_width - PLOT_HORIZONTAL_MARGIN_PX).max(1);
    let height = (bounds.size.height as i32 - PLOT_OFFSET_Y_PX - PLOT_BOTTOM_MARGIN_PX).max(1);
    Rectangle::new(top_left, Size::new(width as u32, height as u32))
}
