//! Viewport and coordinate transformation utilities
//!
//! Handles transformation between data space (day index, reading) and
//! screen space (pixel coordinates inside the plot box).

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::constants::MAX_POINTS;
use super::{GraphError, GraphResult};

/// Data space bounds: integer x-domain, real y-domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    /// First x index
    pub x_min: i32,
    /// Last x index, inclusive
    pub x_max: i32,
    /// Value mapped to the bottom row of the plot box
    pub y_min: f32,
    /// Value mapped to the top row of the plot box
    pub y_max: f32,
}

impl DataBounds {
    /// Create new data bounds
    pub const fn new(x_min: i32, x_max: i32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Reject zero-width, inverted or non-finite domains.
    pub fn validate(&self) -> GraphResult<()> {
        if self.x_max <= self.x_min
            || !self.y_min.is_finite()
            || !self.y_max.is_finite()
            || self.y_max <= self.y_min
        {
            return Err(GraphError::InvalidDataBounds);
        }
        if self.point_count() > MAX_POINTS {
            return Err(GraphError::DomainTooWide { max: MAX_POINTS });
        }
        Ok(())
    }

    /// Number of x steps plotted, both ends included
    pub fn point_count(&self) -> usize {
        (i64::from(self.x_max) - i64::from(self.x_min) + 1).max(0) as usize
    }

    /// Get the X range (width)
    pub fn x_range(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// Get the Y range (height)
    pub fn y_range(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Whether zero lies strictly inside the y-domain
    pub fn straddles_zero(&self) -> bool {
        self.y_min < 0.0 && self.y_max > 0.0
    }
}

/// Viewport for transforming data coordinates to screen coordinates
///
/// Only constructible from validated bounds, so the mapping never divides
/// by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    data_bounds: DataBounds,
    plot_area: Rectangle,
}

impl Viewport {
    pub fn new(data_bounds: DataBounds, plot_area: Rectangle) -> GraphResult<Self> {
        data_bounds.validate()?;
        Ok(Self {
            data_bounds,
            plot_area,
        })
    }

    pub fn plot_area(&self) -> Rectangle {
        self.plot_area
    }

    pub fn data_bounds(&self) -> &DataBounds {
        &self.data_bounds
    }

    /// Screen column of x index `x`; `x_min` is the left edge, `x_max` the right edge.
    pub fn screen_x(&self, x: i32) -> i32 {
        let bounds = &self.data_bounds;
        let span = self.plot_area.size.width.saturating_sub(1) as f32;
        let t = (x.clamp(bounds.x_min, bounds.x_max) - bounds.x_min) as f32
            / bounds.x_range() as f32;
        self.plot_area.top_left.x + round_to_i32(t * span)
    }

    /// Screen row of value `y`, clamped into the plot box.
    ///
    /// `y_max` lands on the top edge row and `y_min` on the bottom edge row.
    pub fn screen_y(&self, y: f32) -> i32 {
        let bounds = &self.data_bounds;
        let span = self.plot_area.size.height.saturating_sub(1) as f32;
        let value = if y.is_nan() {
            bounds.y_min
        } else {
            y.clamp(bounds.y_min, bounds.y_max)
        };
        let t = (bounds.y_max - value) / bounds.y_range();
        self.plot_area.top_left.y + round_to_i32(t * span)
    }

    /// Transform a data point to screen coordinates
    pub fn map(&self, x: i32, y: f32) -> Point {
        Point::new(self.screen_x(x), self.screen_y(y))
    }
}

/// Round half away from zero.
pub(crate) fn round_to_i32(v: f32) -> i32 {
    if v >= 0.0 {
        (v + 0.5) as i32
    } else {
        (v - 0.5) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(y_min: f32, y_max: f32) -> Viewport {
        let area = Rectangle::new(Point::new(10, 20), Size::new(100, 50));
        Viewport::new(DataBounds::new(0, 7, y_min, y_max), area).unwrap()
    }

    #[test]
    fn test_extremes_map_to_edge_rows() {
        let vp = viewport(0.0, 100.0);
        assert_eq!(vp.map(0, 100.0), Point::new(10, 20));
        assert_eq!(vp.map(7, 0.0), Point::new(109, 69));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let vp = viewport(0.0, 100.0);
        assert_eq!(vp.screen_y(250.0), 20);
        assert_eq!(vp.screen_y(-40.0), 69);
        assert_eq!(vp.screen_y(f32::NAN), 69);
        assert_eq!(vp.screen_x(12), 109);
    }

    #[test]
    fn test_midpoint_mapping() {
        let vp = viewport(-20.0, 30.0);
        // 0 is 30/50 of the way down a 49 px span
        assert_eq!(vp.screen_y(0.0), 20 + 29);
        assert_eq!(vp.screen_y(5.0), 20 + 25);
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let area = Rectangle::new(Point::zero(), Size::new(100, 50));
        for bounds in [
            DataBounds::new(0, 0, 0.0, 10.0),
            DataBounds::new(3, 1, 0.0, 10.0),
            DataBounds::new(0, 7, 5.0, 5.0),
            DataBounds::new(0, 7, 10.0, 0.0),
            DataBounds::new(0, 7, 0.0, f32::INFINITY),
            DataBounds::new(0, 7, f32::NAN, 1.0),
        ] {
            assert_eq!(
                Viewport::new(bounds, area),
                Err(GraphError::InvalidDataBounds)
            );
        }
    }

    #[test]
    fn test_domain_too_wide() {
        let area = Rectangle::new(Point::zero(), Size::new(100, 50));
        let bounds = DataBounds::new(0, MAX_POINTS as i32, 0.0, 1.0);
        assert_eq!(
            Viewport::new(bounds, area),
            Err(GraphError::DomainTooWide { max: MAX_POINTS })
        );
    }

    #[test]
    fn test_straddles_zero() {
        assert!(DataBounds::new(0, 7, -20.0, 30.0).straddles_zero());
        assert!(!DataBounds::new(0, 7, 0.0, 100.0).straddles_zero());
    }
}
