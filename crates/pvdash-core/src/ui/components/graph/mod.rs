//! Auto-scaled line/point graphs for the info band
//!
//! A graph maps a small integer x-domain (forecast days, history slots) and
//! a caller-supplied y-domain onto a fixed rectangle. The layout inside the
//! rectangle is fixed: title on top, y-range labels on the left, one tick
//! label per x step below the plot box.
//!
//! - Up to [`constants::MAX_SERIES`] series share the same axes
//! - Values outside the y-domain are pinned to the plot box edge
//! - A dashed zero line is drawn when the y-domain straddles zero
//!
//! Domains are validated once, when the graph is built. A zero-width or
//! non-finite domain is rejected with [`GraphError::InvalidDataBounds`]
//! instead of producing undefined pixel math while drawing.
//!
//! # Examples
//!
//! ```ignore
//! let bounds = Rectangle::new(Point::new(479, 350), Size::new(232, 122));
//! let mut graph = Graph::new("Clouds (%)", bounds, DataBounds::new(0, 7, 0.0, 100.0))?;
//! graph.add_series(&forecast.clouds)?;
//! graph.draw(&mut frame)?;
//! ```

use thiserror_no_std::Error;

mod axis;
mod component;
pub mod constants;
mod grid;
pub mod viewport;

pub use component::{Graph, draw_empty_graph};
pub use grid::dashed_segments;
pub use viewport::{DataBounds, Viewport};

/// Error types for graph operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Series capacity exceeded
    #[error("Series capacity exceeded (max: {max})")]
    SeriesCapacityExceeded {
        /// Maximum allowed series count
        max: usize,
    },

    /// Invalid data bounds
    #[error("Invalid data bounds (min >= max or non-finite)")]
    InvalidDataBounds,

    /// The x-domain has more steps than a series can hold
    #[error("X domain too wide (max points: {max})")]
    DomainTooWide {
        /// Maximum points per series
        max: usize,
    },
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
