//! UI components library

pub mod arc;
pub mod gauge;
pub mod graph;
pub mod signal;
pub mod text;

pub use arc::{FULL_CIRCLE, arc_points, draw_arc};
pub use gauge::BatteryGauge;
pub use graph::{DataBounds, Graph, GraphError, GraphResult};
pub use signal::{SignalIndicator, signal_arc_radii};
pub use text::{Label, TextSize};
