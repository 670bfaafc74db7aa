//! Graph layout constants

/// Maximum number of series sharing one graph.
pub const MAX_SERIES: usize = 2;

/// Maximum number of points per series (x_max - x_min + 1).
pub const MAX_POINTS: usize = 32;

/// Maximum length for axis labels.
pub const MAX_AXIS_LABEL_LENGTH: usize = 12;

/// Title baseline offset from the graph top.
pub const TITLE_OFFSET_Y_PX: i32 = 10;

/// Plot box offset from the graph top.
pub const PLOT_OFFSET_Y_PX: i32 = 35;

/// Space below the plot box reserved for tick labels.
pub const PLOT_BOTTOM_MARGIN_PX: i32 = 20;

/// Gap between the graph edge, the y labels and the plot box.
pub const LABEL_MARGIN_PX: i32 = 5;

/// Fixed part of the y label column width.
pub const LABEL_COLUMN_BASE_PX: i32 = 5;

/// Y label column width per character, in tenths of a pixel.
pub const LABEL_COLUMN_PER_CHAR_DECI_PX: i32 = 35;

/// Horizontal space consumed besides the plot box and label column.
pub const PLOT_HORIZONTAL_MARGIN_PX: i32 = 20;

/// Tick labels sit this far below the plot box.
pub const TICK_LABEL_OFFSET_PX: i32 = 5;

/// Offset of the "0" label left of the plot box.
pub const ZERO_LABEL_OFFSET_PX: i32 = 20;

/// Diameter of a plotted point.
pub const POINT_DIAMETER_PX: u32 = 5;

/// Length of one dash of the zero line.
pub const ZERO_DASH_LENGTH_PX: i32 = 5;

/// Distance between the starts of consecutive dashes.
pub const ZERO_DASH_PERIOD_PX: i32 = 10;
