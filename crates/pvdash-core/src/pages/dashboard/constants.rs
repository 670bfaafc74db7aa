//! Fixed geometry of the dashboard on the 960x540 canvas
//!
//! Offsets of body panels are relative to [`BODY_ORIGIN`]; everything else
//! is absolute.

use embedded_graphics::prelude::{Point, Size};

// ============================================================================
// Regions
// ============================================================================

pub const HEAD_ORIGIN: Point = Point::new(14, 0);
pub const HEAD_SIZE: Size = Size::new(932, 33);

pub const BODY_ORIGIN: Point = Point::new(14, 34);
pub const BODY_SIZE: Size = Size::new(932, 495);

// ============================================================================
// Head layout (relative to HEAD_ORIGIN)
// ============================================================================

pub const HEAD_TEXT_Y_PX: i32 = 13;
pub const VERSION_X_PX: i32 = 5;

/// Reference point of the signal indicator, right-anchored.
pub const SIGNAL_FROM_RIGHT_PX: i32 = 130;
pub const SIGNAL_Y_PX: i32 = 26;
/// The quality label ends 2 px left of the reference and sits 14 px above it.
pub const SIGNAL_LABEL_OFFSET: Point = Point::new(-2, -14);
/// The arcs are centred 12 px right of the reference.
pub const SIGNAL_ARC_OFFSET_X_PX: i32 = 12;

pub const BATTERY_FROM_RIGHT_PX: i32 = 49;
pub const BATTERY_Y_PX: i32 = 11;
pub const BATTERY_LABEL_OFFSET: Point = Point::new(-2, 1);

// ============================================================================
// Body panels (relative to BODY_ORIGIN)
// ============================================================================

pub const PV_INFO_OFFSET: Point = Point::new(10, 10);
pub const PV_INFO_SIZE: Size = Size::new(250, 166);
pub const PV_LABEL_X_PX: i32 = 5;
pub const PV_VALUE_X_PX: i32 = 170;
pub const PV_VALUE_WIDTH: usize = 4;
/// Rows: PV1 voltage, PV1 current, PV2 voltage, PV2 current, power peak.
pub const PV_ROW_Y_PX: [i32; 5] = [14, 34, 64, 84, 114];
pub const PV_STATE_Y_PX: i32 = 134;
/// Small icon inset from the bottom right corner.
pub const PV_ICON_INSET_PX: i32 = 34;

pub const SOLAR_OFFSET: Point = Point::new(276, 30);
pub const SOLAR_SIZE: Size = Size::new(150, 150);
pub const SOLAR_POWER_Y_PX: i32 = 13;
pub const SOLAR_YIELD_Y_PX: i32 = 45;

pub const SOLAR_ARROW_OFFSET: Point = Point::new(346, 140);
pub const SOLAR_ARROW_HEAD_OFFSET: Point = Point::new(14, 5);

pub const GRID_INFO_OFFSET: Point = Point::new(436, 10);
pub const GRID_INFO_SIZE: Size = Size::new(486, 166);
pub const GRID_COLUMN_X_PX: [i32; 4] = [10, 120, 230, 340];
pub const GRID_COLUMN_Y_PX: i32 = 10;
pub const GRID_COLUMN_SIZE: Size = Size::new(100, 146);
pub const GRID_TITLE_OFFSET: Point = Point::new(4, 4);
pub const GRID_VALUE_X_PX: i32 = 5;
/// Rows relative to the panel top: voltage, current, power.
pub const GRID_VALUE_Y_PX: [i32; 3] = [52, 80, 108];
pub const GRID_VALUE_WIDTH: usize = 5;
pub const GRID_ICON_INSET_PX: i32 = 40;

pub const BOILER_OFFSET: Point = Point::new(96, 196);
pub const BOILER_SIZE: Size = Size::new(60, 100);
/// The tank icon starts left of the panel.
pub const BOILER_ICON_X_PX: i32 = -30;
/// Rows of an empty and a full tank, relative to the panel top.
pub const BOILER_EMPTY_ROW_PX: i32 = 78;
pub const BOILER_FULL_ROW_PX: i32 = 2;
pub const BOILER_FILL_X_PX: (i32, i32) = (9, 64);
pub const BOILER_LABEL_X_PX: i32 = 38;
pub const BOILER_LABEL_MIDDLE_Y_PX: i32 = 42;
pub const BOILER_LABEL_BOTTOM_Y_PX: i32 = 70;
/// Water temperature that fills the tank completely.
pub const BOILER_FULL_TEMPERATURE_C: f64 = 75.0;
pub const BOILER_LABEL_FLOAT_BELOW_PCT: u8 = 40;
pub const BOILER_LABEL_INVERT_ABOVE_PCT: u8 = 65;

pub const BOILER_LINK_OFFSET: Point = Point::new(171, 196);
pub const INVERTER_OFFSET: Point = Point::new(296, 196);
pub const INVERTER_LINK_OFFSET: Point = Point::new(411, 196);
pub const HOUSE_OFFSET: Point = Point::new(536, 196);
pub const GRID_LINK_OFFSET: Point = Point::new(651, 196);
pub const GRID_OFFSET: Point = Point::new(776, 196);

// ============================================================================
// Flow links (relative to the link origin)
// ============================================================================

pub const LINK_WIDTH_PX: i32 = 110;
pub const LINK_LINE_Y_PX: i32 = 48;
pub const LINK_ARROW_OFFSET: Point = Point::new(16, 68);
/// Centre of a power label above the line.
pub const LINK_LABEL_CENTRE: Point = Point::new(LINK_WIDTH_PX / 2 - 5, 13);
pub const BOILER_OFF_OFFSET: Point = Point::new(26, 68);
pub const INVERTER_OFF_OFFSET: Point = Point::new(35, 13);
pub const GRID_LABEL_OFFSET: Point = Point::new(5, 13);

// ============================================================================
// Info band
// ============================================================================

pub const INFO_BAND_OFFSET: Point = Point::new(10, 316);
pub const INFO_BAND_SIZE: Size = Size::new(912, 168);
/// The consumption box takes the bottom of the band below the graphs.
pub const CONSUMPTION_BOX_Y_PX: i32 = 125;
pub const CONSUMPTION_TEXT_OFFSET: Point = Point::new(15, 140);

/// Graph origins, absolute.
pub const INFO_GRAPH_ORIGINS: [Point; 4] = [
    Point::new(15, 350),
    Point::new(247, 350),
    Point::new(479, 350),
    Point::new(711, 350),
];
pub const INFO_GRAPH_SIZE: Size = Size::new(232, 122);

/// Last forecast day / history slot plotted.
pub const INFO_GRAPH_X_MAX: i32 = 7;
pub const TEMPERATURE_RANGE_C: (f32, f32) = (-20.0, 30.0);
pub const CLOUDS_RANGE_PCT: (f32, f32) = (0.0, 100.0);
/// Lowest upper bound of an auto-scaled graph.
pub const AUTO_SCALE_FLOOR: f32 = 1.0;
