//! Dashboard UI primitives for the 960x540 grayscale e-paper panel
//!
//! This module provides:
//! - The core drawable trait and header timestamp
//! - Ink/paper styling and the three text sizes
//! - Fixed-width number formatting for monospace columns
//! - Components: labels, arcs, the signal indicator, the battery gauge and graphs
//! - The icon set used by the energy flow diagram

pub mod components;
pub mod core;
pub mod format;
pub mod icons;
pub mod styling;

/// Panel width in pixels.
pub const DISPLAY_WIDTH_PX: u32 = 960;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT_PX: u32 = 540;

// Re-export commonly used items
pub use self::core::{Drawable, Timestamp};
pub use components::{BatteryGauge, Graph, Label, SignalIndicator, TextSize};
pub use format::{NumberFormat, fixed_width};
pub use icons::{BitmapIcons, Icon, IconSet, OutlineIcons};
pub use styling::{INK, PAPER};
