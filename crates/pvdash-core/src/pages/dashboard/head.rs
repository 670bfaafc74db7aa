//! Header row: version, refresh time, Wi-Fi quality and battery level

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;
use heapless::String;

use crate::snapshot::DeviceStatus;
use crate::ui::components::{BatteryGauge, Label, SignalIndicator, TextSize};
use crate::ui::core::{Drawable, Timestamp};

use super::constants::{
    BATTERY_FROM_RIGHT_PX, BATTERY_LABEL_OFFSET, BATTERY_Y_PX, HEAD_ORIGIN, HEAD_SIZE,
    HEAD_TEXT_Y_PX, SIGNAL_ARC_OFFSET_X_PX, SIGNAL_FROM_RIGHT_PX, SIGNAL_LABEL_OFFSET,
    SIGNAL_Y_PX, VERSION_X_PX,
};

/// What the header shows for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadView<'a> {
    pub version: &'a str,
    pub updated: String<32>,
    pub wifi_quality: u8,
    pub battery_pct: u8,
}

impl<'a> HeadView<'a> {
    pub fn new(version: &'a str, updated: Timestamp, device: &DeviceStatus) -> Self {
        let mut text = String::new();
        let _ = core::fmt::write(&mut text, format_args!("Updated {}", updated));

        Self {
            version,
            updated: text,
            wifi_quality: device.wifi_quality(),
            battery_pct: device.battery_capacity_pct.min(100),
        }
    }

    fn right_edge(&self) -> i32 {
        HEAD_ORIGIN.x + HEAD_SIZE.width as i32
    }
}

impl Drawable for HeadView<'_> {
    fn draw<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        let text_y = HEAD_ORIGIN.y + HEAD_TEXT_Y_PX;

        Label::new(
            self.version,
            Point::new(HEAD_ORIGIN.x + VERSION_X_PX, text_y),
            TextSize::Medium,
        )
        .draw(display)?;

        Label::new(
            &self.updated,
            Point::new(HEAD_ORIGIN.x + HEAD_SIZE.width as i32 / 2, text_y),
            TextSize::Medium,
        )
        .with_alignment(Alignment::Center)
        .draw(display)?;

        let signal = Point::new(self.right_edge() - SIGNAL_FROM_RIGHT_PX, SIGNAL_Y_PX);
        let mut quality: String<8> = String::new();
        let _ = core::fmt::write(&mut quality, format_args!("{}%", self.wifi_quality));
        Label::new(&quality, signal + SIGNAL_LABEL_OFFSET, TextSize::Small)
            .with_alignment(Alignment::Right)
            .draw(display)?;
        SignalIndicator::new(
            signal + Point::new(SIGNAL_ARC_OFFSET_X_PX, 0),
            self.wifi_quality,
        )
        .draw(display)?;

        let battery = Point::new(self.right_edge() - BATTERY_FROM_RIGHT_PX, BATTERY_Y_PX);
        let mut capacity: String<8> = String::new();
        let _ = core::fmt::write(&mut capacity, format_args!("{}%", self.battery_pct));
        Label::new(&capacity, battery + BATTERY_LABEL_OFFSET, TextSize::Small)
            .with_alignment(Alignment::Right)
            .draw(display)?;
        BatteryGauge::new(battery, self.battery_pct).draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(HEAD_ORIGIN, HEAD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_view() {
        let device = DeviceStatus {
            wifi_rssi_dbm: -72,
            battery_capacity_pct: 87,
            battery_voltage: 4.05,
        };
        let view = HeadView::new("Version 1.0a", Timestamp::new(2024, 11, 2, 14, 30), &device);

        assert_eq!(view.updated.as_str(), "Updated 02.11.2024 14:30");
        assert_eq!(view.wifi_quality, 56);
        assert_eq!(view.battery_pct, 87);
    }
}
