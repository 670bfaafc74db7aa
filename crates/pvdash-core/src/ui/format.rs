//! Fixed-width numeric tokens for the monospace panels
//!
//! Values are rendered with a fixed number of decimals and a unit suffix,
//! then left-padded with spaces so columns of readings line up on their
//! right edge. Everything here is pure and allocation-free.

use heapless::String;

/// Capacity of a formatted token, unit and padding included.
pub const MAX_TOKEN_LENGTH: usize = 32;

/// A formatted value ready to be drawn.
pub type Token = String<MAX_TOKEN_LENGTH>;

/// Decimal precision plus unit suffix, e.g. `{precision: 1, unit: "A"}` → `1.5A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub precision: usize,
    pub unit: &'static str,
}

impl NumberFormat {
    pub const fn new(precision: usize, unit: &'static str) -> Self {
        Self { precision, unit }
    }
}

pub const VOLTS: NumberFormat = NumberFormat::new(0, "V");
pub const WATTS: NumberFormat = NumberFormat::new(0, "W");
pub const AMPS_COARSE: NumberFormat = NumberFormat::new(1, "A");
pub const AMPS_FINE: NumberFormat = NumberFormat::new(2, "A");
pub const KILOWATT_HOURS: NumberFormat = NumberFormat::new(1, "kWh");
pub const CELSIUS: NumberFormat = NumberFormat::new(0, "C");

/// Format `value` with the given precision and unit, without padding.
///
/// Output that would not fit in [`MAX_TOKEN_LENGTH`] is truncated.
pub fn format_value(value: f64, format: NumberFormat) -> Token {
    let mut s = Token::new();
    let _ = core::fmt::write(
        &mut s,
        format_args!("{:.*}{}", format.precision, value, format.unit),
    );
    s
}

/// Format `value` and left-pad it with spaces to at least `width` characters.
///
/// Tokens already wider than `width` are returned unchanged.
pub fn fixed_width(value: f64, format: NumberFormat, width: usize) -> Token {
    let body = format_value(value, format);
    let mut padded = Token::new();
    for _ in body.len()..width.min(MAX_TOKEN_LENGTH) {
        let _ = padded.push(' ');
    }
    let _ = padded.push_str(&body);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_precision_and_unit() {
        assert_eq!(format_value(232.11, VOLTS).as_str(), "232V");
        assert_eq!(format_value(1.53, AMPS_COARSE).as_str(), "1.5A");
        assert_eq!(format_value(0.39, AMPS_FINE).as_str(), "0.39A");
        assert_eq!(format_value(0.12, KILOWATT_HOURS).as_str(), "0.1kWh");
        assert_eq!(format_value(21.1, CELSIUS).as_str(), "21C");
    }

    #[test]
    fn test_fixed_width_right_aligns() {
        assert_eq!(fixed_width(232.11, VOLTS, 5).as_str(), " 232V");
        assert_eq!(fixed_width(39.81, WATTS, 5).as_str(), "  40W");
        assert_eq!(fixed_width(2.73, AMPS_COARSE, 5).as_str(), " 2.7A");
    }

    #[test]
    fn test_fixed_width_never_truncates_value() {
        assert_eq!(fixed_width(0.39, AMPS_FINE, 4).as_str(), "0.39A");
        assert_eq!(fixed_width(12345.0, WATTS, 3).as_str(), "12345W");
    }

    #[test]
    fn test_fixed_width_zero_width() {
        assert_eq!(fixed_width(-5.0, WATTS, 0).as_str(), "-5W");
    }
}
