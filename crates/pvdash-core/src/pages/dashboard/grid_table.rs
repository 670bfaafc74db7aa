//! Per-phase grid table: L1, L2, L3 and their totals

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::snapshot::{GridReadings, PhaseReading};
use crate::ui::components::{Label, TextSize};
use crate::ui::core::Drawable;
use crate::ui::format::{AMPS_COARSE, Token, VOLTS, WATTS, fixed_width};
use crate::ui::icons::{Icon, IconSet};
use crate::ui::styling::INK;

use super::constants::{
    BODY_ORIGIN, GRID_COLUMN_SIZE, GRID_COLUMN_X_PX, GRID_COLUMN_Y_PX, GRID_ICON_INSET_PX,
    GRID_INFO_OFFSET, GRID_INFO_SIZE, GRID_TITLE_OFFSET, GRID_VALUE_WIDTH, GRID_VALUE_X_PX,
    GRID_VALUE_Y_PX,
};

const COLUMN_TITLES: [&str; 4] = ["L1", "L2", "L3", "TOTAL"];

/// One column of the table: title plus voltage, current and power.
#[derive(Debug, Clone, PartialEq)]
pub struct GridColumn {
    pub title: &'static str,
    pub values: [Token; 3],
}

impl GridColumn {
    fn new(title: &'static str, reading: PhaseReading) -> Self {
        Self {
            title,
            values: [
                fixed_width(reading.voltage, VOLTS, GRID_VALUE_WIDTH),
                fixed_width(reading.current, AMPS_COARSE, GRID_VALUE_WIDTH),
                fixed_width(reading.power, WATTS, GRID_VALUE_WIDTH),
            ],
        }
    }

    /// Title in the medium font; the values below use the large one.
    fn title_label(&self, column_top_left: Point) -> Label {
        Label::new(
            self.title,
            column_top_left + GRID_TITLE_OFFSET,
            TextSize::Medium,
        )
    }
}

/// The three phases followed by the derived total.
pub fn grid_columns(grid: &GridReadings) -> [GridColumn; 4] {
    let [l1, l2, l3] = grid.phases;
    let readings = [l1, l2, l3, grid.total()];
    core::array::from_fn(|i| GridColumn::new(COLUMN_TITLES[i], readings[i]))
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridTableView {
    pub columns: [GridColumn; 4],
}

impl GridTableView {
    pub fn new(grid: &GridReadings) -> Self {
        Self {
            columns: grid_columns(grid),
        }
    }

    pub fn draw<D, I>(&self, icons: &I, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        I: IconSet,
    {
        let panel = Rectangle::new(BODY_ORIGIN + GRID_INFO_OFFSET, GRID_INFO_SIZE);
        let origin = panel.top_left;
        let stroke = PrimitiveStyle::with_stroke(INK, 1);
        panel.into_styled(stroke).draw(display)?;

        for (column, x) in self.columns.iter().zip(GRID_COLUMN_X_PX) {
            let top_left = origin + Point::new(x, GRID_COLUMN_Y_PX);
            Rectangle::new(top_left, GRID_COLUMN_SIZE)
                .into_styled(stroke)
                .draw(display)?;
            column.title_label(top_left).draw(display)?;

            for (value, y) in column.values.iter().zip(GRID_VALUE_Y_PX) {
                Label::new(
                    value,
                    Point::new(top_left.x + GRID_VALUE_X_PX, origin.y + y),
                    TextSize::Large,
                )
                .draw(display)?;
            }
        }

        let inset = Point::new(GRID_ICON_INSET_PX, GRID_ICON_INSET_PX);
        icons.draw_icon(Icon::HouseSmall, origin + GRID_INFO_SIZE - inset, display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridReadings {
        GridReadings {
            phases: [
                PhaseReading {
                    voltage: 232.11,
                    current: 1.53,
                    power: 39.81,
                },
                PhaseReading {
                    voltage: 236.05,
                    current: 0.64,
                    power: 50.23,
                },
                PhaseReading {
                    voltage: 237.89,
                    current: 0.56,
                    power: 22.15,
                },
            ],
            meter_power: -327.0,
        }
    }

    #[test]
    fn test_columns_titles_and_values() {
        let columns = grid_columns(&grid());
        let titles: [&str; 4] = columns.each_ref().map(|c| c.title);
        assert_eq!(titles, ["L1", "L2", "L3", "TOTAL"]);

        let l1: [&str; 3] = columns[0].values.each_ref().map(|v| v.as_str());
        assert_eq!(l1, [" 232V", " 1.5A", "  40W"]);
    }

    #[test]
    fn test_titles_use_medium_font() {
        let columns = grid_columns(&grid());
        let title = columns[3].title_label(Point::new(100, 20));
        assert_eq!(
            title.bounds(),
            Rectangle::new(Point::new(104, 24), Size::new(45, 15))
        );
    }

    #[test]
    fn test_total_column_uses_derived_totals() {
        let columns = grid_columns(&grid());
        let total: [&str; 3] = columns[3].values.each_ref().map(|v| v.as_str());
        assert_eq!(total, [" 235V", " 2.7A", " 112W"]);
    }
}
