//! Main dashboard page
//!
//! Composes the header and the fixed body layout from one telemetry
//! snapshot:
//! - PV inputs, solar symbol and the per-phase grid table across the top
//! - the energy flow row: boiler, inverter, house and grid with the links
//!   between them
//! - the consumption sentence and four graphs along the bottom

pub mod boiler;
pub mod constants;
pub mod flows;
pub mod grid_table;
pub mod head;
pub mod info_band;
pub mod pv_info;
pub mod solar;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::debug;

use crate::pages::{Page, PageId};
use crate::snapshot::TelemetrySnapshot;
use crate::ui::core::{Drawable, Timestamp};
use crate::ui::icons::{Icon, IconSet};
use crate::ui::styling::INK;
use crate::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

use self::boiler::BoilerView;
use self::constants::{BODY_ORIGIN, BODY_SIZE, GRID_OFFSET, HOUSE_OFFSET, INVERTER_OFFSET};
use self::flows::{BoilerLinkView, GridFlowView, InverterFlowView};
use self::grid_table::GridTableView;
use self::head::HeadView;
use self::info_band::InfoBandView;
use self::pv_info::PvInfoView;
use self::solar::SolarView;

/// Values for the header that do not come from the telemetry source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardContext<'a> {
    pub version: &'a str,
    /// Time of the refresh being drawn.
    pub updated: Timestamp,
}

pub struct DashboardPage<'a, I: IconSet> {
    snapshot: &'a TelemetrySnapshot,
    context: DashboardContext<'a>,
    icons: &'a I,
}

impl<'a, I: IconSet> DashboardPage<'a, I> {
    pub fn new(
        snapshot: &'a TelemetrySnapshot,
        context: DashboardContext<'a>,
        icons: &'a I,
    ) -> Self {
        Self {
            snapshot,
            context,
            icons,
        }
    }

    fn draw_flow_row<D: DrawTarget<Color = Gray4>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let snapshot = self.snapshot;
        let icons = self.icons;

        BoilerView::new(&snapshot.boiler).draw(icons, display)?;
        BoilerLinkView::new(&snapshot.boiler).draw(icons, display)?;
        icons.draw_icon(Icon::Inverter, BODY_ORIGIN + INVERTER_OFFSET, display)?;
        InverterFlowView::new(&snapshot.inverter).draw(icons, display)?;
        icons.draw_icon(Icon::House, BODY_ORIGIN + HOUSE_OFFSET, display)?;
        GridFlowView::new(&snapshot.grid).draw(icons, display)?;
        icons.draw_icon(Icon::Grid, BODY_ORIGIN + GRID_OFFSET, display)
    }
}

impl<I: IconSet> Page for DashboardPage<'_, I> {
    fn id(&self) -> PageId {
        PageId::Dashboard
    }

    fn title(&self) -> &str {
        "Dashboard"
    }

    fn draw_page<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        Drawable::draw(self, display)
    }

    fn bounds(&self) -> Rectangle {
        Drawable::bounds(self)
    }
}

impl<I: IconSet> Drawable for DashboardPage<'_, I> {
    fn draw<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        debug!("Drawing dashboard");
        let snapshot = self.snapshot;
        let icons = self.icons;

        HeadView::new(self.context.version, self.context.updated, &snapshot.device)
            .draw(display)?;

        Rectangle::new(BODY_ORIGIN, BODY_SIZE)
            .into_styled(PrimitiveStyle::with_stroke(INK, 1))
            .draw(display)?;

        PvInfoView::new(&snapshot.inverter).draw(icons, display)?;
        SolarView::new(&snapshot.inverter).draw(icons, display)?;
        GridTableView::new(&snapshot.grid).draw(icons, display)?;
        self.draw_flow_row(display)?;
        InfoBandView::new(snapshot).draw(display)
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX),
        )
    }
}
