//! Page abstraction and the enum wrapper used to hand screens around
//!
//! [`Page`] is what every full-screen view implements. [`Screen`] stores one
//! of the concrete pages without trait objects, delegating each call to the
//! page inside.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::icons::IconSet;

use super::connectivity_error::ConnectivityErrorPage;
use super::dashboard::DashboardPage;

/// Identifier of each screen the device can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Dashboard,
    ConnectivityError,
}

/// A complete screen, drawn in one pass onto a fresh canvas.
pub trait Page {
    fn id(&self) -> PageId;

    /// Human-readable title, used in logs.
    fn title(&self) -> &str;

    /// Render the entire page to the given display target.
    fn draw_page<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Bounding rectangle of this page (the full canvas).
    fn bounds(&self) -> Rectangle;
}

/// One of the screens, ready to be shown.
pub enum Screen<'a, I: IconSet> {
    Dashboard(DashboardPage<'a, I>),
    ConnectivityError(ConnectivityErrorPage<'a>),
}

impl<I: IconSet> Page for Screen<'_, I> {
    fn id(&self) -> PageId {
        match self {
            Screen::Dashboard(page) => page.id(),
            Screen::ConnectivityError(page) => page.id(),
        }
    }

    fn title(&self) -> &str {
        match self {
            Screen::Dashboard(page) => page.title(),
            Screen::ConnectivityError(page) => page.title(),
        }
    }

    fn draw_page<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        match self {
            Screen::Dashboard(page) => page.draw_page(display),
            Screen::ConnectivityError(page) => page.draw_page(display),
        }
    }

    fn bounds(&self) -> Rectangle {
        match self {
            Screen::Dashboard(page) => Page::bounds(page),
            Screen::ConnectivityError(page) => Page::bounds(page),
        }
    }
}
