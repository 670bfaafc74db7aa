//! Full-screen pages and the entry points that render them
//!
//! Rendering always targets a [`FrameBuffer`]: the canvas is reset to paper
//! and the whole page is drawn, so a frame never carries leftovers from the
//! previous refresh.

pub mod connectivity_error;
pub mod dashboard;
pub mod page;

pub use connectivity_error::ConnectivityErrorPage;
pub use dashboard::{DashboardContext, DashboardPage};
pub use page::{Page, PageId, Screen};

use embedded_graphics::prelude::*;

use crate::framebuffer::FrameBuffer;
use crate::snapshot::TelemetrySnapshot;
use crate::ui::icons::IconSet;
use crate::ui::styling::PAPER;

/// Reset `frame` to paper and draw `page` onto it.
pub fn render<P: Page>(page: &P, frame: &mut FrameBuffer) {
    let Ok(()) = frame.clear(PAPER);
    let Ok(()) = page.draw_page(frame);
}

/// Draw the dashboard for `snapshot` into `frame`.
pub fn render_dashboard<I: IconSet>(
    snapshot: &TelemetrySnapshot,
    context: DashboardContext<'_>,
    icons: &I,
    frame: &mut FrameBuffer,
) {
    render(&DashboardPage::new(snapshot, context, icons), frame);
}

/// Draw the connectivity error screen naming `identifier` into `frame`.
pub fn render_connectivity_error(identifier: &str, frame: &mut FrameBuffer) {
    render(&ConnectivityErrorPage::new(identifier), frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::Timestamp;
    use crate::ui::icons::OutlineIcons;

    #[test]
    fn test_rendering_replaces_previous_frame() {
        let snapshot = TelemetrySnapshot::new();
        let context = DashboardContext {
            version: "Version 1.0a",
            updated: Timestamp::new(2024, 11, 2, 14, 30),
        };
        let mut frame = FrameBuffer::new();
        render_dashboard(&snapshot, context, &OutlineIcons, &mut frame);
        let dashboard_ink = frame.inked_pixel_count();

        render_connectivity_error("garage", &mut frame);
        let error_ink = frame.inked_pixel_count();

        assert!(error_ink > 0);
        assert!(error_ink < dashboard_ink);

        let mut fresh = FrameBuffer::new();
        render_connectivity_error("garage", &mut fresh);
        assert!(fresh == frame);
    }
}
