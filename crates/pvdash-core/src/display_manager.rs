//! Display manager: owns the panel and the frame that is pushed to it
//!
//! The e-paper panel is slow and visibly flashes on every refresh, so a
//! screen is first drawn completely into the [`FrameBuffer`] and then handed
//! to the panel in exactly one [`Panel::present`] call.

use log::{debug, error, info};
use thiserror_no_std::Error;

use crate::framebuffer::FrameBuffer;
use crate::pages::{Page, Screen, render};
use crate::ui::icons::IconSet;

/// A physical or simulated panel that can show one full frame.
pub trait Panel {
    type Error: core::fmt::Debug;

    /// Replace the visible image with `frame`, blocking until the refresh is done.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum DisplayError<E: core::fmt::Debug> {
    #[error("Panel refresh failed: {0:?}")]
    Panel(E),
}

pub struct DisplayManager<P: Panel> {
    panel: P,
    frame: FrameBuffer,
    refresh_count: u32,
}

impl<P: Panel> DisplayManager<P> {
    pub fn new(panel: P) -> Self {
        Self {
            panel,
            frame: FrameBuffer::new(),
            refresh_count: 0,
        }
    }

    /// Draw `screen` from scratch and present it.
    pub fn show<I: IconSet>(
        &mut self,
        screen: &Screen<'_, I>,
    ) -> Result<(), DisplayError<P::Error>> {
        debug!("Rendering {} screen", screen.title());
        render(screen, &mut self.frame);

        self.panel.present(&self.frame).map_err(|e| {
            error!("Panel refresh failed: {:?}", e);
            DisplayError::Panel(e)
        })?;

        self.refresh_count += 1;
        info!(
            "Presented {:?} ({} refreshes)",
            screen.id(),
            self.refresh_count
        );
        Ok(())
    }

    /// The most recently drawn frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Number of successful panel refreshes.
    pub fn refresh_count(&self) -> u32 {
        self.refresh_count
    }
}
