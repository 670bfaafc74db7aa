//! Connectivity error screen
//!
//! Shown instead of the dashboard when the telemetry source cannot be
//! reached. Clears the canvas and centres a single line naming the network.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;
use embedded_layout::prelude::*;
use heapless::String;

use crate::pages::{Page, PageId};
use crate::ui::components::text::MAX_LABEL_LENGTH;
use crate::ui::components::{Label, TextSize};
use crate::ui::core::Drawable;
use crate::ui::styling::PAPER;
use crate::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

pub struct ConnectivityErrorPage<'a> {
    identifier: &'a str,
}

impl<'a> ConnectivityErrorPage<'a> {
    /// `identifier` names the network that could not be joined.
    pub fn new(identifier: &'a str) -> Self {
        Self { identifier }
    }

    pub fn message(&self) -> String<MAX_LABEL_LENGTH> {
        let mut message = String::new();
        let _ = core::fmt::write(
            &mut message,
            format_args!("WiFi error: [{}]", self.identifier),
        );
        message
    }

    /// Position of the message, centred on the canvas.
    pub fn message_bounds(&self) -> Rectangle {
        let message = self.message();
        let font = TextSize::Large.font();
        let width = font.character_size.width * message.len() as u32;
        Rectangle::new(
            Point::zero(),
            Size::new(width, font.character_size.height),
        )
        .align_to(
            &Drawable::bounds(self),
            horizontal::Center,
            vertical::Center,
        )
    }
}

impl Page for ConnectivityErrorPage<'_> {
    fn id(&self) -> PageId {
        PageId::ConnectivityError
    }

    fn title(&self) -> &str {
        "Connectivity error"
    }

    fn draw_page<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        Drawable::draw(self, display)
    }

    fn bounds(&self) -> Rectangle {
        Drawable::bounds(self)
    }
}

impl Drawable for ConnectivityErrorPage<'_> {
    fn draw<D: DrawTarget<Color = Gray4>>(&self, display: &mut D) -> Result<(), D::Error> {
        display.clear(PAPER)?;

        let area = self.message_bounds();
        let anchor = Point::new(area.center().x, area.top_left.y);
        Label::new(&self.message(), anchor, TextSize::Large)
            .with_alignment(Alignment::Center)
            .draw(display)
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::styling::INK;
    use embedded_graphics::primitives::PrimitiveStyle;
    use embedded_graphics::Drawable as EgDrawable;

    #[test]
    fn test_message() {
        let page = ConnectivityErrorPage::new("garage");
        assert_eq!(page.message().as_str(), "WiFi error: [garage]");
        assert_eq!(page.id(), PageId::ConnectivityError);
    }

    #[test]
    fn test_message_centred() {
        let page = ConnectivityErrorPage::new("garage");
        // 20 characters of 10x20
        assert_eq!(
            page.message_bounds(),
            Rectangle::new(Point::new(380, 260), Size::new(200, 20))
        );
    }

    #[test]
    fn test_clears_previous_frame() {
        let mut frame = FrameBuffer::new();
        Rectangle::new(Point::new(0, 0), Size::new(50, 50))
            .into_styled(PrimitiveStyle::with_fill(INK))
            .draw(&mut frame)
            .unwrap();

        let page = ConnectivityErrorPage::new("garage");
        page.draw_page(&mut frame).unwrap();

        assert_eq!(frame.pixel(Point::new(10, 10)), Some(PAPER));
        let area = page.message_bounds();
        let inked = area
            .points()
            .filter(|p| frame.pixel(*p) == Some(INK))
            .count();
        assert!(inked > 0);
        assert_eq!(frame.inked_pixel_count(), inked);
    }
}
