//! In-memory canvas for one complete frame.
//!
//! All screen drawing targets this RAM buffer instead of the panel. Once a
//! screen is fully drawn the whole buffer is handed to the panel in one
//! refresh, so the panel never shows a half-drawn frame.
//!
//! Pixels are 4-bit gray levels packed two per byte, high nibble first,
//! row-major: 960 x 540 / 2 = 259,200 bytes.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::{Gray4, GrayColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, PAPER};

const WIDTH: usize = DISPLAY_WIDTH_PX as usize;
const HEIGHT: usize = DISPLAY_HEIGHT_PX as usize;

/// Total number of pixels in the framebuffer (960 x 540 = 518,400).
const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// Size of the packed buffer in bytes.
pub const FRAME_BYTES: usize = PIXEL_COUNT / 2;

/// Heap-allocated 4-bit grayscale framebuffer implementing `DrawTarget<Color = Gray4>`.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: Vec<u8>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

impl FrameBuffer {
    /// Allocate a new framebuffer filled with paper.
    pub fn new() -> Self {
        Self {
            bytes: vec![pack(PAPER, PAPER); FRAME_BYTES],
        }
    }

    /// Gray level at `point`, or `None` outside the canvas.
    pub fn pixel(&self, point: Point) -> Option<Gray4> {
        let index = index_of(point)?;
        let byte = self.bytes[index / 2];
        let luma = if index % 2 == 0 { byte >> 4 } else { byte & 0x0F };
        Some(Gray4::new(luma))
    }

    /// Packed pixel data, two pixels per byte, high nibble first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = Gray4> + '_ {
        self.bytes
            .iter()
            .flat_map(|byte| [Gray4::new(byte >> 4), Gray4::new(byte & 0x0F)])
    }

    /// Number of pixels that are not paper.
    pub fn inked_pixel_count(&self) -> usize {
        self.pixels().filter(|color| *color != PAPER).count()
    }

    #[inline]
    fn set_pixel(&mut self, index: usize, color: Gray4) {
        let byte = &mut self.bytes[index / 2];
        let luma = color.luma() & 0x0F;
        *byte = if index % 2 == 0 {
            (*byte & 0x0F) | (luma << 4)
        } else {
            (*byte & 0xF0) | luma
        };
    }

    /// Copy the whole frame to `display` in a single `fill_contiguous` call.
    pub fn flush<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        debug!("Flushing full {}x{} frame", WIDTH, HEIGHT);

        let area = Rectangle::new(Point::zero(), self.size());
        display.fill_contiguous(&area, self.pixels())
    }
}

fn pack(high: Gray4, low: Gray4) -> u8 {
    (high.luma() << 4) | (low.luma() & 0x0F)
}

fn index_of(point: Point) -> Option<usize> {
    let (x, y) = (usize::try_from(point.x).ok()?, usize::try_from(point.y).ok()?);
    (x < WIDTH && y < HEIGHT).then_some(y * WIDTH + x)
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Gray4;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some(index) = index_of(coord) {
                self.set_pixel(index, color);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // area.points() is row-major, matching the order of `colors`
        for (point, color) in area.points().zip(colors) {
            if let Some(index) = index_of(point) {
                self.set_pixel(index, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let visible = area.intersection(&self.bounding_box());
        let Some(bottom_right) = visible.bottom_right() else {
            return Ok(());
        };

        for y in visible.top_left.y..=bottom_right.y {
            for x in visible.top_left.x..=bottom_right.x {
                if let Some(index) = index_of(Point::new(x, y)) {
                    self.set_pixel(index, color);
                }
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.bytes.fill(pack(color, color));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::INK;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn test_new_frame_is_paper() {
        let frame = FrameBuffer::new();
        assert_eq!(frame.as_bytes().len(), FRAME_BYTES);
        assert_eq!(frame.pixel(Point::new(0, 0)), Some(PAPER));
        assert_eq!(frame.pixel(Point::new(959, 539)), Some(PAPER));
        assert_eq!(frame.inked_pixel_count(), 0);
    }

    #[test]
    fn test_pixel_packing() {
        let mut frame = FrameBuffer::new();
        Pixel(Point::new(0, 0), INK).draw(&mut frame).unwrap();
        Pixel(Point::new(1, 0), Gray4::new(5)).draw(&mut frame).unwrap();

        assert_eq!(frame.as_bytes()[0], 0x05);
        assert_eq!(frame.pixel(Point::new(0, 0)), Some(INK));
        assert_eq!(frame.pixel(Point::new(1, 0)), Some(Gray4::new(5)));
        assert_eq!(frame.as_bytes()[1], 0xFF);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut frame = FrameBuffer::new();
        Pixel(Point::new(-1, 3), INK).draw(&mut frame).unwrap();
        Pixel(Point::new(960, 3), INK).draw(&mut frame).unwrap();
        Pixel(Point::new(3, 540), INK).draw(&mut frame).unwrap();

        assert_eq!(frame.inked_pixel_count(), 0);
        assert_eq!(frame.pixel(Point::new(960, 0)), None);
        assert_eq!(frame.pixel(Point::new(0, -1)), None);
    }

    #[test]
    fn test_fill_contiguous_partially_offscreen() {
        let mut frame = FrameBuffer::new();
        let area = Rectangle::new(Point::new(-1, 0), Size::new(2, 2));
        let colors = [Gray4::new(1), Gray4::new(2), Gray4::new(3), Gray4::new(4)];
        frame.fill_contiguous(&area, colors).unwrap();

        assert_eq!(frame.pixel(Point::new(0, 0)), Some(Gray4::new(2)));
        assert_eq!(frame.pixel(Point::new(0, 1)), Some(Gray4::new(4)));
        assert_eq!(frame.inked_pixel_count(), 2);
    }

    #[test]
    fn test_fill_solid_clipped() {
        let mut frame = FrameBuffer::new();
        Rectangle::new(Point::new(955, 535), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(INK))
            .draw(&mut frame)
            .unwrap();
        assert_eq!(frame.inked_pixel_count(), 25);
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new();
        frame.clear(INK).unwrap();
        assert_eq!(frame.inked_pixel_count(), PIXEL_COUNT);
        frame.clear(PAPER).unwrap();
        assert_eq!(frame.inked_pixel_count(), 0);
    }

    #[test]
    fn test_flush_copies_every_pixel() {
        let mut source = FrameBuffer::new();
        Rectangle::new(Point::new(10, 10), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(INK))
            .draw(&mut source)
            .unwrap();

        let mut target = FrameBuffer::new();
        target.clear(Gray4::new(7)).unwrap();
        source.flush(&mut target).unwrap();

        assert!(target == source);
    }
}
