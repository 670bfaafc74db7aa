//! Dashboard icons
//!
//! The symbols of the energy flow diagram come from an external asset store
//! as 16-bit-per-pixel bitmaps whose top nibble is the gray level. Hosts
//! without the assets use [`OutlineIcons`], which draws simple vector shapes
//! of the same size.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, CornerRadii, Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle,
};
use thiserror_no_std::Error;

use super::components::draw_arc;
use super::styling::{INK, SHADE};

/// Every symbol the dashboard draws, with its fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Solar,
    SolarSmall,
    LineUpDown,
    ArrowDown,
    LineLeftRight,
    ArrowLeft,
    ArrowRight,
    Inverter,
    House,
    HouseSmall,
    Grid,
    Boiler,
}

impl Icon {
    pub const COUNT: usize = 12;

    pub const ALL: [Icon; Icon::COUNT] = [
        Icon::Solar,
        Icon::SolarSmall,
        Icon::LineUpDown,
        Icon::ArrowDown,
        Icon::LineLeftRight,
        Icon::ArrowLeft,
        Icon::ArrowRight,
        Icon::Inverter,
        Icon::House,
        Icon::HouseSmall,
        Icon::Grid,
        Icon::Boiler,
    ];

    pub const fn size(self) -> Size {
        match self {
            Icon::Solar => Size::new(150, 150),
            Icon::SolarSmall | Icon::HouseSmall => Size::new(30, 30),
            Icon::LineUpDown => Size::new(4, 47),
            Icon::ArrowDown => Size::new(20, 39),
            Icon::LineLeftRight => Size::new(110, 4),
            Icon::ArrowLeft | Icon::ArrowRight => Size::new(70, 15),
            Icon::Inverter | Icon::House => Size::new(100, 100),
            Icon::Grid => Size::new(60, 100),
            Icon::Boiler => Size::new(98, 100),
        }
    }

    /// Number of pixels in the bitmap asset.
    pub const fn pixel_count(self) -> usize {
        let size = self.size();
        (size.width * size.height) as usize
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Source of icon pixels
pub trait IconSet {
    /// Draw `icon` with its top-left corner at `top_left`.
    fn draw_icon<D: DrawTarget<Color = Gray4>>(
        &self,
        icon: Icon,
        top_left: Point,
        display: &mut D,
    ) -> Result<(), D::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IconError {
    #[error("Asset for {icon:?} has {actual} pixels, expected {expected}")]
    SizeMismatch {
        icon: Icon,
        expected: usize,
        actual: usize,
    },
}

/// Gray level of one asset pixel: the top nibble, 0 black to 15 white.
pub fn decode_pixel(raw: u16) -> Gray4 {
    Gray4::new((raw >> 12) as u8)
}

/// Icons backed by bitmap assets, row-major, one `u16` per pixel
///
/// Icons without a registered asset are drawn by [`OutlineIcons`].
#[derive(Debug, Clone, Default)]
pub struct BitmapIcons<'a> {
    assets: [Option<&'a [u16]>; Icon::COUNT],
}

impl<'a> BitmapIcons<'a> {
    pub fn new() -> Self {
        Self {
            assets: [None; Icon::COUNT],
        }
    }

    /// Register the asset for `icon`; its length must match the icon size.
    pub fn with_asset(mut self, icon: Icon, pixels: &'a [u16]) -> Result<Self, IconError> {
        let expected = icon.pixel_count();
        if pixels.len() != expected {
            return Err(IconError::SizeMismatch {
                icon,
                expected,
                actual: pixels.len(),
            });
        }
        self.assets[icon.index()] = Some(pixels);
        Ok(self)
    }

    pub fn has_asset(&self, icon: Icon) -> bool {
        self.assets[icon.index()].is_some()
    }
}

impl IconSet for BitmapIcons<'_> {
    fn draw_icon<D: DrawTarget<Color = Gray4>>(
        &self,
        icon: Icon,
        top_left: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self.assets[icon.index()] {
            Some(pixels) => {
                let area = Rectangle::new(top_left, icon.size());
                display.fill_contiguous(&area, pixels.iter().map(|raw| decode_pixel(*raw)))
            }
            None => OutlineIcons.draw_icon(icon, top_left, display),
        }
    }
}

/// Vector stand-ins for the bitmap icons
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineIcons;

impl IconSet for OutlineIcons {
    fn draw_icon<D: DrawTarget<Color = Gray4>>(
        &self,
        icon: Icon,
        top_left: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let area = Rectangle::new(top_left, icon.size());
        let display = &mut display.clipped(&area);
        match icon {
            Icon::Solar | Icon::SolarSmall => draw_solar(area, display),
            Icon::LineUpDown | Icon::LineLeftRight => area
                .into_styled(PrimitiveStyle::with_fill(INK))
                .draw(display),
            Icon::ArrowDown => draw_arrow_down(area, display),
            Icon::ArrowLeft => draw_arrow_horizontal(area, false, display),
            Icon::ArrowRight => draw_arrow_horizontal(area, true, display),
            Icon::Inverter => draw_inverter(area, display),
            Icon::House | Icon::HouseSmall => draw_house(area, display),
            Icon::Grid => draw_pylon(area, display),
            Icon::Boiler => draw_boiler(area, display),
        }
    }
}

/// Point at `(fx, fy)` thousandths of the way across `area`.
fn at(area: &Rectangle, fx: i32, fy: i32) -> Point {
    area.top_left
        + Point::new(
            (area.size.width as i32 - 1) * fx / 1000,
            (area.size.height as i32 - 1) * fy / 1000,
        )
}

fn stroke_width(area: &Rectangle) -> u32 {
    if area.size.width >= 60 { 2 } else { 1 }
}

fn draw_solar<D: DrawTarget<Color = Gray4>>(
    area: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    let stroke = PrimitiveStyle::with_stroke(INK, stroke_width(&area));

    // sun in the upper left, panel below it
    let sun_diameter = area.size.width / 4;
    Circle::new(at(&area, 50, 50), sun_diameter)
        .into_styled(PrimitiveStyle::with_fill(SHADE))
        .draw(display)?;

    let panel = Rectangle::with_corners(at(&area, 150, 400), at(&area, 950, 950));
    panel.into_styled(stroke).draw(display)?;
    for f in [350, 550, 750] {
        Line::new(at(&area, f, 400), at(&area, f, 950))
            .into_styled(stroke)
            .draw(display)?;
    }
    let middle = at(&area, 150, 675);
    Line::new(middle, at(&area, 950, 675))
        .into_styled(stroke)
        .draw(display)?;
    Ok(())
}

fn draw_arrow_down<D: DrawTarget<Color = Gray4>>(
    area: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    Line::new(at(&area, 500, 0), at(&area, 500, 600))
        .into_styled(PrimitiveStyle::with_stroke(INK, 3))
        .draw(display)?;
    Triangle::new(at(&area, 0, 600), at(&area, 1000, 600), at(&area, 500, 1000))
        .into_styled(PrimitiveStyle::with_fill(INK))
        .draw(display)
}

fn draw_arrow_horizontal<D: DrawTarget<Color = Gray4>>(
    area: Rectangle,
    pointing_right: bool,
    display: &mut D,
) -> Result<(), D::Error> {
    let (tail, base, tip) = if pointing_right {
        (0, 750, 1000)
    } else {
        (1000, 250, 0)
    };
    Line::new(at(&area, tail, 500), at(&area, base, 500))
        .into_styled(PrimitiveStyle::with_stroke(INK, 3))
        .draw(display)?;
    Triangle::new(at(&area, base, 0), at(&area, base, 1000), at(&area, tip, 500))
        .into_styled(PrimitiveStyle::with_fill(INK))
        .draw(display)
}

fn draw_inverter<D: DrawTarget<Color = Gray4>>(
    area: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    let stroke = PrimitiveStyle::with_stroke(INK, 2);
    RoundedRectangle::new(
        Rectangle::with_corners(at(&area, 50, 50), at(&area, 950, 950)),
        CornerRadii::new(Size::new(8, 8)),
    )
    .into_styled(stroke)
    .draw(display)?;
    Line::new(at(&area, 50, 950), at(&area, 950, 50))
        .into_styled(stroke)
        .draw(display)?;

    // "=" for DC in the upper left
    for fy in [250, 330] {
        Line::new(at(&area, 180, fy), at(&area, 420, fy))
            .into_styled(stroke)
            .draw(display)?;
    }

    // "~" for AC in the lower right
    let radius = area.size.width / 12;
    let centre = at(&area, 700, 720);
    let offset = Point::new(radius as i32, 0);
    draw_arc(display, centre - offset, radius, INK, 180, 360)?;
    draw_arc(display, centre + offset, radius, INK, 0, 180)?;
    Ok(())
}

fn draw_house<D: DrawTarget<Color = Gray4>>(
    area: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    let stroke = PrimitiveStyle::with_stroke(INK, stroke_width(&area));
    Triangle::new(at(&area, 0, 450), at(&area, 500, 50), at(&area, 1000, 450))
        .into_styled(stroke)
        .draw(display)?;
    Rectangle::with_corners(at(&area, 150, 450), at(&area, 850, 1000))
        .into_styled(stroke)
        .draw(display)?;
    Rectangle::with_corners(at(&area, 420, 700), at(&area, 580, 1000))
        .into_styled(PrimitiveStyle::with_fill(SHADE))
        .draw(display)?;
    Ok(())
}

fn draw_pylon<D: DrawTarget<Color = Gray4>>(
    area: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    let stroke = PrimitiveStyle::with_stroke(INK, 2);
    let legs = [
        (at(&area, 500, 0), at(&area, 100, 1000)),
        (at(&area, 500, 0), at(&area, 900, 1000)),
        (at(&area, 0, 200), at(&area, 1000, 200)),
        (at(&area, 100, 400), at(&area, 900, 400)),
        (at(&area, 270, 400), at(&area, 730, 700)),
        (at(&area, 730, 400), at(&area, 270, 700)),
    ];
    for (start, end) in legs {
        Line::new(start, end).into_styled(stroke).draw(display)?;
    }
    Ok(())
}

fn draw_boiler<D: DrawTarget<Color = Gray4>>(
    area: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    let stroke = PrimitiveStyle::with_stroke(INK, 2);

    // tank sits in the right part of the icon, the fill level is drawn over it
    RoundedRectangle::new(
        Rectangle::with_corners(
            area.top_left + Point::new(37, 0),
            area.top_left + Point::new(96, 79),
        ),
        CornerRadii::new(Size::new(6, 6)),
    )
    .into_styled(stroke)
    .draw(display)?;

    for x in [50, 84] {
        Line::new(
            area.top_left + Point::new(x, 80),
            area.top_left + Point::new(x, 99),
        )
        .into_styled(stroke)
        .draw(display)?;
    }
    Ok(())
}
