//! Circle arcs sampled at one-degree resolution
//!
//! Angles are in degrees, measured clockwise on screen: 0° points right,
//! 90° points down. Sampling uses a quarter-wave sine table so no floating
//! point math library is needed.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;

use super::graph::viewport::round_to_i32;

/// Most points an arc can produce, one per degree.
pub const MAX_ARC_POINTS: usize = 360;

/// Sweep of a complete circle, `[0, 360)`.
pub const FULL_CIRCLE: (i32, i32) = (0, 360);

/// sin(0°)..=sin(90°)
const QUARTER_SINE: [f32; 91] = [
    0.0000000, 0.0174524, 0.0348995, 0.0523360, 0.0697565, 0.0871557, 0.1045285, 0.1218693,
    0.1391731, 0.1564345, 0.1736482, 0.1908090, 0.2079117, 0.2249511, 0.2419219, 0.2588190,
    0.2756374, 0.2923717, 0.3090170, 0.3255682, 0.3420201, 0.3583679, 0.3746066, 0.3907311,
    0.4067366, 0.4226183, 0.4383711, 0.4539905, 0.4694716, 0.4848096, 0.5000000, 0.5150381,
    0.5299193, 0.5446390, 0.5591929, 0.5735764, 0.5877853, 0.6018150, 0.6156615, 0.6293204,
    0.6427876, 0.6560590, 0.6691306, 0.6819984, 0.6946584, 0.7071068, 0.7193398, 0.7313537,
    0.7431448, 0.7547096, 0.7660444, 0.7771460, 0.7880108, 0.7986355, 0.8090170, 0.8191520,
    0.8290376, 0.8386706, 0.8480481, 0.8571673, 0.8660254, 0.8746197, 0.8829476, 0.8910065,
    0.8987940, 0.9063078, 0.9135455, 0.9205049, 0.9271839, 0.9335804, 0.9396926, 0.9455186,
    0.9510565, 0.9563048, 0.9612617, 0.9659258, 0.9702957, 0.9743701, 0.9781476, 0.9816272,
    0.9848078, 0.9876883, 0.9902681, 0.9925462, 0.9945219, 0.9961947, 0.9975641, 0.9986295,
    0.9993908, 0.9998477, 1.0000000,
];

/// Sine of a whole-degree angle.
pub fn sin_deg(degrees: i32) -> f32 {
    let d = degrees.rem_euclid(360) as usize;
    match d {
        0..=90 => QUARTER_SINE[d],
        91..=180 => QUARTER_SINE[180 - d],
        181..=270 => -QUARTER_SINE[d - 180],
        _ => -QUARTER_SINE[360 - d],
    }
}

/// Cosine of a whole-degree angle.
pub fn cos_deg(degrees: i32) -> f32 {
    sin_deg(degrees.rem_euclid(360) + 90)
}

/// Pixels on the arc of `radius` around `center` for angles in `[from_deg, to_deg)`.
///
/// One sample per degree, at most one full turn. Consecutive samples that
/// land on the same pixel are kept once.
pub fn arc_points(
    center: Point,
    radius: u32,
    from_deg: i32,
    to_deg: i32,
) -> heapless::Vec<Point, MAX_ARC_POINTS> {
    let mut points: heapless::Vec<Point, MAX_ARC_POINTS> = heapless::Vec::new();
    let r = radius as f32;
    let end = to_deg.min(from_deg.saturating_add(MAX_ARC_POINTS as i32));

    for deg in from_deg..end {
        let point = Point::new(
            center.x + round_to_i32(r * cos_deg(deg)),
            center.y + round_to_i32(r * sin_deg(deg)),
        );
        if points.last() == Some(&point) {
            continue;
        }
        if points.push(point).is_err() {
            break;
        }
    }

    points
}

/// Draw an arc one pixel wide.
pub fn draw_arc<D: DrawTarget<Color = Gray4>>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Gray4,
    from_deg: i32,
    to_deg: i32,
) -> Result<(), D::Error> {
    display.draw_iter(
        arc_points(center, radius, from_deg, to_deg)
            .into_iter()
            .map(|point| Pixel(point, color)),
    )
}
