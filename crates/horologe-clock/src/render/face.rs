use std::f32::consts::TAU;

use horologe_engine::coords::{Path, Vec2};
use horologe_engine::paint::Color;
use horologe_engine::scene::{DrawList, ZIndex};

use crate::ClockShape;

use super::metrics::FaceMetrics;

/// Corner radius of the rectangular face.
const RECT_CORNER: f32 = 100.0;
/// Vertices of the dodecagon.
const DODECAGON_SIDES: usize = 12;
/// Central and lobe circle radii of the butterfly.
const BUTTERFLY_CENTER: f32 = 125.0;
const BUTTERFLY_LOBE: f32 = 100.0;

/// Fills the face background in the configured shape.
pub(crate) fn draw(list: &mut DrawList, z: ZIndex, m: &FaceMetrics, shape: ClockShape, color: Color) {
    match shape {
        ClockShape::Circle => list.push_circle(z, m.center, m.half, color),
        ClockShape::Rectangle => {
            list.push_rounded_rect(z, m.square, m.units(RECT_CORNER), color);
        }
        ClockShape::Dodecagon => list.push_path(z, dodecagon(m.center, m.half), color),
        ClockShape::Butterfly => {
            let (cx, cy) = (m.half, m.half);
            list.push_circle(z, m.center, m.units(BUTTERFLY_CENTER), color);
            for (x, y) in [
                (cx / 2.0, cy / 2.0),
                (cx * 1.5, cy / 2.0),
                (cx / 2.0, cy * 1.5),
                (cx * 1.5, cy * 1.5),
            ] {
                list.push_circle(z, m.at(x, y), m.units(BUTTERFLY_LOBE), color);
            }
        }
    }
}

/// Twelve quadratic arcs whose endpoints and controls all sit on the circle.
///
/// Control points are at the half-step angles, which gives a scalloped outline.
pub(crate) fn dodecagon(center: Vec2, radius: f32) -> Path {
    let step = TAU / DODECAGON_SIDES as f32;
    let mut path = Path::new().move_to(Vec2::polar(center, radius, 0.0));
    for i in 1..=DODECAGON_SIDES {
        let ctrl = Vec2::polar(center, radius, (i as f32 - 0.5) * step);
        let end = Vec2::polar(center, radius, i as f32 * step);
        path = path.quad_to(ctrl, end);
    }
    path.close()
}
