use horologe_engine::coords::Path;
use horologe_engine::paint::Color;
use horologe_engine::scene::{DrawList, ZIndex};
use horologe_engine::text::FontId;

use super::metrics::FaceMetrics;

/// Gap between the label path's ends and the face edge.
const PADDING: f32 = 7.5;
const TEXT_SIZE: f32 = 28.0;
/// The label rides opposite the second dot.
const OFFSET_FROM_SECOND: f32 = 180.0;

/// Upward-bowing cubic across the face, through the center height.
pub(crate) fn label_path(m: &FaceMetrics) -> Path {
    let (side, cy, r) = (m.side, m.half, m.half);
    let pad = m.units(PADDING);
    Path::new()
        .move_to(m.at(pad, cy))
        .cubic_to(m.at(r / 2.0, cy - r), m.at(side - r / 2.0, cy - r), m.at(side - pad, cy))
}

/// Day name on the arc, rotated with the second hand.
pub(crate) fn draw(
    list: &mut DrawList,
    z: ZIndex,
    m: &FaceMetrics,
    label: String,
    second_angle: f32,
    font: FontId,
    color: Color,
) {
    let mut scope = list.rotated(m.center, second_angle + OFFSET_FROM_SECOND);
    scope.push_text_on_path(z, label, font, m.units(TEXT_SIZE), color, label_path(m));
}
