use horologe_engine::coords::Vec2;
use horologe_engine::paint::Stroke;
use horologe_engine::scene::{DrawList, ZIndex};

use crate::{ColorPalette, HandAngles};

use super::metrics::FaceMetrics;

/// Hand length as a fraction of the face's half-width.
const HOUR_LENGTH: f32 = 0.65;
const MINUTE_LENGTH: f32 = 0.85;
/// Stroke width of both hands.
const HAND_WIDTH: f32 = 28.0;
/// Second dot radius and its distance from the left edge as a fraction of the side.
const SECOND_DOT_RADIUS: f32 = 11.0;
const SECOND_DOT_INSET: f32 = 0.1;
const PIVOT_RADIUS: f32 = 7.5;

/// Hands are drawn pointing right (3 o'clock); this turns 0° to 12 o'clock.
const TO_TWELVE: f32 = -90.0;
/// The second dot starts on the left (9 o'clock), so it needs the opposite offset.
const SECOND_TO_TWELVE: f32 = 90.0;

/// Hour hand, minute hand and second dot, each inside its own rotation scope.
pub(crate) fn draw(list: &mut DrawList, z: ZIndex, m: &FaceMetrics, angles: &HandAngles, palette: &ColorPalette) {
    let c = m.center;
    let stroke = Stroke::round(m.units(HAND_WIDTH));

    {
        let mut hour = list.rotated(c, angles.hour + TO_TWELVE);
        hour.push_line(z, c, c + Vec2::new(m.half * HOUR_LENGTH, 0.0), stroke, palette.hour_hand);
    }
    {
        let mut minute = list.rotated(c, angles.minute + TO_TWELVE);
        minute.push_line(z, c, c + Vec2::new(m.half * MINUTE_LENGTH, 0.0), stroke, palette.minute_hand);
    }
    {
        let mut second = list.rotated(c, angles.second + SECOND_TO_TWELVE);
        let dot = m.at(m.side * SECOND_DOT_INSET, m.half);
        second.push_circle(z, dot, m.units(SECOND_DOT_RADIUS), palette.second_hand);
    }
}

/// Small background-colored dot covering where the hands meet.
pub(crate) fn draw_pivot(list: &mut DrawList, z: ZIndex, m: &FaceMetrics, palette: &ColorPalette) {
    list.push_circle(z, m.center, m.units(PIVOT_RADIUS), palette.background);
}
