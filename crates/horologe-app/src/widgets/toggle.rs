use horologe_engine::coords::{Rect, Vec2};
use horologe_engine::paint::Color;
use horologe_engine::scene::{DrawList, ZIndex};

/// A pill-shaped on/off switch.
///
/// Stateless: the caller owns the flag, builds a `Toggle` from it each frame,
/// and flips it when [`hit`](Self::hit) reports a click.
///
/// # Example
/// ```rust,ignore
/// Toggle::new(settings.show_day)
///     .on_color(theme.accent)
///     .paint(&mut list, z, rect);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Toggle {
    checked: bool,
    on_color: Color,
    off_color: Color,
    thumb_color: Color,
}

impl Toggle {
    /// Preferred size in logical pixels.
    pub const SIZE: Vec2 = Vec2::new(52.0, 32.0);

    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            on_color: Color::from_straight(0.4, 0.31, 0.64, 1.0),
            off_color: Color::from_straight(0.9, 0.88, 0.93, 1.0),
            thumb_color: Color::from_straight(1.0, 1.0, 1.0, 1.0),
        }
    }

    pub fn on_color(mut self, v: Color) -> Self { self.on_color = v; self }
    pub fn off_color(mut self, v: Color) -> Self { self.off_color = v; self }
    pub fn thumb_color(mut self, v: Color) -> Self { self.thumb_color = v; self }

    /// Center of the thumb inside `rect`.
    pub fn thumb_center(&self, rect: Rect) -> Vec2 {
        let margin = rect.size.y * 0.13;
        let thumb_r = rect.size.y * 0.5 - margin;
        let cx = if self.checked {
            rect.origin.x + rect.size.x - margin - thumb_r
        } else {
            rect.origin.x + margin + thumb_r
        };
        Vec2::new(cx, rect.origin.y + rect.size.y * 0.5)
    }

    /// Records the track at `z` and the thumb one layer above.
    pub fn paint(&self, list: &mut DrawList, z: ZIndex, rect: Rect) {
        let track_color = if self.checked { self.on_color } else { self.off_color };
        let radius = rect.size.y * 0.5;

        list.push_rounded_rect(z, rect, radius, track_color);

        let thumb_r = radius - rect.size.y * 0.13;
        list.push_circle(z.above(1), self.thumb_center(rect), thumb_r, self.thumb_color);
    }

    /// True when a click at `pos` lands on the switch.
    pub fn hit(rect: Rect, pos: Vec2) -> bool {
        rect.contains(pos)
    }
}
