use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled rectangle with a uniform corner radius.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    /// Corner radius in logical pixels; clamped to half the short side when drawn.
    pub radius: f32,
    pub color: Color,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radius: f32, color: Color) -> Self {
        Self { rect, radius, color }
    }

    /// Radius actually used for painting.
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        let max_r = 0.5 * self.rect.size.x.min(self.rect.size.y);
        self.radius.clamp(0.0, max_r.max(0.0))
    }
}

impl DrawList {
    /// Records a filled rounded rectangle.
    #[inline]
    pub fn push_rounded_rect(&mut self, z: ZIndex, rect: Rect, radius: f32, color: Color) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radius, color)));
    }

    /// Records a filled rectangle with square corners.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rounded_rect(z, rect, 0.0, color);
    }
}
