use crate::coords::Vec2;
use crate::paint::{Color, Stroke};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
    pub color: Color,
}

impl DrawList {
    /// Records a stroked line from `from` to `to`.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, stroke: Stroke, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, stroke, color }));
    }
}
