//! Conversions from scene types to tiny-skia types.

use tiny_skia::{FillRule, PathBuilder, Transform};

use crate::coords::{Affine, Path, PathSeg};
use crate::paint::{Color, LineCap};

pub(crate) fn skia_color(c: Color) -> tiny_skia::Color {
    let [r, g, b, a] = c.to_srgb_u8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

pub(super) fn solid(c: Color) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint::default();
    paint.set_color(skia_color(c));
    paint.anti_alias = true;
    paint
}

#[inline]
pub(super) fn transform(t: Affine) -> Transform {
    Transform::from_row(t.a, t.b, t.c, t.d, t.e, t.f)
}

pub(super) fn line_cap(cap: LineCap) -> tiny_skia::LineCap {
    match cap {
        LineCap::Butt => tiny_skia::LineCap::Butt,
        LineCap::Round => tiny_skia::LineCap::Round,
        LineCap::Square => tiny_skia::LineCap::Square,
    }
}

/// Builds a tiny-skia path. Returns `None` for degenerate input.
pub(super) fn path(p: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for seg in p.segments() {
        match *seg {
            PathSeg::MoveTo(v) => pb.move_to(v.x, v.y),
            PathSeg::LineTo(v) => pb.line_to(v.x, v.y),
            PathSeg::QuadTo(c, v) => pb.quad_to(c.x, c.y, v.x, v.y),
            PathSeg::CubicTo(c1, c2, v) => pb.cubic_to(c1.x, c1.y, c2.x, c2.y, v.x, v.y),
            PathSeg::Close => pb.close(),
        }
    }
    pb.finish()
}

pub(super) const FILL: FillRule = FillRule::Winding;
