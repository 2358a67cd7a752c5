use super::Vec2;

/// One segment of a [`Path`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSeg {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic bezier: control point, end point.
    QuadTo(Vec2, Vec2),
    /// Cubic bezier: two control points, end point.
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

/// Vector path in logical pixels.
///
/// Built with chained calls and consumed by the rasterizer as-is. Curves are
/// flattened only where a polyline is needed (glyph placement along a path).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSeg>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Vec2) -> Self {
        self.segments.push(PathSeg::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Vec2) -> Self {
        self.segments.push(PathSeg::LineTo(p));
        self
    }

    pub fn quad_to(mut self, ctrl: Vec2, end: Vec2) -> Self {
        self.segments.push(PathSeg::QuadTo(ctrl, end));
        self
    }

    pub fn cubic_to(mut self, c1: Vec2, c2: Vec2, end: Vec2) -> Self {
        self.segments.push(PathSeg::CubicTo(c1, c2, end));
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSeg::Close);
        self
    }

    #[inline]
    pub fn segments(&self) -> &[PathSeg] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `true` when the last segment closes the contour.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSeg::Close))
    }

    /// Approximates the path with a polyline, splitting each curve into `steps` chords.
    ///
    /// Only the first contour is returned; text-on-path uses single open contours.
    pub fn flatten(&self, steps: usize) -> Vec<Vec2> {
        let steps = steps.max(1);
        let mut out: Vec<Vec2> = Vec::new();
        let mut start = Vec2::zero();

        for seg in &self.segments {
            let from = out.last().copied().unwrap_or(start);
            match *seg {
                PathSeg::MoveTo(p) => {
                    if !out.is_empty() {
                        break;
                    }
                    start = p;
                    out.push(p);
                }
                PathSeg::LineTo(p) => out.push(p),
                PathSeg::QuadTo(c, p) => {
                    for i in 1..=steps {
                        let t = i as f32 / steps as f32;
                        out.push(quad_point(from, c, p, t));
                    }
                }
                PathSeg::CubicTo(c1, c2, p) => {
                    for i in 1..=steps {
                        let t = i as f32 / steps as f32;
                        out.push(cubic_point(from, c1, c2, p, t));
                    }
                }
                PathSeg::Close => out.push(start),
            }
        }

        out
    }
}

#[inline]
fn quad_point(p0: Vec2, c: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let a = p0.lerp(c, t);
    let b = c.lerp(p1, t);
    a.lerp(b, t)
}

#[inline]
fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let a = quad_point(p0, c1, c2, t);
    let b = quad_point(c1, c2, p1, t);
    a.lerp(b, t)
}
