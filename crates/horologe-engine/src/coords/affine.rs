use super::Vec2;

/// 2D affine transform in logical pixel space.
///
/// Maps a point as:
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`
///
/// The field order matches the `(sx, ky, kx, sy, tx, ty)` row layout used by
/// the rasterizer, so conversion is a straight copy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    /// Rotation by `degrees` about `pivot`. Positive angles turn clockwise on screen.
    pub fn rotation_about(pivot: Vec2, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Affine {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: pivot.x - cos * pivot.x + sin * pivot.y,
            f: pivot.y - sin * pivot.x - cos * pivot.y,
        }
    }

    /// Returns the transform that applies `self` first, then `next`.
    #[must_use]
    pub fn then(self, next: Affine) -> Affine {
        Affine {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Affine::IDENTITY
    }
}

impl Default for Affine {
    fn default() -> Self {
        Affine::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotation_keeps_pivot_fixed() {
        let pivot = Vec2::new(150.0, 150.0);
        let r = Affine::rotation_about(pivot, 73.0);
        assert!(close(r.apply(pivot), pivot));
    }

    #[test]
    fn quarter_turn_is_clockwise_on_screen() {
        // A point to the right of the pivot ends up below it (+Y down).
        let pivot = Vec2::new(10.0, 10.0);
        let r = Affine::rotation_about(pivot, 90.0);
        assert!(close(r.apply(Vec2::new(20.0, 10.0)), Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn minus_ninety_points_up() {
        let pivot = Vec2::new(0.0, 0.0);
        let r = Affine::rotation_about(pivot, -90.0);
        assert!(close(r.apply(Vec2::new(5.0, 0.0)), Vec2::new(0.0, -5.0)));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn then_applies_left_first() {
        // Quarter turn about the origin, then a quarter turn about (10, 0).
        let t = Affine::rotation_about(Vec2::zero(), 90.0)
            .then(Affine::rotation_about(Vec2::new(10.0, 0.0), 90.0));
        assert!(close(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(9.0, -10.0)));
    }

    #[test]
    fn two_quarter_turns_make_a_half_turn() {
        let pivot = Vec2::new(150.0, 150.0);
        let q = Affine::rotation_about(pivot, 90.0);
        let half = Affine::rotation_about(pivot, 180.0);
        let p = Vec2::new(200.0, 130.0);
        assert!(close(q.then(q).apply(p), half.apply(p)));
    }

    #[test]
    fn identity_is_neutral() {
        let r = Affine::rotation_about(Vec2::new(3.0, 4.0), 30.0);
        let p = Vec2::new(7.0, -2.0);
        assert!(close(r.then(Affine::IDENTITY).apply(p), r.apply(p)));
        assert!(close(Affine::IDENTITY.then(r).apply(p), r.apply(p)));
    }
}
