use horologe_engine::coords::{Rect, Vec2};

use crate::DEFAULT_FACE_DIAMETER;

/// Geometry of one face: its square, center, and reference-unit scale.
///
/// Fixed sizes are written for a 300-unit face; [`units`](Self::units)
/// scales them to the actual side so every shape keeps its proportions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct FaceMetrics {
    pub square: Rect,
    pub side: f32,
    pub half: f32,
    pub center: Vec2,
    scale: f32,
}

impl FaceMetrics {
    /// Face of `diameter` centered in `surface`, shrunk to fit if needed.
    pub fn new(surface: Rect, diameter: f32) -> Self {
        let fit = surface.centered_square();
        let side = diameter.min(fit.size.x).max(0.0);
        let square = Rect::from_center(fit.center(), Vec2::new(side, side));
        Self {
            square,
            side,
            half: side * 0.5,
            center: square.center(),
            scale: side / DEFAULT_FACE_DIAMETER,
        }
    }

    /// Scales a reference length to this face.
    #[inline]
    pub fn units(&self, reference: f32) -> f32 {
        reference * self.scale
    }

    /// Point given relative to the square's top-left corner.
    #[inline]
    pub fn at(&self, x: f32, y: f32) -> Vec2 {
        self.square.origin + Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_is_centered_and_clamped() {
        let m = FaceMetrics::new(Rect::new(0.0, 0.0, 400.0, 200.0), 300.0);
        assert_eq!(m.side, 200.0);
        assert_eq!(m.center, Vec2::new(200.0, 100.0));
        assert_eq!(m.square.origin, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn reference_units_scale_with_side() {
        let m = FaceMetrics::new(Rect::new(0.0, 0.0, 600.0, 600.0), 600.0);
        assert_eq!(m.units(100.0), 200.0);
        assert_eq!(m.at(10.0, 20.0), Vec2::new(10.0, 20.0));
    }
}
