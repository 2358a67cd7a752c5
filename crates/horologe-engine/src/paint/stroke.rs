/// End-cap style for stroked lines.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    /// Line ends exactly at its endpoints.
    #[default]
    Butt,
    /// A half-disc of diameter `width` is added at each end.
    Round,
    /// A half-square of side `width` is added at each end.
    Square,
}

/// Stroke parameters for `DrawCmd::Line`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub cap: LineCap,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, cap: LineCap) -> Self {
        Self { width, cap }
    }

    /// Round-capped stroke, the style used for clock hands.
    #[inline]
    pub const fn round(width: f32) -> Self {
        Self::new(width, LineCap::Round)
    }
}
