/// Viewport size in logical pixels.
///
/// Renderers combine this with the device scale factor to size their
/// physical-pixel targets.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Physical pixel size at `scale`, rounded up and never smaller than 1×1.
    #[inline]
    pub fn physical_size(self, scale: f32) -> (u32, u32) {
        let w = (self.width * scale).ceil().max(1.0) as u32;
        let h = (self.height * scale).ceil().max(1.0) as u32;
        (w, h)
    }
}
