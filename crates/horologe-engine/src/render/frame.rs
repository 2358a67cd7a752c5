use crate::paint::Color;

/// CPU-side frame buffer: premultiplied RGBA8, physical pixels, row-major.
///
/// Produced by [`Rasterizer`](super::Rasterizer) and uploaded by
/// [`Presenter`](super::Presenter). Two frames rendered from equal draw lists
/// at the same scale compare equal byte for byte.
#[derive(Clone)]
pub struct Frame {
    pixmap: tiny_skia::Pixmap,
}

impl Frame {
    /// Allocates a transparent frame. Returns `None` for a zero-sized frame.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        tiny_skia::Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw premultiplied RGBA8 bytes, `width * height * 4` long.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Premultiplied RGBA8 value of one pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(super::raster::skia_color(color));
    }

    /// Reallocates when the size differs. Returns `true` if a new buffer was made.
    pub fn ensure_size(&mut self, width: u32, height: u32) -> bool {
        if self.width() == width && self.height() == height {
            return false;
        }
        match tiny_skia::Pixmap::new(width, height) {
            Some(pixmap) => {
                self.pixmap = pixmap;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn pixmap_mut(&mut self) -> &mut tiny_skia::Pixmap {
        &mut self.pixmap
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width() && self.height() == other.height() && self.data() == other.data()
    }
}

impl core::fmt::Debug for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_frame_is_rejected() {
        assert!(Frame::new(0, 10).is_none());
    }

    #[test]
    fn clear_writes_every_pixel() {
        let mut frame = Frame::new(3, 2).unwrap();
        frame.clear(Color::from_rgb_hex(0x6750A4));
        assert!(frame.data().chunks(4).all(|px| px == [0x67, 0x50, 0xA4, 0xFF]));
    }

    #[test]
    fn ensure_size_only_reallocates_on_change() {
        let mut frame = Frame::new(4, 4).unwrap();
        assert!(!frame.ensure_size(4, 4));
        assert!(frame.ensure_size(8, 2));
        assert_eq!((frame.width(), frame.height()), (8, 2));
        assert!(!frame.ensure_size(0, 0));
    }
}
