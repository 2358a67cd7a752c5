//! Glyph coverage cache and tinting.

use std::collections::HashMap;

use tiny_skia::{IntSize, Pixmap};

use crate::paint::Color;
use crate::text::FontId;

/// Cache key: font, glyph index, pixel size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct GlyphKey {
    font: FontId,
    glyph: u16,
    px_bits: u32,
}

/// Rasterized coverage for one glyph at one pixel size.
pub(super) struct Coverage {
    pub metrics: fontdue::Metrics,
    pub alpha: Vec<u8>,
}

/// Glyphs are rasterized on first use and kept for the rasterizer's lifetime.
#[derive(Default)]
pub(super) struct GlyphCache {
    entries: HashMap<GlyphKey, Coverage>,
}

impl GlyphCache {
    pub(super) fn get_or_rasterize(
        &mut self,
        font_id: FontId,
        font: &fontdue::Font,
        glyph: u16,
        px: f32,
    ) -> &Coverage {
        let key = GlyphKey { font: font_id, glyph, px_bits: px.to_bits() };
        self.entries.entry(key).or_insert_with(|| {
            let (metrics, alpha) = font.rasterize_indexed(glyph, px);
            Coverage { metrics, alpha }
        })
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Builds a premultiplied pixmap of `color` masked by `coverage`.
///
/// Returns `None` for empty glyphs (spaces).
pub(super) fn tint(coverage: &Coverage, color: Color) -> Option<Pixmap> {
    let w = coverage.metrics.width as u32;
    let h = coverage.metrics.height as u32;
    let size = IntSize::from_wh(w, h)?;

    let [r, g, b, a] = color.to_srgb_u8();
    let mut data = Vec::with_capacity(coverage.alpha.len() * 4);
    for &cov in &coverage.alpha {
        let alpha = mul_u8(a, cov);
        data.extend_from_slice(&[mul_u8(r, alpha), mul_u8(g, alpha), mul_u8(b, alpha), alpha]);
    }
    Pixmap::from_vec(data, size)
}

#[inline]
fn mul_u8(x: u8, y: u8) -> u8 {
    ((x as u16 * y as u16 + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_u8_is_exact_at_bounds() {
        assert_eq!(mul_u8(255, 255), 255);
        assert_eq!(mul_u8(200, 0), 0);
        assert_eq!(mul_u8(255, 128), 128);
    }

    #[test]
    fn empty_coverage_yields_no_pixmap() {
        let cov = Coverage { metrics: fontdue::Metrics::default(), alpha: Vec::new() };
        assert!(tint(&cov, Color::from_rgb_hex(0xFFFFFF)).is_none());
    }

    #[test]
    fn tint_premultiplies_by_coverage() {
        let metrics = fontdue::Metrics { width: 2, height: 1, ..fontdue::Metrics::default() };
        let cov = Coverage { metrics, alpha: vec![255, 0] };
        let pm = tint(&cov, Color::from_rgb_hex(0xFF8000)).unwrap();
        assert_eq!(&pm.data()[..4], &[255, 128, 0, 255]);
        assert_eq!(&pm.data()[4..], &[0, 0, 0, 0]);
    }
}
