use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::coords::Vec2;
use crate::scene::TextOnPathCmd;
use crate::text::FontSystem;

use super::glyphs::{self, GlyphCache};

/// Chords per curve segment when measuring the path.
const FLATTEN_STEPS: usize = 64;

/// Paints text along `cmd.path` with the baseline on the path.
pub(super) fn paint(
    pixmap: &mut Pixmap,
    cmd: &TextOnPathCmd,
    ts: Transform,
    scale: f32,
    fonts: &FontSystem,
    cache: &mut GlyphCache,
) {
    let Some(font) = fonts.get(cmd.font) else {
        log::warn!("Rasterizer: unknown FontId {:?}, skipping text {:?}", cmd.font, cmd.text);
        return;
    };
    if cmd.text.is_empty() || !(cmd.size > 0.0) {
        return;
    }

    let polyline = Polyline::new(cmd.path.flatten(FLATTEN_STEPS));
    if polyline.length <= 0.0 {
        return;
    }

    let px = cmd.size * scale;
    let inv = 1.0 / scale;
    let advances: Vec<f32> = fonts.advances(&cmd.text, cmd.font, cmd.size);
    let text_width: f32 = advances.iter().sum();

    let mut pen = (polyline.length - text_width) * 0.5;

    let paint = PixmapPaint { quality: tiny_skia::FilterQuality::Bilinear, ..PixmapPaint::default() };

    for (ch, advance) in cmd.text.chars().zip(advances) {
        let mid = pen + advance * 0.5;
        pen += advance;

        if mid < 0.0 || mid > polyline.length {
            continue;
        }

        let index = font.lookup_glyph_index(ch);
        let cov = cache.get_or_rasterize(cmd.font, font, index, px);
        let m = cov.metrics;
        let Some(glyph) = glyphs::tint(cov, cmd.color) else { continue };

        let (at, degrees) = polyline.sample(mid);
        let glyph_ts = ts
            .pre_translate(at.x, at.y)
            .pre_concat(Transform::from_rotate(degrees))
            .pre_translate(
                -advance * 0.5 + m.xmin as f32 * inv,
                -(m.ymin as f32 + m.height as f32) * inv,
            )
            .pre_scale(inv, inv);
        pixmap.draw_pixmap(0, 0, glyph.as_ref(), &paint, glyph_ts, None);
    }
}

/// Flattened path with cumulative arc lengths.
struct Polyline {
    points: Vec<Vec2>,
    /// `lengths[i]` is the arc length from the start to `points[i]`.
    lengths: Vec<f32>,
    length: f32,
}

impl Polyline {
    fn new(points: Vec<Vec2>) -> Self {
        let mut lengths = Vec::with_capacity(points.len());
        let mut acc = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                acc += points[i - 1].distance(*p);
            }
            lengths.push(acc);
        }
        Self { points, lengths, length: acc }
    }

    /// Point and tangent angle (degrees, clockwise from +X) at arc length `s`.
    fn sample(&self, s: f32) -> (Vec2, f32) {
        let i = self
            .lengths
            .partition_point(|&l| l < s)
            .clamp(1, self.points.len().saturating_sub(1).max(1));

        let (a, b) = (self.points[i - 1], self.points[i]);
        let seg = self.lengths[i] - self.lengths[i - 1];
        let t = if seg > 0.0 { (s - self.lengths[i - 1]) / seg } else { 0.0 };
        let d = b - a;
        (a.lerp(b, t), d.y.atan2(d.x).to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_samples_linearly() {
        let pl = Polyline::new(vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)]);
        assert_eq!(pl.length, 20.0);
        let (p, deg) = pl.sample(15.0);
        assert!((p.x - 15.0).abs() < 1e-5 && p.y.abs() < 1e-5);
        assert!(deg.abs() < 1e-5);
    }

    #[test]
    fn tangent_follows_downward_segment() {
        let pl = Polyline::new(vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0)]);
        let (_, deg) = pl.sample(5.0);
        assert!((deg - 90.0).abs() < 1e-4);
    }

    #[test]
    fn sample_at_start_uses_first_segment() {
        let pl = Polyline::new(vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)]);
        let (p, _) = pl.sample(0.0);
        assert_eq!(p, Vec2::new(0.0, 0.0));
    }
}
