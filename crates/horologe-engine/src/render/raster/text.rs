use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::scene::TextCmd;
use crate::text::FontSystem;

use super::glyphs::{self, GlyphCache};

/// Paints one line of text with its block top-left at `cmd.origin`.
///
/// Layout runs at physical size so glyph bitmaps map 1:1 to device pixels
/// when the item transform is a plain translation.
pub(super) fn paint(
    pixmap: &mut Pixmap,
    cmd: &TextCmd,
    ts: Transform,
    scale: f32,
    fonts: &FontSystem,
    cache: &mut GlyphCache,
    layout: &mut Layout<()>,
) {
    let Some(font) = fonts.get(cmd.font) else {
        log::warn!("Rasterizer: unknown FontId {:?}, skipping text {:?}", cmd.font, cmd.text);
        return;
    };
    if cmd.text.is_empty() || !(cmd.size > 0.0) {
        return;
    }

    let px = cmd.size * scale;
    let inv = 1.0 / scale;

    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(&cmd.text, px, 0));

    let paint = PixmapPaint { quality: tiny_skia::FilterQuality::Bilinear, ..PixmapPaint::default() };

    for g in layout.glyphs() {
        if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
            continue;
        }
        let cov = cache.get_or_rasterize(cmd.font, font, g.key.glyph_index, g.key.px);
        let Some(glyph) = glyphs::tint(cov, cmd.color) else { continue };

        let glyph_ts = ts
            .pre_translate(cmd.origin.x + g.x * inv, cmd.origin.y + g.y * inv)
            .pre_scale(inv, inv);
        pixmap.draw_pixmap(0, 0, glyph.as_ref(), &paint, glyph_ts, None);
    }
}

/// Fresh layout configured the way [`paint`] expects.
pub(super) fn new_layout() -> Layout<()> {
    Layout::new(CoordinateSystem::PositiveYDown)
}
