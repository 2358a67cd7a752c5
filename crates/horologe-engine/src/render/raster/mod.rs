//! CPU rasterization of a [`DrawList`] into a [`Frame`] (tiny-skia).
//!
//! One file per draw command kind, mirroring `scene::shapes`. Geometry stays
//! in logical pixels; the item transform is composed with the device scale
//! so every command lands in physical pixels.

mod circle;
mod convert;
mod glyphs;
mod line;
mod path;
mod rounded_rect;
mod text;
mod text_on_path;

use fontdue::layout::Layout;

use crate::render::Frame;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

pub(crate) use convert::skia_color;

/// Paints draw lists into frames.
///
/// Holds a glyph cache and a reusable text layout; everything else is
/// stateless, so the same list painted twice yields identical pixels.
pub struct Rasterizer {
    glyphs: glyphs::GlyphCache,
    layout: Layout<()>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self {
            glyphs: glyphs::GlyphCache::default(),
            layout: text::new_layout(),
        }
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints every item of `draw_list` in paint order on top of `frame`.
    ///
    /// `scale` is the physical-pixels-per-logical-pixel factor. The frame is
    /// not cleared; call [`Frame::clear`] first for a fresh frame.
    pub fn render(&mut self, draw_list: &mut DrawList, fonts: &FontSystem, frame: &mut Frame, scale: f32) {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        let pixmap = frame.pixmap_mut();

        for item in draw_list.iter_in_paint_order() {
            let ts = convert::transform(item.transform).post_scale(scale, scale);

            match &item.cmd {
                DrawCmd::Circle(cmd) => circle::paint(pixmap, cmd, ts),
                DrawCmd::RoundedRect(cmd) => rounded_rect::paint(pixmap, cmd, ts),
                DrawCmd::Line(cmd) => line::paint(pixmap, cmd, ts),
                DrawCmd::Path(cmd) => path::paint(pixmap, cmd, ts),
                DrawCmd::Text(cmd) => {
                    text::paint(pixmap, cmd, ts, scale, fonts, &mut self.glyphs, &mut self.layout)
                }
                DrawCmd::TextOnPath(cmd) => {
                    text_on_path::paint(pixmap, cmd, ts, scale, fonts, &mut self.glyphs)
                }
            }
        }
    }
}
