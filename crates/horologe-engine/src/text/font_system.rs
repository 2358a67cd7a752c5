use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Width of one character relative to the font size when no font is available.
const FALLBACK_ADVANCE: f32 = 0.6;
/// Line height relative to the font size.
const LINE_HEIGHT: f32 = 1.2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// The first font loaded into a system.
    pub const DEFAULT: FontId = FontId(0);
}

impl Default for FontId {
    fn default() -> Self {
        FontId::DEFAULT
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. Draw commands reference them by
/// [`FontId`]; the rasterizer resolves the id when painting. A command whose
/// font is missing is skipped at paint time, while measurement falls back to
/// a fixed-advance estimate so layout stays deterministic without font files.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("FontSystem: loaded font #{} ({:?})", id.0, self.fonts[id.0].name());
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Size of a single line of text as `(width, height)` in logical pixels.
    ///
    /// Width is the pen advance after the last glyph; height is the taller of
    /// the line height and the lowest glyph bottom.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let Some(font) = self.get(id) else {
            return estimate(text, size);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * LINE_HEIGHT);
        }

        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(layout.height(), f32::max);
        Vec2::new(w, h)
    }

    /// Horizontal advance of each character of `text`, in logical pixels.
    pub fn advances(&self, text: &str, id: FontId, size: f32) -> Vec<f32> {
        match self.get(id) {
            Some(font) => text.chars().map(|c| font.metrics(c, size).advance_width).collect(),
            None => text.chars().map(|_| size * FALLBACK_ADVANCE).collect(),
        }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn estimate(text: &str, size: f32) -> Vec2 {
    Vec2::new(text.chars().count() as f32 * size * FALLBACK_ADVANCE, size * LINE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_without_fonts_is_estimated() {
        let fonts = FontSystem::new();
        let m = fonts.measure_text("12", FontId::DEFAULT, 60.0);
        assert_eq!(m, Vec2::new(72.0, 72.0));
    }

    #[test]
    fn empty_text_has_zero_width() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure_text("", FontId::DEFAULT, 10.0).x, 0.0);
    }

    #[test]
    fn advances_follow_char_count() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.advances("MON", FontId::DEFAULT, 10.0), vec![6.0, 6.0, 6.0]);
    }

    // ── loaded font ───────────────────────────────────────────────────────

    const DEJAVU_BOLD: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

    fn loaded() -> (FontSystem, FontId) {
        let mut fonts = FontSystem::new();
        let id = fonts.load_font(DEJAVU_BOLD).unwrap();
        (fonts, id)
    }

    #[test]
    fn first_loaded_font_is_default() {
        let (fonts, id) = loaded();
        assert_eq!(id, FontId::DEFAULT);
        assert_eq!(fonts.len(), 1);
    }

    #[test]
    fn measurement_uses_font_advances() {
        let (fonts, id) = loaded();
        let advances: f32 = fonts.advances("1234", id, 40.0).iter().sum();
        let m = fonts.measure_text("1234", id, 40.0);

        assert!((m.x - advances).abs() < 1.5, "width {} vs advances {advances}", m.x);
        assert!((m.x - 4.0 * 40.0 * FALLBACK_ADVANCE).abs() > 1.0);
        assert!(m.y > 40.0);
    }

    #[test]
    fn proportional_glyphs_differ_in_width() {
        let (fonts, id) = loaded();
        let wide = fonts.measure_text("WW", id, 30.0).x;
        let narrow = fonts.measure_text("ii", id, 30.0).x;
        assert!(wide > narrow * 1.5, "WW {wide} vs ii {narrow}");
    }

    #[test]
    fn advances_scale_with_size() {
        let (fonts, id) = loaded();
        let small = fonts.advances("M", id, 10.0)[0];
        let large = fonts.advances("M", id, 20.0)[0];
        assert!((large - 2.0 * small).abs() < 0.01);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(&[0, 1, 2, 3]).is_err());
        assert!(fonts.is_empty());
        assert_eq!(fonts.len(), 0);
    }
}
