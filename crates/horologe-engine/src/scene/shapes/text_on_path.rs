use crate::coords::Path;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Text laid out along an open path, baseline on the path.
///
/// The run is centred on the path's arc-length midpoint. Each glyph is placed at its arc-length position and rotated to the local
/// tangent. Glyphs that would fall past either end of the path are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOnPathCmd {
    pub text: String,
    pub font: FontId,
    pub size: f32,
    pub color: Color,
    pub path: Path,
}

impl DrawList {
    /// Records text that follows `path`.
    pub fn push_text_on_path(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        path: Path,
    ) {
        self.push(z, DrawCmd::TextOnPath(TextOnPathCmd {
            text: text.into(),
            font,
            size,
            color,
            path,
        }));
    }
}
