use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::path::PathCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::text::TextCmd;
use crate::scene::shapes::text_on_path::TextOnPathCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching rasterizer arm under `render::raster::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    RoundedRect(RoundedRectCmd),
    Line(LineCmd),
    Path(PathCmd),
    Text(TextCmd),
    TextOnPath(TextOnPathCmd),
}

impl DrawCmd {
    /// Short, stable name of the command kind (used in logs and tests).
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Circle(_) => "circle",
            DrawCmd::RoundedRect(_) => "rounded_rect",
            DrawCmd::Line(_) => "line",
            DrawCmd::Path(_) => "path",
            DrawCmd::Text(_) => "text",
            DrawCmd::TextOnPath(_) => "text_on_path",
        }
    }
}
