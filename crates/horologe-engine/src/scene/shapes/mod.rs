//! Shape payloads and their `DrawList::push_*` helpers, one file per shape.

pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod path;
pub(crate) mod rounded_rect;
pub(crate) mod text;
pub(crate) mod text_on_path;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use path::PathCmd;
pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;
pub use text_on_path::TextOnPathCmd;
