//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - carry a scoped transform stack so callers can rotate a group of commands
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList, TransformScope};
pub use shapes::{CircleCmd, LineCmd, PathCmd, RoundedRectCmd, TextCmd, TextOnPathCmd};
pub use z_index::ZIndex;
