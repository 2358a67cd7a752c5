//! Coordinate and geometry types shared by the scene, renderers and widgets.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//! - Positive rotation angles turn clockwise on screen
//!
//! The rasterizer multiplies every transform by the device scale factor.

mod affine;
mod path;
mod rect;
mod vec2;
mod viewport;

pub use affine::Affine;
pub use path::{Path, PathSeg};
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
