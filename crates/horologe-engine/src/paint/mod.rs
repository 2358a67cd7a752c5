//! Paint model shared between the scene and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - stroke styling for open paths and lines
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod stroke;

pub use color::Color;
pub use stroke::{LineCap, Stroke};
