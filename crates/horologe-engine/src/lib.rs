//! Horologe engine crate.
//!
//! Geometry, the renderer-agnostic draw stream, CPU rasterization, and the
//! winit + wgpu runtime that puts frames on screen.

pub mod coords;
pub mod paint;
pub mod scene;
pub mod text;
pub mod render;

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
