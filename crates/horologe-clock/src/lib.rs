//! Analog clock model and renderer.
//!
//! A [`TimeSource`] produces an immutable [`TimeSnapshot`] once per second.
//! [`ClockRenderer`] turns a snapshot, a [`ClockConfiguration`] and a
//! [`ColorPalette`] into draw commands for a square face. Rendering is a pure
//! function of those three inputs.

mod angles;
mod config;
mod palette;
mod snapshot;
mod source;

pub mod render;

pub use angles::{hour_angle, minute_angle, second_angle, HandAngles};
pub use config::{ClockConfiguration, ClockShape, DEFAULT_FACE_DIAMETER};
pub use palette::ColorPalette;
pub use render::ClockRenderer;
pub use snapshot::{SnapshotError, TimeSnapshot};
pub use source::{SystemClock, TimeSource, WallClock, TICK_PERIOD};
