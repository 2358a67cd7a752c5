//! Rendering subsystem.
//!
//! Draw lists are rasterized on the CPU into a [`Frame`] by the
//! [`Rasterizer`], then the [`Presenter`] uploads the frame to a wgpu texture
//! and copies it to the surface.
//!
//! Convention:
//! - scene geometry is in logical pixels (top-left origin, +Y down)
//! - frames are in physical pixels (`logical * scale_factor`)

mod ctx;
mod frame;
mod present;
mod raster;

pub use ctx::{RenderCtx, RenderTarget};
pub use frame::Frame;
pub use present::Presenter;
pub use raster::Rasterizer;
