//! GPU device + surface management.
//!
//! Owns the wgpu Instance/Adapter/Device/Queue and the window surface, and
//! hands out one encoder + color view per presented frame.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
