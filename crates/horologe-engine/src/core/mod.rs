//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application: wake-up scheduling, per-frame context, exit control.

mod app;
mod ctx;

pub use app::{App, AppControl, IdleAction};
pub use ctx::{FrameCtx, WindowCtx};
