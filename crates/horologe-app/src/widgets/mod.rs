//! Immediate-mode controls for the settings screen.
//!
//! Widgets hold no state between frames. Each frame the screen builds them
//! from the current settings, records them into the draw list, and routes
//! clicks through their `hit` methods.

mod segmented;
mod toggle;

pub use segmented::Segmented;
pub use toggle::Toggle;
