//! Time subsystem.
//!
//! A [`Ticker`] is a cooperative periodic timer: it owns no thread, the event
//! loop sleeps until [`Ticker::deadline`] and then calls [`Ticker::poll`].
//! All methods take an explicit `Instant` so schedules are testable.

mod ticker;

pub use ticker::Ticker;
