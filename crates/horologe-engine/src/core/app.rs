use std::time::Instant;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// What the runtime should do before it goes back to sleep.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct IdleAction {
    /// Request one redraw now.
    pub redraw: bool,
    /// Wake the loop at this instant. `None` sleeps until the next event.
    pub wake_at: Option<Instant>,
}

impl IdleAction {
    #[inline]
    pub fn sleep_until(wake_at: Option<Instant>) -> Self {
        Self { redraw: false, wake_at }
    }

    #[inline]
    #[must_use]
    pub fn with_redraw(mut self, redraw: bool) -> Self {
        self.redraw |= redraw;
        self
    }
}

/// Application contract implemented by the binary.
pub trait App {
    /// Called each time the event loop is about to sleep.
    ///
    /// `now` is the wake-up instant. Default: never redraw on idle, sleep until input.
    fn on_idle(&mut self, now: Instant) -> IdleAction {
        let _ = now;
        IdleAction::default()
    }

    /// Called once per redraw. Input collected since the last frame is in `ctx`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
