use std::time::{Duration, Instant};

/// Fixed-delay periodic timer.
///
/// After each fire the next deadline is `fire_time + period`, so a late poll
/// fires once and the schedule shifts by the delay instead of catching up.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
    fired: u64,
}

impl Ticker {
    /// Creates a stopped ticker. A zero period is raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: None,
            fired: 0,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arms the ticker; the first fire is one period after `now`.
    ///
    /// Restarting a running ticker re-arms it from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    /// Disarms the ticker. `poll` returns `false` until the next `start`.
    pub fn stop(&mut self) {
        self.next = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Next fire time, or `None` when stopped.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Number of fires since creation.
    #[inline]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Fires if the deadline has passed. Returns `true` at most once per call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if now >= deadline => {
                self.next = Some(now + self.period);
                self.fired = self.fired.wrapping_add(1);
                true
            }
            _ => false,
        }
    }
}
