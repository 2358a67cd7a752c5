use std::time::{Duration, Instant};

use horologe_engine::time::Ticker;

use crate::TimeSnapshot;

/// Interval between snapshots.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Reads the current wall-clock time.
///
/// Reading is infallible. Closures returning a snapshot implement this, so
/// tests can script the clock.
pub trait WallClock {
    fn now(&self) -> TimeSnapshot;
}

/// Local time from the operating system.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> TimeSnapshot {
        TimeSnapshot::from_datetime(&chrono::Local::now())
    }
}

impl<F> WallClock for F
where
    F: Fn() -> TimeSnapshot,
{
    fn now(&self) -> TimeSnapshot {
        self()
    }
}

type Callback = Box<dyn FnMut(TimeSnapshot)>;

/// Publishes a fresh [`TimeSnapshot`] once per [`TICK_PERIOD`].
///
/// The source owns no thread. The event loop sleeps until
/// [`next_deadline`](Self::next_deadline) and then calls [`poll`](Self::poll),
/// which reads the clock and invokes the callback. Scheduling is fixed-delay:
/// a late poll fires once and the next tick is one period after it.
pub struct TimeSource<C: WallClock = SystemClock> {
    clock: C,
    ticker: Ticker,
    callback: Option<Callback>,
    latest: TimeSnapshot,
}

impl TimeSource<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimeSource<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: WallClock> TimeSource<C> {
    /// Creates a stopped source. [`latest`](Self::latest) is read immediately.
    pub fn with_clock(clock: C) -> Self {
        let latest = clock.now();
        Self { clock, ticker: Ticker::new(TICK_PERIOD), callback: None, latest }
    }

    /// Starts ticking from now. Replaces any previous callback.
    pub fn start(&mut self, callback: impl FnMut(TimeSnapshot) + 'static) {
        self.start_at(Instant::now(), callback);
    }

    /// Starts ticking with the first tick one period after `now`.
    pub fn start_at(&mut self, now: Instant, callback: impl FnMut(TimeSnapshot) + 'static) {
        self.callback = Some(Box::new(callback));
        self.ticker.start(now);
        log::debug!("TimeSource: started, period {:?}", self.ticker.period());
    }

    /// Cancels the timer and drops the callback.
    pub fn stop(&mut self) {
        if self.ticker.is_running() {
            log::debug!("TimeSource: stopped after {} ticks", self.ticker.fired());
        }
        self.ticker.stop();
        self.callback = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// When the next tick is due, or `None` when stopped.
    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    /// Most recent snapshot (the one read at construction before the first tick).
    #[inline]
    pub fn latest(&self) -> TimeSnapshot {
        self.latest
    }

    /// Ticks if due. Returns `true` when a new snapshot was published.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }

        let snapshot = self.clock.now();
        log::debug!("{snapshot}");
        self.latest = snapshot;

        if let Some(callback) = self.callback.as_mut() {
            callback(snapshot);
        }
        true
    }
}

impl<C: WallClock> Drop for TimeSource<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
