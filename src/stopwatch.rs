use crate::clock::{MonotonicClock, SystemClock};
use std::fmt;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// A resettable stopwatch accumulating elapsed time across start/stop cycles.
///
/// Time spent between a `start` and its matching `stop` is committed to the
/// accumulated total on `stop`. Reading the elapsed value while running adds
/// the in-flight interval on the fly without mutating anything.
///
/// A single instance is not synchronized; keep one per thread or call stack.
#[derive(Debug, Clone)]
pub struct Stopwatch<C: MonotonicClock = SystemClock> {
    clock: C,
    accumulated_ns: u64,
    start_ns: u64,
    start_count: u64,
    running: bool,
}

impl Stopwatch {
    /// Create a stopwatch on the system clock, optionally started immediately.
    pub fn new(autostart: bool) -> Self {
        Self::with_clock(SystemClock, autostart)
    }
}

impl<C: MonotonicClock> Stopwatch<C> {
    pub fn with_clock(clock: C, autostart: bool) -> Self {
        let mut watch = Self {
            clock,
            accumulated_ns: 0,
            start_ns: 0,
            start_count: 0,
            running: false,
        };
        if autostart {
            watch.start();
        }
        watch
    }

    /// Start the stopwatch.
    ///
    /// Starting while already running restarts the open interval: the time
    /// since the previous `start` is discarded, not accumulated. Intervals
    /// never nest. Every call counts toward [`Self::start_count`].
    #[inline(always)]
    pub fn start(&mut self) {
        self.start_ns = self.clock.now_nanos();
        self.start_count += 1;
        self.running = true;
    }

    /// Stop the stopwatch and commit the open interval to the accumulated
    /// total. Stopping an already-stopped stopwatch is a no-op.
    #[inline(always)]
    pub fn stop(&mut self) {
        if self.running {
            self.accumulated_ns += self.clock.now_nanos() - self.start_ns;
            self.running = false;
        }
    }

    /// Elapsed nanoseconds, including the in-flight interval while running.
    #[inline(always)]
    pub fn elapsed_nanos(&self) -> u64 {
        if self.running {
            self.accumulated_ns + (self.clock.now_nanos() - self.start_ns)
        } else {
            self.accumulated_ns
        }
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_nanos() as f64 / NANOS_PER_SEC
    }

    /// Clear the accumulated total. Running state, start count, and the open
    /// interval's anchor are untouched; a stopwatch reset while running keeps
    /// running and keeps measuring from its original start point.
    pub fn reset(&mut self) {
        self.accumulated_ns = 0;
    }

    /// Number of times `start` has been called since construction.
    pub fn start_count(&self) -> u64 {
        self.start_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start and return a guard that stops the stopwatch when dropped.
    pub fn start_guard(&mut self) -> StopwatchGuard<'_, C> {
        self.start();
        StopwatchGuard { watch: self }
    }
}

impl<C: MonotonicClock> fmt::Display for Stopwatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}s", self.elapsed_secs())
    }
}

/// Scope guard for a borrowed stopwatch; commits the interval on drop.
pub struct StopwatchGuard<'a, C: MonotonicClock> {
    watch: &'a mut Stopwatch<C>,
}

impl<C: MonotonicClock> Drop for StopwatchGuard<'_, C> {
    fn drop(&mut self) {
        self.watch.stop();
    }
}
