use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

static PROCESS_EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// A monotonic time source, read as nanoseconds since a fixed arbitrary epoch.
///
/// Readings never decrease. Only relative ordering matters; the epoch itself
/// carries no meaning.
pub trait MonotonicClock {
    fn now_nanos(&self) -> u64;
}

/// Production clock backed by `Instant`, relative to a process-wide epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl MonotonicClock for SystemClock {
    #[inline(always)]
    fn now_nanos(&self) -> u64 {
        PROCESS_EPOCH.elapsed().as_nanos() as u64
    }
}

/// Deterministic clock for tests. Clones share the same underlying counter,
/// so a test can advance time while a stopwatch holds its own handle.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.nanos.fetch_add(by.as_nanos() as u64, Ordering::Relaxed);
    }
}

impl MonotonicClock for ManualClock {
    #[inline(always)]
    fn now_nanos(&self) -> u64 {
        self.nanos.load(Ordering::Relaxed)
    }
}
