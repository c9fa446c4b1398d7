mod clock;
mod speed;
mod stopwatch;

pub use crate::clock::{ManualClock, MonotonicClock, SystemClock};
pub use crate::speed::{SpeedCell, relative_cost, relative_speed};
pub use crate::stopwatch::{Stopwatch, StopwatchGuard};
