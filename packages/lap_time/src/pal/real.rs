//! Real time source backed by the standard library's monotonic clock.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use crate::pal::abstractions::TimeSource;

// One epoch for the whole process, initialized on first use. Readings taken
// through different stopwatch instances stay mutually comparable this way.
static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Monotonic clock readings relative to the process-wide epoch.
///
/// `std::time::Instant` is documented as monotonic on every supported platform,
/// so no separate steady-clock substitute is needed here.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RealTimeSource;

impl RealTimeSource {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TimeSource for RealTimeSource {
    #[cfg_attr(test, mutants::skip)] // Wall-clock readings cannot be asserted on exactly - manually tested.
    fn since_epoch(&self) -> Duration {
        EPOCH.elapsed()
    }
}
