//! Fake time source for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::TimeSource;

/// Fake implementation of the time source for testing.
///
/// This implementation lets tests control the clock explicitly instead of
/// relying on the real one. Multiple clones of the same `FakeTimeSource` share
/// the same underlying reading, allowing tests to advance time after handing
/// the source to a stopwatch.
#[derive(Clone, Debug)]
pub(crate) struct FakeTimeSource {
    now: Arc<Mutex<Duration>>,
}

impl FakeTimeSource {
    /// Creates a fake clock whose reading starts at zero.
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Moves the clock forward.
    ///
    /// This affects all clones of this source, allowing tests to simulate
    /// time progression during measurement.
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakeTimeSource reading lock should not be poisoned");
        *now = now
            .checked_add(by)
            .expect("fake clock advanced beyond the representable range");
    }
}

impl TimeSource for FakeTimeSource {
    fn since_epoch(&self) -> Duration {
        *self
            .now
            .lock()
            .expect("FakeTimeSource reading lock should not be poisoned")
    }
}
