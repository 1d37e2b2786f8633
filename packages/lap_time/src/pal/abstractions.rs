//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides monotonic clock readings.
///
/// Readings are expressed as the time elapsed since a fixed epoch, so that
/// readings taken through different stopwatch instances (and their clones)
/// remain mutually comparable. Readings from the same source never decrease.
pub(crate) trait TimeSource: Debug + Send + Sync + 'static {
    /// The current reading of the clock, as time since the source's epoch.
    fn since_epoch(&self) -> Duration;
}
