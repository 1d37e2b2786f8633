//! Tick units: the compile-time choice of what one tick of a stopwatch means.

use std::fmt::Debug;
use std::time::Duration;

/// The time unit a [`Stopwatch`](crate::Stopwatch) counts ticks in.
///
/// Implementations convert between [`Duration`] and a whole number of ticks.
/// Conversions round down, so a duration shorter than one tick becomes zero ticks.
/// Tick counts that would not fit in a `u64` saturate at `u64::MAX`.
///
/// The provided units are [`Nanos`] (the default), [`Micros`], [`Millis`] and
/// [`Seconds`]. The trait is open; an embedding with an unusual time base can
/// supply its own unit.
pub trait TickUnit: Debug + Send + Sync + 'static {
    /// Converts a duration to a whole number of ticks, rounding down.
    fn ticks_from(duration: Duration) -> u64;

    /// Converts a tick count back to a duration.
    fn duration_from(ticks: u64) -> Duration;
}

/// Nanosecond ticks. The default unit.
#[derive(Clone, Copy, Debug)]
pub struct Nanos;

impl TickUnit for Nanos {
    fn ticks_from(duration: Duration) -> u64 {
        u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
    }

    fn duration_from(ticks: u64) -> Duration {
        Duration::from_nanos(ticks)
    }
}

/// Microsecond ticks.
#[derive(Clone, Copy, Debug)]
pub struct Micros;

impl TickUnit for Micros {
    fn ticks_from(duration: Duration) -> u64 {
        u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
    }

    fn duration_from(ticks: u64) -> Duration {
        Duration::from_micros(ticks)
    }
}

/// Millisecond ticks.
#[derive(Clone, Copy, Debug)]
pub struct Millis;

impl TickUnit for Millis {
    fn ticks_from(duration: Duration) -> u64 {
        u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
    }

    fn duration_from(ticks: u64) -> Duration {
        Duration::from_millis(ticks)
    }
}

/// Whole-second ticks.
#[derive(Clone, Copy, Debug)]
pub struct Seconds;

impl TickUnit for Seconds {
    fn ticks_from(duration: Duration) -> u64 {
        duration.as_secs()
    }

    fn duration_from(ticks: u64) -> Duration {
        Duration::from_secs(ticks)
    }
}
