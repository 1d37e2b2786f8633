//! Lock-free elapsed-time measurement with lap statistics.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Mutex;
use std::time::Duration;

use crate::ERR_POISONED_LOCK;
use crate::pal::{TimeSource, TimeSourceFacade};
use crate::tick_cell::TickCell;
use crate::units::{Nanos, TickUnit};

/// Measures elapsed time against a configured threshold and accumulates
/// completed-interval samples for statistical summary.
///
/// The stopwatch holds two atomically-stored tick values: the `threshold` it
/// compares elapsed time against and the `start_mark` taken at the most recent
/// reset. Polling operations ([`has_elapsed`](Self::has_elapsed),
/// [`elapsed`](Self::elapsed)) touch only those cells and a clock read, so any
/// number of threads can call them concurrently without taking a lock. The lap
/// sample log is the one mutex-guarded piece of state, because a multi-value
/// append plus a full-scan average cannot be done atomically.
///
/// Tick values are counted in the unit `U`, nanoseconds by default. The unit is
/// fixed at compile time; every `u64` this type returns is a count of `U` ticks.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use lap_time::{Nanos, Stopwatch};
///
/// let watch = Stopwatch::<Nanos>::new(Duration::from_millis(10));
/// watch.reset();
///
/// while !watch.has_elapsed() {
///     // ... keep working until the budget runs out ...
///     # break;
/// }
/// ```
///
/// Capturing laps:
///
/// ```
/// use std::time::Duration;
///
/// use lap_time::{Nanos, Stopwatch};
///
/// let watch = Stopwatch::<Nanos>::new(Duration::ZERO);
/// watch.reset();
///
/// for _ in 0..4 {
///     // ... one unit of measured work ...
///     watch.lap();
/// }
///
/// assert_eq!(watch.lap_count(), 4);
/// let _mean_ticks = watch.average_ticks();
/// ```
///
/// # Thread safety
///
/// Two races are part of the contract and deliberately not serialized, because
/// fixing either would put a lock on the hot timing path:
///
/// - [`reset_with`](Self::reset_with) and [`Clone`] update `threshold` and
///   `start_mark` as two independent atomic stores. A concurrent reader can
///   observe the new start mark paired with the old threshold, or vice versa,
///   for the duration of one probe.
/// - [`lap`](Self::lap) captures the elapsed time, appends it to the sample log
///   and then resets, as three separate steps. A concurrent
///   [`has_elapsed`](Self::has_elapsed) caller can observe the in-between state.
///
/// Both produce a single transiently stale reading, never a torn value and
/// never undefined behavior. Concurrent resets race last-store-wins.
pub struct Stopwatch<U: TickUnit = Nanos> {
    threshold: TickCell,
    start_mark: TickCell,
    samples: Mutex<Vec<Duration>>,
    time_source: TimeSourceFacade,
    _unit: PhantomData<U>,
}

impl<U: TickUnit> Stopwatch<U> {
    /// Whether the tick cells use the lock-free storage encoding on this target.
    ///
    /// When this is `false` the stopwatch still works, but loads and stores of
    /// the threshold and start mark may take an internal lock.
    pub const IS_LOCK_FREE: bool = TickCell::IS_LOCK_FREE;

    /// Creates a stopwatch with the given threshold.
    ///
    /// A zero threshold means "unused as a deadline":
    /// [`has_elapsed`](Self::has_elapsed) reports `true` immediately.
    ///
    /// No clock read occurs at construction; the start mark stays at the zero
    /// tick until the first [`reset`](Self::reset).
    #[must_use]
    pub fn new(threshold: Duration) -> Self {
        Self::from_ticks(U::ticks_from(threshold))
    }

    /// Creates a stopwatch with the threshold given as a raw tick count.
    #[must_use]
    pub fn from_ticks(threshold: u64) -> Self {
        Self::with_time_source(threshold, TimeSourceFacade::real())
    }

    pub(crate) fn with_time_source(threshold: u64, time_source: TimeSourceFacade) -> Self {
        Self {
            threshold: TickCell::new(threshold),
            start_mark: TickCell::new(0),
            samples: Mutex::new(Vec::new()),
            time_source,
            _unit: PhantomData,
        }
    }

    fn now_ticks(&self) -> u64 {
        U::ticks_from(self.time_source.since_epoch())
    }

    /// Whether at least the threshold has passed since the last reset.
    ///
    /// No side effects; may be called concurrently from any number of threads.
    /// With a zero threshold this is always `true`.
    #[must_use]
    pub fn has_elapsed(&self) -> bool {
        self.elapsed_ticks() >= self.threshold.load()
    }

    /// Begins a new measurement interval, keeping the current threshold.
    ///
    /// Stores the current clock reading as the new start mark.
    pub fn reset(&self) {
        self.reset_with(Duration::ZERO);
    }

    /// Begins a new measurement interval and, when `new_threshold` is non-zero,
    /// replaces the threshold.
    ///
    /// A zero `new_threshold` (including any duration shorter than one tick,
    /// which truncates to zero) leaves the threshold unchanged, so this is
    /// equivalent to [`reset`](Self::reset) in that case.
    ///
    /// Concurrent resets from different threads race to decide the new
    /// interval's start; the last store wins.
    pub fn reset_with(&self, new_threshold: Duration) {
        let ticks = U::ticks_from(new_threshold);
        if ticks != 0 {
            self.threshold.store(ticks);
        }
        self.start_mark.store(self.now_ticks());
    }

    /// The time elapsed since the last reset.
    ///
    /// Reads the clock without mutating any state. The result is truncated to
    /// whole ticks of `U`.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        U::duration_from(self.elapsed_ticks())
    }

    /// The time elapsed since the last reset, as a raw tick count.
    ///
    /// A probe that races a concurrent reset can observe a start mark newer
    /// than its own clock reading; the subtraction saturates to zero rather
    /// than wrapping.
    #[must_use]
    pub fn elapsed_ticks(&self) -> u64 {
        self.now_ticks().saturating_sub(self.start_mark.load())
    }

    /// Captures the current interval into the sample log and immediately
    /// starts the next one.
    ///
    /// This is the "lap" operation: the elapsed time is recorded, then the
    /// start mark is reset to now with the threshold left unchanged. The
    /// append and the reset are separate steps; see the race notes on
    /// [`Stopwatch`].
    pub fn lap(&self) {
        let sample = self.elapsed();
        // The lock is scoped to the append alone, never across a clock read.
        self.samples.lock().expect(ERR_POISONED_LOCK).push(sample);
        self.reset();
    }

    /// The number of laps recorded since construction.
    ///
    /// The sample log never shrinks, so this count only grows.
    #[must_use]
    pub fn lap_count(&self) -> u64 {
        let samples = self.samples.lock().expect(ERR_POISONED_LOCK);
        u64::try_from(samples.len()).expect("sample counts fit in u64")
    }

    /// The average recorded lap, as a raw tick count.
    ///
    /// With an empty sample log this returns 0: the sum is divided by a
    /// divisor clamped to at least one rather than signaling an error, since
    /// "no samples yet" is an ordinary state for a telemetry counter.
    #[must_use]
    pub fn average_ticks(&self) -> u64 {
        let samples = self.samples.lock().expect(ERR_POISONED_LOCK);

        let total = samples
            .iter()
            .map(|sample| U::ticks_from(*sample))
            .fold(0_u64, u64::saturating_add);
        let divisor = u64::try_from(samples.len())
            .expect("sample counts fit in u64")
            .max(1);

        total
            .checked_div(divisor)
            .expect("divisor is clamped to at least one")
    }

    /// The average recorded lap as a duration.
    ///
    /// Returns the zero duration when no laps have been recorded.
    #[must_use]
    pub fn mean(&self) -> Duration {
        U::duration_from(self.average_ticks())
    }

    /// The sum of all recorded laps, as a raw tick count.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    #[must_use]
    pub fn total_ticks(&self) -> u64 {
        let samples = self.samples.lock().expect(ERR_POISONED_LOCK);

        samples
            .iter()
            .map(|sample| U::ticks_from(*sample))
            .fold(0_u64, u64::saturating_add)
    }

    /// The sum of all recorded laps as a duration.
    #[must_use]
    pub fn total(&self) -> Duration {
        U::duration_from(self.total_ticks())
    }

    /// The configured threshold, as a raw tick count.
    ///
    /// This is a configuration read, not a measurement.
    #[must_use]
    pub fn threshold_ticks(&self) -> u64 {
        self.threshold.load()
    }

    /// The configured threshold as a duration.
    #[must_use]
    pub fn threshold(&self) -> Duration {
        U::duration_from(self.threshold.load())
    }
}

impl<U: TickUnit> Clone for Stopwatch<U> {
    /// Clones through the atomic accessors: acquire-loads of the source's
    /// threshold and start mark, and a copy of the sample log taken under its
    /// lock. The two cells are not read as a single atomic unit; cloning while
    /// another thread resets the source can capture a mixed pair (see the race
    /// notes on [`Stopwatch`]).
    fn clone(&self) -> Self {
        Self {
            threshold: TickCell::new(self.threshold.load()),
            start_mark: TickCell::new(self.start_mark.load()),
            samples: Mutex::new(self.samples.lock().expect(ERR_POISONED_LOCK).clone()),
            time_source: self.time_source.clone(),
            _unit: PhantomData,
        }
    }
}

impl<U: TickUnit> fmt::Debug for Stopwatch<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stopwatch")
            .field("threshold", &self.threshold)
            .field("start_mark", &self.start_mark)
            .field("lap_count", &self.lap_count())
            .finish_non_exhaustive()
    }
}

impl<U: TickUnit> fmt::Display for Stopwatch<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (mean of {} laps)", self.mean(), self.lap_count())
    }
}
