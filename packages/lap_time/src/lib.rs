#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Elapsed-time measurement for instrumenting performance-critical code paths.
//!
//! This package provides a [`Stopwatch`] that wraps a monotonic clock behind two
//! atomically-stored tick values, so that any number of threads can poll it without
//! taking a lock on the hot path. Completed intervals can be captured into a sample
//! log for later statistical summary (count, average, total).
//!
//! The core functionality includes:
//! - [`Stopwatch`] - Polls a configured deadline and captures lap samples
//! - [`TickUnit`] - Compile-time choice of the time unit ticks are counted in
//! - [`Nanos`], [`Micros`], [`Millis`], [`Seconds`] - The provided tick units
//!
//! # Deadline polling
//!
//! ```
//! use std::time::Duration;
//!
//! use lap_time::{Nanos, Stopwatch};
//!
//! let watch = Stopwatch::<Nanos>::new(Duration::from_millis(5));
//! watch.reset();
//!
//! // ... the code being instrumented ...
//!
//! if watch.has_elapsed() {
//!     println!("budget exceeded after {:?}", watch.elapsed());
//! }
//! ```
//!
//! # Lap statistics
//!
//! Each [`lap()`](Stopwatch::lap) captures the current interval into the sample log
//! and immediately starts the next one:
//!
//! ```
//! use std::time::Duration;
//!
//! use lap_time::{Nanos, Stopwatch};
//!
//! let watch = Stopwatch::<Nanos>::new(Duration::ZERO);
//! watch.reset();
//!
//! for _ in 0..3 {
//!     // ... one unit of the work being measured ...
//!     watch.lap();
//! }
//!
//! assert_eq!(watch.lap_count(), 3);
//! println!("mean {:?} over total {:?}", watch.mean(), watch.total());
//! ```
//!
//! # Tick units
//!
//! Ticks are counted in nanoseconds by default. The unit is a type parameter fixed
//! at compile time, so all `u64` tick values a stopwatch returns share one unit:
//!
//! ```
//! use lap_time::{Micros, Stopwatch};
//!
//! // A 1000-tick threshold in microsecond units is one millisecond.
//! let watch = Stopwatch::<Micros>::from_ticks(1_000);
//! assert_eq!(watch.threshold_ticks(), 1_000);
//! ```
//!
//! # Threading
//!
//! A [`Stopwatch`] may be shared across any number of concurrent reader and writer
//! threads without external synchronization. The deadline and start-mark fields are
//! individually atomic but are not updated as a single atomic unit; the documented
//! races on [`Stopwatch`] are benign for timing/telemetry use and are part of the
//! contract.

mod pal;
mod stopwatch;
mod tick_cell;
mod units;

pub use stopwatch::Stopwatch;
pub use units::{Micros, Millis, Nanos, Seconds, TickUnit};

// A poisoned sample-log lock means a writer panicked mid-append and the recorded
// statistics can no longer be trusted (we panic).
pub(crate) const ERR_POISONED_LOCK: &str =
    "encountered poisoned lock - the sample log is no longer trustworthy";
