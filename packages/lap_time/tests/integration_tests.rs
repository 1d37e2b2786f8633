//! Integration tests for `lap_time` against the real clock.
//!
//! Timing assertions here use generous bounds: the real clock only ever moves
//! forward, so we assert on ordering and lower bounds, never exact values.

#![cfg(not(miri))] // Miri cannot talk to the real platform.

use std::thread;
use std::time::Duration;

use lap_time::{Micros, Nanos, Stopwatch};

#[test]
fn threshold_is_returned_as_configured() {
    for ticks in [0, 1, 42, 1_000_000] {
        let watch = Stopwatch::<Nanos>::from_ticks(ticks);
        assert_eq!(watch.threshold_ticks(), ticks);
    }
}

#[test]
fn threshold_elapses_after_sleeping_past_it() {
    let watch = Stopwatch::<Nanos>::new(Duration::from_millis(10));
    watch.reset();

    thread::sleep(Duration::from_millis(25));

    assert!(watch.has_elapsed());
    assert!(watch.elapsed() >= Duration::from_millis(10));
}

#[test]
fn zero_threshold_elapses_immediately() {
    let watch = Stopwatch::<Nanos>::new(Duration::ZERO);
    watch.reset();

    assert!(watch.has_elapsed());
}

#[test]
fn large_threshold_does_not_elapse_immediately() {
    let watch = Stopwatch::<Nanos>::new(Duration::from_secs(3600));
    watch.reset();

    assert!(!watch.has_elapsed());
}

#[test]
fn laps_accumulate_statistics() {
    let watch = Stopwatch::<Nanos>::new(Duration::ZERO);
    watch.reset();

    for _ in 0..3 {
        thread::sleep(Duration::from_millis(2));
        watch.lap();
    }

    assert_eq!(watch.lap_count(), 3);
    // Each lap slept at least 2ms, so the mean and total have known floors.
    assert!(watch.mean() >= Duration::from_millis(2));
    assert!(watch.total() >= Duration::from_millis(6));
    assert!(watch.total_ticks() >= watch.average_ticks());
}

#[test]
fn microsecond_unit_reports_in_microseconds() {
    let watch = Stopwatch::<Micros>::new(Duration::from_millis(1));
    assert_eq!(watch.threshold_ticks(), 1_000);

    watch.reset();
    thread::sleep(Duration::from_millis(5));

    // At least 5000 microsecond ticks must have passed.
    assert!(watch.elapsed_ticks() >= 5_000);
}

#[test]
fn clone_is_an_independent_instance() {
    let watch = Stopwatch::<Nanos>::new(Duration::from_millis(1));
    watch.reset();
    thread::sleep(Duration::from_millis(2));
    watch.lap();

    let snapshot = watch.clone();
    assert_eq!(snapshot.threshold_ticks(), watch.threshold_ticks());
    assert_eq!(snapshot.lap_count(), 1);

    watch.lap();

    assert_eq!(watch.lap_count(), 2);
    assert_eq!(snapshot.lap_count(), 1);
}
