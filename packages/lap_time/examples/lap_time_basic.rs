//! Simplified example demonstrating the key `lap_time` operations.
//!
//! This example shows the two ways a [`Stopwatch`] is used:
//! - as a deadline: poll `has_elapsed()` against a configured threshold
//! - as a lap timer: capture intervals with `lap()` and summarize them
//!
//! Run with: `cargo run --example lap_time_basic`.

use std::thread;
use std::time::Duration;

use lap_time::{Nanos, Stopwatch};

fn main() {
    println!(
        "lock-free tick storage on this target: {}",
        Stopwatch::<Nanos>::IS_LOCK_FREE
    );
    println!();

    println!("=== Deadline polling ===");

    let watch = Stopwatch::<Nanos>::new(Duration::from_millis(20));
    watch.reset();

    let mut polls = 0_u32;
    while !watch.has_elapsed() {
        polls = polls.saturating_add(1);
        thread::sleep(Duration::from_millis(1));
    }
    println!(
        "threshold of {:?} elapsed after {polls} polls ({:?} measured)",
        watch.threshold(),
        watch.elapsed()
    );
    println!();

    println!("=== Lap statistics ===");

    let laps = Stopwatch::<Nanos>::new(Duration::ZERO);
    laps.reset();

    for step in 1..=5_u64 {
        // Simulate work that gets slower every iteration.
        thread::sleep(Duration::from_millis(step.saturating_mul(2)));
        laps.lap();
    }

    println!("laps recorded: {}", laps.lap_count());
    println!("mean lap:      {:?}", laps.mean());
    println!("total time:    {:?}", laps.total());
    println!("summary:       {laps}");
}
