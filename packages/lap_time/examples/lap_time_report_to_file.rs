//! Example capturing lap statistics and saving the summary with `flat_file`.
//!
//! This demonstrates the intended pairing: the stopwatch aggregates, the file
//! saver persists, and the caller chooses how save failures are reported.
//!
//! Run with: `cargo run --example lap_time_report_to_file`.

use std::fmt::Write;
use std::thread;
use std::time::Duration;

use flat_file::{FailurePolicy, FileSaver};
use lap_time::{Nanos, Stopwatch};

fn main() {
    let watch = Stopwatch::<Nanos>::new(Duration::ZERO);
    watch.reset();

    for step in 1..=4_u64 {
        thread::sleep(Duration::from_millis(step));
        watch.lap();
    }

    let mut report = String::new();
    writeln!(report, "laps:    {}", watch.lap_count()).expect("writing to a String cannot fail");
    writeln!(report, "mean:    {:?}", watch.mean()).expect("writing to a String cannot fail");
    writeln!(report, "total:   {:?}", watch.total()).expect("writing to a String cannot fail");

    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("lap_report.txt");

    // Propagate here: losing the report should be loud in this embedding.
    let saver = FileSaver::new(FailurePolicy::Propagate);
    match saver.save(&path, report.as_bytes()) {
        Ok(()) => println!("saved report to {}:\n{report}", path.display()),
        Err(error) => eprintln!("could not save report: {error}"),
    }
}
