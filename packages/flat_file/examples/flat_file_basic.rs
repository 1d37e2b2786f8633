//! Simplified example demonstrating the two failure-reporting policies.
//!
//! Run with: `cargo run --example flat_file_basic`.

use flat_file::{FailurePolicy, FileSaver, SaveOnce};

fn main() {
    // Route log-policy failures to stderr so they are visible below.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("report.bin");

    println!("=== Propagate policy ===");

    let saver = FileSaver::new(FailurePolicy::Propagate);
    match saver.save(&path, b"ABC") {
        Ok(()) => println!("wrote 3 bytes to {}", path.display()),
        Err(error) => println!("save failed: {error}"),
    }

    // An empty payload is one of the three failure conditions.
    match saver.save(&path, &[]) {
        Ok(()) => println!("unexpected success"),
        Err(error) => println!("save failed as expected: {error}"),
    }
    println!();

    println!("=== Log policy ===");

    // The same failure only emits an error event; control flow continues.
    let lenient = FileSaver::new(FailurePolicy::Log);
    let result = lenient.save(&path, &[]);
    println!("call returned: {result:?}");
    println!();

    println!("=== One-time save ===");

    let token = SaveOnce::new();
    for attempt in 1..=3 {
        if token.begin() {
            println!("attempt {attempt}: performed the save");
        } else {
            println!("attempt {attempt}: already saved, skipping");
        }
    }
}
