//! Benchmark comparing stopwatch probes with raw `std::time::Instant` reads.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lap_time::{Nanos, Stopwatch};

/// Benchmark group comparing the cost of one timing probe.
fn probe_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_probe");

    let watch = Stopwatch::<Nanos>::new(Duration::from_secs(1));
    watch.reset();

    // Baseline: a raw monotonic clock read.
    group.bench_with_input(BenchmarkId::new("std_instant", "now"), &(), |b, ()| {
        b.iter(|| {
            let instant = black_box(Instant::now());
            black_box(instant);
        });
    });

    // One deadline probe: clock read plus two atomic loads.
    group.bench_with_input(BenchmarkId::new("stopwatch", "has_elapsed"), &(), |b, ()| {
        b.iter(|| {
            let elapsed = black_box(watch.has_elapsed());
            black_box(elapsed);
        });
    });

    // One elapsed-ticks read: clock read plus one atomic load.
    group.bench_with_input(
        BenchmarkId::new("stopwatch", "elapsed_ticks"),
        &(),
        |b, ()| {
            b.iter(|| {
                let ticks = black_box(watch.elapsed_ticks());
                black_box(ticks);
            });
        },
    );

    group.finish();
}

criterion_group!(benches, probe_comparison);
criterion_main!(benches);
