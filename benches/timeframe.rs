use criterion::{Criterion, criterion_group, criterion_main};
use jiff::Timestamp;
use notam_flags::Config;
use notam_flags::timeframe::{closed_for_time_frame, is_time_frame_active};
use std::hint::black_box;

fn timeframe_benchmark(c: &mut Criterion) {
    let now: Timestamp = "2025-07-03T12:00:00Z".parse().unwrap();
    let config = Config::default();

    c.bench_function("is_time_frame_active", |b| {
        b.iter(|| {
            is_time_frame_active(
                black_box("AERODROME CLSD 1 JUL 0700Z - 5 JUL 1300Z"),
                black_box(now),
            )
        });
    });

    c.bench_function("closed_for_time_frame", |b| {
        b.iter(|| {
            closed_for_time_frame(
                black_box("RWY 15/33 CLSD MON-FRI 0700-1900, SAT AND SUN 0800-1200"),
                black_box(now),
                &config,
            )
        });
    });
}

criterion_group!(benches, timeframe_benchmark);
criterion_main!(benches);
