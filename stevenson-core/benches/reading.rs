//! Construction cost of a reading, including validation and all derivations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stevenson_core::{StevensonReading, WeatherReading};

fn bench_construction(c: &mut Criterion) {
    c.bench_function("reading_new", |b| {
        b.iter(|| {
            StevensonReading::new(
                black_box(23.432),
                black_box(12.123),
                black_box(3.3),
                black_box(12),
            )
        })
    });

    c.bench_function("reading_rejected", |b| {
        b.iter(|| StevensonReading::new(black_box(34.5), black_box(35.5), black_box(5.4), black_box(1)))
    });
}

fn bench_summary(c: &mut Criterion) {
    let reading = match StevensonReading::new(23.432, 12.123, 3.3, 12) {
        Ok(reading) => reading,
        Err(err) => panic!("benchmark fixture rejected: {err}"),
    };

    c.bench_function("reading_summary", |b| b.iter(|| black_box(&reading).summary()));
}

criterion_group!(benches, bench_construction, bench_summary);
criterion_main!(benches);
