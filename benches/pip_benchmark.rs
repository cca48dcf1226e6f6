use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use polypip::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeSet;

const NUM_POINTS: usize = 1_000_000;

fn star() -> Polygon64 {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(30.0, 50.0),
        Point::new(0.0, 100.0),
        Point::new(50.0, 70.0),
        Point::new(100.0, 100.0),
        Point::new(70.0, 50.0),
        Point::new(100.0, 0.0),
        Point::new(50.0, 30.0),
    ])
    .expect("valid polygon")
}

fn square() -> Polygon64 {
    Polygon::new(vec![
        Point::new(1.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, 2.0),
        Point::new(2.0, 1.0),
    ])
    .expect("valid polygon")
}

fn random_points(count: usize) -> Vec<Point64> {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    (0..count)
        .map(|_| Point::new(100.0 * rng.gen::<f64>(), 100.0 * rng.gen::<f64>()))
        .collect()
}

fn generate_timed<F, T>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = std::time::Instant::now();
    let data = f();
    let elapsed = start.elapsed();
    let elapsed_sec = elapsed.as_millis() as f64 / 1000.0;
    println!("Generating {} took {}s", label, elapsed_sec);
    data
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = generate_timed("random points", || random_points(NUM_POINTS));
    single_point_benchmark(c);
    batch_benchmark(c, &points);
}

fn single_point_benchmark(c: &mut Criterion) {
    let square = square();
    let probes = [
        Point::new(1.1, 1.1),
        Point::new(1.5, 1.5),
        Point::new(1.8, 1.8),
        Point::new(-4.9, 1.2),
        Point::new(10.0, 10.0),
        Point::new(-5.0, -6.0),
        Point::new(5.0, 6.0),
    ];
    c.bench_function("point_in_polygon square", |b| {
        b.iter(|| {
            for p in probes.iter() {
                black_box(point_in_polygon(black_box(p), &square));
            }
        })
    });
}

fn batch_benchmark(c: &mut Criterion, points: &[Point64]) {
    let star = star();
    let mut group = c.benchmark_group("Star Polygon");
    group.sample_size(10);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| points_in_polygon(black_box(points), &star))
    });
    for workers in worker_counts(max_available_parallelism()) {
        group.bench_with_input(
            BenchmarkId::new("parallel", workers),
            &workers,
            |b, &workers| {
                b.iter(|| {
                    points_in_polygon_parallel(black_box(points), &star, workers)
                        .expect("parallel run")
                })
            },
        );
    }
    group.finish();
}

/// Distinct worker counts that actually run with `max_workers` available.
///
/// Larger requests are clamped by the library and would only repeat `max_workers`.
fn worker_counts(max_workers: usize) -> BTreeSet<usize> {
    [1, 2, 7, max_workers]
        .into_iter()
        .filter(|&workers| workers <= max_workers)
        .collect()
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
