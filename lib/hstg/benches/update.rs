use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hstg::{Codec, Histogram};
use rand::SeedableRng;
use rand_distr::{Distribution, Pareto};

fn make_points(size: usize) -> Vec<u64> {
    // Latencies of a typical web service, in microseconds, between 15 milliseconds and 10 seconds.
    let distribution = Pareto::new(1.0, 1.0).expect("pareto distribution should be valid");
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xC0FFEE);
    distribution
        .sample_iter(&mut rng)
        .map(|n: f64| n * 10_000.0)
        .filter(|n| *n > 15_000.0 && *n < 10_000_000.0)
        .take(size)
        .map(|n| n as u64)
        .collect()
}

fn fill(codec: Codec, points: &[u64]) -> Histogram {
    let mut histogram = Histogram::new(codec);
    for point in points {
        histogram.update(*point);
    }
    histogram
}

fn bench_codec(c: &mut Criterion, name: &str, codec: Codec) {
    let sizes = [10, 100, 1_000, 10_000];

    let mut group = c.benchmark_group(format!("{}/update-unsorted", name));
    for size in sizes.iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let points = make_points(size);
            b.iter(|| fill(codec, &points));
        });
    }
    group.finish();

    let mut group = c.benchmark_group(format!("{}/update-sorted", name));
    for size in sizes.iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut points = make_points(size);
            points.sort_unstable();
            b.iter(|| fill(codec, &points));
        });
    }
    group.finish();

    let mut group = c.benchmark_group(format!("{}/percentile", name));
    for size in sizes.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let histogram = fill(codec, &make_points(size));
            b.iter(|| histogram.percentile(99.0));
        });
    }
    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    bench_codec(c, "linear", Codec::linear(1_000).expect("bin width should be valid"));
    bench_codec(c, "logarithmic", Codec::logarithmic(2).expect("log base should be valid"));
}

criterion_group!(benches, bench_histogram);
criterion_main!(benches);
