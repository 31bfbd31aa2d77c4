#![allow(dead_code)]

use float_cmp::ApproxEqRatio as _;
use hstg::Histogram;
use rand::SeedableRng;
use rand_distr::{Distribution, Pareto};

pub fn make_points(size: usize) -> Vec<u64> {
    // Generate a set of samples that roughly correspond to the latency of a
    // typical web service, in microseconds: big hump at the beginning with a
    // long tail. We limit this so the samples represent latencies that bottom
    // out at 15 milliseconds and tail off all the way up to 10 seconds.
    let distribution = Pareto::new(1.0, 1.0).expect("pareto distribution should be valid");
    let seed = 0xC0FFEE;

    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    distribution
        .sample_iter(&mut rng)
        // Scale by 10,000 to get microseconds.
        .map(|n: f64| n * 10_000.0)
        .filter(|n| *n > 15_000.0 && *n < 10_000_000.0)
        .take(size)
        .map(|n| n as u64)
        .collect::<Vec<_>>()
}

pub fn fill(histogram: &mut Histogram, points: &[u64]) {
    for point in points {
        histogram.update(*point);
    }
}

/// Returns the smallest value such that at most `rank` percent of the sorted values are strictly below it.
pub fn exact_percentile(sorted: &[u64], rank: f64) -> u64 {
    let n = sorted.len();
    let idx = ((rank / 100.0) * n as f64).floor() as usize;
    sorted[idx.min(n - 1)]
}

/// Compares two floating-point values for approximate equality.
pub fn float_eq(l_value: f64, r_value: f64) -> bool {
    const RATIO_ERROR: f64 = 0.00000001;

    l_value == r_value || l_value.approx_eq_ratio(&r_value, RATIO_ERROR)
}
