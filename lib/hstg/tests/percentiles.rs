//! Percentile accuracy over a realistic latency distribution.

use hstg::{BinCodec as _, Histogram};

use crate::common::{exact_percentile, fill, float_eq, make_points};

mod common;

// Chosen so that `rank * 1_000 / 100` is never a whole number, which keeps the exact answer away from bin boundaries.
const RANKS: [f64; 8] = [0.05, 25.05, 50.05, 75.05, 90.05, 95.05, 99.05, 99.95];

fn assert_percentiles_match_bins(mut histogram: Histogram) {
    let points = make_points(1_000);
    let mut sorted = points.clone();
    sorted.sort_unstable();

    fill(&mut histogram, &points);
    assert_eq!(histogram.total_freq(), 1_000);

    let codec = *histogram.codec();
    for rank in RANKS {
        let exact = exact_percentile(&sorted, rank);
        let actual = histogram.percentile(rank).unwrap();
        assert_eq!(
            actual,
            codec.decode(codec.encode(exact)),
            "rank {}: exact value {} should fall in the returned bin",
            rank,
            exact
        );
        assert!(actual <= exact);
    }

    assert_eq!(histogram.percentile(0.0).unwrap(), codec.decode(codec.encode(sorted[0])));
    assert_eq!(histogram.percentile(100.0).unwrap(), codec.decode(codec.encode(sorted[999])));
}

#[test]
fn linear_unit_width() {
    assert_percentiles_match_bins(Histogram::linear(1).unwrap());
}

#[test]
fn linear_coarse_width() {
    for bin_width in [10, 1_000, 250_000] {
        assert_percentiles_match_bins(Histogram::linear(bin_width).unwrap());
    }
}

#[test]
fn logarithmic() {
    for log_base in [2, 3, 10] {
        assert_percentiles_match_bins(Histogram::logarithmic(log_base).unwrap());
    }
}

#[test]
fn logarithmic_bin_count_is_bounded() {
    let mut histogram = Histogram::logarithmic(2).unwrap();
    fill(&mut histogram, &make_points(10_000));

    // Every point is below 10 seconds, or 2^24 microseconds.
    assert!(histogram.bin_count() <= 24, "bin count {}", histogram.bin_count());
    assert_eq!(histogram.total_freq(), 10_000);
}

#[test]
fn ranks_accumulate_to_total() {
    let mut histogram = Histogram::linear(5_000).unwrap();
    fill(&mut histogram, &make_points(1_000));
    let total = histogram.total_freq();

    let mut iter = histogram.iter();
    let mut previous_rank = -1.0;
    while !iter.is_done() {
        let rank = iter.percentile_rank();
        assert!(rank > previous_rank);
        assert!(float_eq(rank, iter.cumulative_freq() as f64 / total as f64 * 100.0));

        previous_rank = rank;
        iter.advance();
    }

    assert_eq!(iter.cumulative_freq(), total);
}
