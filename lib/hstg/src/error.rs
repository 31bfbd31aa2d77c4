//! Error types.

use snafu::Snafu;

/// Errors that can occur when constructing a codec.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CodecError {
    /// The bin width of a linear codec was zero.
    #[snafu(display("invalid bin width: {} (must be greater than zero)", bin_width))]
    InvalidBinWidth {
        /// The bin width that was given.
        bin_width: u64,
    },

    /// The logarithm base of a logarithmic codec was less than two.
    #[snafu(display("invalid log base: {} (must be at least 2)", log_base))]
    InvalidLogBase {
        /// The logarithm base that was given.
        log_base: u64,
    },
}

/// Errors that can occur when building or querying a histogram.
#[derive(Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum HistogramError {
    /// The codec for the histogram could not be constructed.
    #[snafu(display("invalid codec configuration: {}", source))]
    InvalidCodec {
        /// The underlying codec error.
        source: CodecError,
    },

    /// A percentile was requested for a rank outside of `[0.0, 100.0]`.
    #[snafu(display("invalid percentile rank: {} (must be between 0.0 and 100.0 inclusive)", rank))]
    InvalidPercentileRank {
        /// The rank that was given.
        rank: f64,
    },
}
