//! A streaming histogram over unsigned integer observations.
//!
//! Observations are grouped into bins by a [`Codec`], which maps each raw value to a bin key and each bin key back to
//! a representative value. Only the bins and their frequencies are retained, so memory is bounded by the number of
//! distinct bin keys observed rather than by the number of observations. Percentile queries are answered from the
//! bins, with an error bounded by the bin granularity of the chosen codec.
//!
//! # Quick Start
//!
//! ```
//! use hstg::Histogram;
//!
//! // Bins that are 10 units wide.
//! let mut histogram = Histogram::linear(10).unwrap();
//!
//! for latency_us in [12, 15, 31, 47, 48, 49, 120] {
//!     histogram.update(latency_us);
//! }
//!
//! assert_eq!(histogram.total_freq(), 7);
//! assert_eq!(histogram.bin_count(), 4);
//! assert_eq!(histogram.percentile(50.0).unwrap(), 40);
//! ```
//!
//! # Codecs
//!
//! - [`LinearCodec`]: fixed-width bins. Best when the absolute error should be constant across the value range.
//! - [`LogarithmicCodec`]: bins that grow geometrically. Best for long-tailed data such as latencies, where relative
//!   error matters more than absolute error.
//!
//! # Concurrency
//!
//! [`Histogram`] has no internal synchronization. Mutation requires exclusive access, and an open [`BinIter`] borrows
//! the histogram, so callers that share a histogram across threads must serialize access themselves.
#![deny(warnings)]
#![deny(missing_docs)]

mod bins;
pub use self::bins::{Bin, BinIter, BinList, Bins};

pub mod codec;
pub use self::codec::{BinCodec, Codec, LinearCodec, LogarithmicCodec};

mod config;
pub use self::config::{CodecKind, HistogramConfiguration};

mod error;
pub use self::error::{CodecError, HistogramError};

mod histogram;
pub use self::histogram::Histogram;
