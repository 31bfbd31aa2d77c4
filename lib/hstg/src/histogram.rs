//! Histogram facade.

use snafu::{ensure, ResultExt as _};
use tracing::debug;

use crate::bins::{BinIter, BinList, Bins};
use crate::codec::{BinCodec, Codec};
use crate::error::{HistogramError, InvalidCodecSnafu, InvalidPercentileRankSnafu};

/// A streaming histogram.
///
/// Each observation is mapped to a bin by the histogram's [`Codec`], and only the bins and their frequencies are
/// retained. Bins are created on the first observation that maps to them and are never removed, except by
/// [`clear`][Self::clear].
///
/// Updates are O(1) amortized when observations arrive in non-decreasing order, and O(n) in the number of bins
/// otherwise. Percentile queries always scan the bins from the lowest key, and are O(n) in the number of bins.
#[derive(Clone, Debug)]
pub struct Histogram {
    codec: Codec,
    bins: BinList,
}

impl Histogram {
    /// Creates an empty histogram that maps observations to bins with the given codec.
    pub fn new(codec: Codec) -> Self {
        debug!(?codec, "Created histogram.");

        Self {
            codec,
            bins: BinList::new(),
        }
    }

    /// Creates an empty histogram with fixed-width bins.
    ///
    /// # Errors
    ///
    /// If `bin_width` is zero, an error is returned.
    pub fn linear(bin_width: u64) -> Result<Self, HistogramError> {
        let codec = Codec::linear(bin_width).context(InvalidCodecSnafu)?;
        Ok(Self::new(codec))
    }

    /// Creates an empty histogram with bins that grow geometrically by `log_base`.
    ///
    /// # Errors
    ///
    /// If `log_base` is less than two, an error is returned.
    pub fn logarithmic(log_base: u64) -> Result<Self, HistogramError> {
        let codec = Codec::logarithmic(log_base).context(InvalidCodecSnafu)?;
        Ok(Self::new(codec))
    }

    /// Returns the codec used to map observations to bins.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Records a single observation.
    pub fn update(&mut self, value: u64) {
        self.bins.update(self.codec.encode(value), 1);
    }

    /// Records `n` observations of the same value.
    ///
    /// Recording zero observations is a no-op, and does not create a bin.
    pub fn update_n(&mut self, value: u64, n: u64) {
        if n == 0 {
            return;
        }

        self.bins.update(self.codec.encode(value), n);
    }

    /// Returns the number of bins in the histogram.
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Returns the number of observations recorded by the histogram.
    pub fn total_freq(&self) -> u64 {
        self.bins.total_freq()
    }

    /// Whether or not this histogram is empty.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Returns the approximate value at the given percentile rank.
    ///
    /// `rank` is a percentage between 0.0 and 100.0, inclusive. A rank of 0.0 returns the representative value of the
    /// lowest bin, and a rank of 100.0 returns the representative value of the highest bin. For any other rank, the
    /// result is the representative value of the highest bin such that the percentage of observations in lower bins
    /// does not exceed `rank`.
    ///
    /// An empty histogram returns the representative value of bin zero for every valid rank.
    ///
    /// # Errors
    ///
    /// If `rank` is not within `[0.0, 100.0]`, or is NaN, an error is returned.
    pub fn percentile(&self, rank: f64) -> Result<u64, HistogramError> {
        ensure!((0.0..=100.0).contains(&rank), InvalidPercentileRankSnafu { rank });

        let bin = if self.bins.is_empty() {
            None
        } else if rank == 0.0 {
            self.bins.first()
        } else if rank == 100.0 {
            self.bins.last()
        } else {
            let mut iter = self.iter();
            let mut candidate = iter.bin();
            while !iter.is_done() {
                if iter.percentile_rank() > rank {
                    break;
                }

                candidate = iter.bin();
                iter.advance();
            }
            candidate
        };

        let key = bin.map_or(0, |bin| bin.key());
        Ok(self.codec.decode(key))
    }

    /// Returns a ranked iterator over the bins, starting at the lowest key.
    pub fn iter(&self) -> BinIter<'_> {
        self.bins.iter_with(&self.codec)
    }

    /// Returns an iterator over the bins in ascending key order.
    pub fn bins(&self) -> Bins<'_> {
        self.bins.iter()
    }

    /// Clears the histogram, removing all bins.
    pub fn clear(&mut self) {
        debug!(bins = self.bins.len(), total_freq = self.bins.total_freq(), "Clearing histogram.");
        self.bins.clear();
    }
}
