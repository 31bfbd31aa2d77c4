use super::{Bin, BinList};
use crate::codec::{BinCodec, Codec};

/// A forward cursor over the bins of a [`BinList`].
///
/// The iterator starts at the bin with the lowest key and tracks the cumulative frequency of every bin it has moved
/// past, which allows it to report the percentile rank of the current bin. Unlike [`Bins`][super::Bins], it does not
/// implement [`Iterator`]: callers inspect the current bin and then explicitly [`advance`][Self::advance].
///
/// All accessors for the current bin, as well as `advance`, panic once the iterator is done.
#[derive(Debug)]
pub struct BinIter<'a, C = Codec> {
    list: &'a BinList,
    codec: &'a C,
    curr: Option<usize>,
    cum_freq: u64,
}

impl<'a, C: BinCodec> BinIter<'a, C> {
    pub(crate) fn new(list: &'a BinList, codec: &'a C) -> Self {
        Self {
            list,
            codec,
            curr: list.head,
            cum_freq: 0,
        }
    }

    /// Returns `true` if the iterator has moved past the last bin.
    pub fn is_done(&self) -> bool {
        self.curr.is_none()
    }

    /// Moves past the current bin, adding its frequency to the cumulative frequency.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is done.
    pub fn advance(&mut self) {
        let bin = self.current();
        self.cum_freq = self.cum_freq.saturating_add(bin.freq);
        self.curr = bin.next;
    }

    /// Returns the key of the current bin.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is done.
    pub fn key(&self) -> u64 {
        self.current().key
    }

    /// Returns the frequency of the current bin.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is done.
    pub fn freq(&self) -> u64 {
        self.current().freq
    }

    /// Returns the representative value of the current bin.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is done.
    pub fn percentile(&self) -> u64 {
        self.codec.decode(self.current().key)
    }

    /// Returns the percentage of all recorded observations that fall in bins before the current bin.
    ///
    /// The current bin's own frequency is not counted until the iterator advances past it.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is done.
    pub fn percentile_rank(&self) -> f64 {
        self.current();
        (self.cum_freq as f64 / self.list.total_freq() as f64) * 100.0
    }

    /// Returns the total frequency of the bins moved past so far.
    pub fn cumulative_freq(&self) -> u64 {
        self.cum_freq
    }

    pub(crate) fn bin(&self) -> Option<&'a Bin> {
        self.curr.map(|idx| &self.list.bins[idx])
    }

    fn current(&self) -> &'a Bin {
        match self.bin() {
            Some(bin) => bin,
            None => panic!("bin iterator used after moving past the last bin"),
        }
    }
}
