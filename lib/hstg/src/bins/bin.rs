//! Histogram bin representation.

/// A histogram bin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bin {
    /// The bin key.
    pub(crate) key: u64,

    /// The number of observations within the bin.
    pub(crate) freq: u64,

    /// Arena index of the bin with the next higher key.
    pub(crate) next: Option<usize>,
}

impl Bin {
    pub(crate) const fn new(key: u64, next: Option<usize>) -> Self {
        Self { key, freq: 0, next }
    }

    /// Returns the key of the bin.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Returns the number of observations within the bin.
    pub fn freq(&self) -> u64 {
        self.freq
    }

    #[inline]
    pub(crate) fn increment(&mut self, n: u64) {
        self.freq = self.freq.saturating_add(n);
    }
}
