//! Ordered bin storage.

use std::cmp::Ordering;

use tracing::trace;

use crate::codec::BinCodec;

mod bin;
pub use self::bin::Bin;

mod iter;
pub use self::iter::BinIter;

/// An ordered list of bins.
///
/// Bins are kept in a single arena and chained together in ascending key order through their `next` index. Bins are
/// only ever appended to the arena, so an index stays valid until the list is cleared.
///
/// The list remembers the bin touched by the most recent update (the cursor). An update whose key is greater than or
/// equal to the cursor's key resumes searching from the cursor instead of the head, which makes insertion of
/// non-decreasing keys O(1) amortized. An update with a smaller key restarts the search from the head, which is O(n)
/// in the number of bins.
#[derive(Clone, Debug, Default)]
pub struct BinList {
    /// The bin arena, in insertion order.
    bins: Vec<Bin>,

    /// Arena index of the bin with the lowest key.
    head: Option<usize>,

    /// Arena index of the most recently updated bin.
    cursor: Option<usize>,

    /// Sum of every frequency increment applied to the list.
    total_freq: u64,

    /// Number of searches that had to restart from the head.
    head_restarts: u64,
}

impl BinList {
    /// Creates an empty `BinList`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct bins in the list.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns `true` if the list holds no bins.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Returns the sum of all frequency increments applied to the list.
    pub fn total_freq(&self) -> u64 {
        self.total_freq
    }

    /// Returns the number of updates whose search restarted from the head of the list.
    ///
    /// This stays at zero for as long as updates arrive in non-decreasing key order.
    pub fn head_restarts(&self) -> u64 {
        self.head_restarts
    }

    /// Adds `freq` to the bin with the given key, creating the bin if it does not yet exist.
    pub fn update(&mut self, key: u64, freq: u64) {
        debug_assert!(self.head.is_some() || self.cursor.is_none(), "cursor is set on an empty bin list");

        let idx = self.bin_for(key);
        self.cursor = Some(idx);
        self.bins[idx].increment(freq);
        self.total_freq = self.total_freq.saturating_add(freq);
    }

    /// Returns the bin with the lowest key, if any.
    pub fn first(&self) -> Option<&Bin> {
        self.head.map(|idx| &self.bins[idx])
    }

    /// Returns the bin with the highest key, if any.
    ///
    /// This walks the entire chain.
    pub fn last(&self) -> Option<&Bin> {
        self.iter().last()
    }

    /// Returns an iterator over the bins in ascending key order.
    pub fn iter(&self) -> Bins<'_> {
        Bins {
            list: self,
            curr: self.head,
        }
    }

    /// Returns a ranked iterator over the bins that decodes bin keys with the given codec.
    pub fn iter_with<'a, C: BinCodec>(&'a self, codec: &'a C) -> BinIter<'a, C> {
        BinIter::new(self, codec)
    }

    /// Removes all bins from the list, resetting all counters.
    pub fn clear(&mut self) {
        self.bins.clear();
        self.head = None;
        self.cursor = None;
        self.total_freq = 0;
        self.head_restarts = 0;
    }

    /// Finds the arena index of the bin for `key`, splicing a new bin into the chain if none exists.
    fn bin_for(&mut self, key: u64) -> usize {
        let mut prev = None;
        let mut curr = match self.cursor {
            Some(cursor) if self.bins[cursor].key <= key => Some(cursor),
            Some(cursor) => {
                self.head_restarts += 1;
                trace!(key, cursor_key = self.bins[cursor].key, "Key precedes cursor. Searching from head.");
                self.head
            }
            None => self.head,
        };

        while let Some(idx) = curr {
            let bin = &self.bins[idx];
            match bin.key.cmp(&key) {
                Ordering::Equal => return idx,
                Ordering::Greater => break,
                Ordering::Less => {
                    prev = Some(idx);
                    curr = bin.next;
                }
            }
        }

        // Either we walked past the insertion point or hit the tail: `curr` is the successor, `prev` the predecessor.
        let idx = self.bins.len();
        self.bins.push(Bin::new(key, curr));
        match prev {
            Some(prev) => self.bins[prev].next = Some(idx),
            None => self.head = Some(idx),
        }

        trace!(key, bins = self.bins.len(), "Created bin.");
        idx
    }
}

impl<'a> IntoIterator for &'a BinList {
    type Item = &'a Bin;
    type IntoIter = Bins<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the bins of a [`BinList`], in ascending key order.
#[derive(Clone, Debug)]
pub struct Bins<'a> {
    list: &'a BinList,
    curr: Option<usize>,
}

impl<'a> Iterator for Bins<'a> {
    type Item = &'a Bin;

    fn next(&mut self) -> Option<Self::Item> {
        let bin = &self.list.bins[self.curr?];
        self.curr = bin.next;
        Some(bin)
    }
}
