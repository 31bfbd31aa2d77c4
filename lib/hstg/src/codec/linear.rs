//! Linear codec implementation.

use std::num::NonZeroU64;

use snafu::OptionExt as _;

use super::BinCodec;
use crate::error::{CodecError, InvalidBinWidthSnafu};

/// Linear codec.
///
/// Maps values to fixed-width bins using `key = value / bin_width`, with each bin represented by its lower bound,
/// `key * bin_width`. Every value is within `bin_width - 1` of its representative value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LinearCodec {
    bin_width: NonZeroU64,
}

impl LinearCodec {
    /// Creates a new linear codec with the given bin width.
    ///
    /// # Errors
    ///
    /// If `bin_width` is zero, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use hstg::{BinCodec as _, LinearCodec};
    ///
    /// let codec = LinearCodec::new(5).unwrap();
    /// assert_eq!(codec.encode(12), 2);
    /// assert_eq!(codec.decode(2), 10);
    /// ```
    pub fn new(bin_width: u64) -> Result<Self, CodecError> {
        let bin_width = NonZeroU64::new(bin_width).context(InvalidBinWidthSnafu { bin_width })?;
        Ok(Self { bin_width })
    }

    /// Returns the bin width.
    pub fn bin_width(&self) -> u64 {
        self.bin_width.get()
    }
}

impl BinCodec for LinearCodec {
    #[inline]
    fn encode(&self, value: u64) -> u64 {
        value / self.bin_width
    }

    #[inline]
    fn decode(&self, key: u64) -> u64 {
        key.saturating_mul(self.bin_width.get())
    }
}

impl Default for LinearCodec {
    /// Creates a linear codec with a bin width of one, which keeps every distinct value in its own bin.
    fn default() -> Self {
        Self {
            bin_width: NonZeroU64::MIN,
        }
    }
}
