//! Logarithmic codec implementation.

use snafu::ensure;

use super::BinCodec;
use crate::error::{CodecError, InvalidLogBaseSnafu};

/// Logarithmic codec.
///
/// Maps values to bins that grow geometrically using `key = floor(log_base(value + 1))`, so bin `k` holds the values in
/// `[log_base^k - 1, log_base^(k+1) - 1)`. Each bin is represented by its lower bound, `log_base^k - 1`.
///
/// The logarithm is computed with integer arithmetic, which keeps bin boundaries exact across the entire `u64` range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogarithmicCodec {
    log_base: u64,
}

impl LogarithmicCodec {
    /// Creates a new logarithmic codec with the given logarithm base.
    ///
    /// # Errors
    ///
    /// If `log_base` is less than two, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use hstg::{BinCodec as _, LogarithmicCodec};
    ///
    /// let codec = LogarithmicCodec::new(2).unwrap();
    /// assert_eq!(codec.encode(10), 3);
    /// assert_eq!(codec.decode(3), 7);
    /// ```
    pub fn new(log_base: u64) -> Result<Self, CodecError> {
        ensure!(log_base >= 2, InvalidLogBaseSnafu { log_base });
        Ok(Self { log_base })
    }

    /// Returns the logarithm base.
    pub fn log_base(&self) -> u64 {
        self.log_base
    }
}

impl BinCodec for LogarithmicCodec {
    #[inline]
    fn encode(&self, value: u64) -> u64 {
        // Widened so that `u64::MAX + 1` is representable.
        let shifted = u128::from(value) + 1;
        u64::from(shifted.ilog(u128::from(self.log_base)))
    }

    #[inline]
    fn decode(&self, key: u64) -> u64 {
        u32::try_from(key)
            .ok()
            .and_then(|exp| u128::from(self.log_base).checked_pow(exp))
            .and_then(|upper| u64::try_from(upper - 1).ok())
            .unwrap_or(u64::MAX)
    }
}

impl Default for LogarithmicCodec {
    /// Creates a logarithmic codec with base two.
    fn default() -> Self {
        Self { log_base: 2 }
    }
}
