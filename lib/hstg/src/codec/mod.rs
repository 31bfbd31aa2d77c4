//! Bin codecs.
//!
//! A codec maps raw observations to bin keys, and bin keys back to the representative value of the bin. Decoding is
//! lossy: `decode(encode(v))` is the lower bound of the bin that `v` falls into, not `v` itself.

use crate::error::CodecError;

mod linear;
pub use self::linear::LinearCodec;

mod logarithmic;
pub use self::logarithmic::LogarithmicCodec;

/// Maps values to bin keys and vice versa.
pub trait BinCodec {
    /// Returns the key of the bin that the given value falls into.
    ///
    /// Encoding is monotonic: if `a <= b`, then `encode(a) <= encode(b)`.
    fn encode(&self, value: u64) -> u64;

    /// Returns the representative value of the bin with the given key.
    ///
    /// The representative value is the smallest value that encodes to `key`. Keys whose representative value would
    /// not fit in a `u64` decode to `u64::MAX`.
    fn decode(&self, key: u64) -> u64;
}

/// A bin codec.
///
/// This is the closed set of codecs a [`Histogram`][crate::Histogram] can be built with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Codec {
    /// Fixed-width bins.
    Linear(LinearCodec),

    /// Geometrically growing bins.
    Logarithmic(LogarithmicCodec),
}

impl Codec {
    /// Creates a linear codec with the given bin width.
    ///
    /// # Errors
    ///
    /// If `bin_width` is zero, an error is returned.
    pub fn linear(bin_width: u64) -> Result<Self, CodecError> {
        LinearCodec::new(bin_width).map(Self::Linear)
    }

    /// Creates a logarithmic codec with the given logarithm base.
    ///
    /// # Errors
    ///
    /// If `log_base` is less than two, an error is returned.
    pub fn logarithmic(log_base: u64) -> Result<Self, CodecError> {
        LogarithmicCodec::new(log_base).map(Self::Logarithmic)
    }
}

impl BinCodec for Codec {
    #[inline]
    fn encode(&self, value: u64) -> u64 {
        match self {
            Self::Linear(codec) => codec.encode(value),
            Self::Logarithmic(codec) => codec.encode(value),
        }
    }

    #[inline]
    fn decode(&self, key: u64) -> u64 {
        match self {
            Self::Linear(codec) => codec.decode(key),
            Self::Logarithmic(codec) => codec.decode(key),
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::Linear(LinearCodec::default())
    }
}

impl From<LinearCodec> for Codec {
    fn from(codec: LinearCodec) -> Self {
        Self::Linear(codec)
    }
}

impl From<LogarithmicCodec> for Codec {
    fn from(codec: LogarithmicCodec) -> Self {
        Self::Logarithmic(codec)
    }
}
