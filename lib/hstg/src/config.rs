use serde::Deserialize;

use crate::codec::{Codec, LinearCodec, LogarithmicCodec};
use crate::error::CodecError;
use crate::histogram::Histogram;

/// The kind of codec a histogram uses to map observations to bins.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    /// Fixed-width bins, configured by `bin_width`.
    #[default]
    Linear,

    /// Geometrically growing bins, configured by `log_base`.
    Logarithmic,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawHistogramConfiguration {
    /// Which codec to use.
    ///
    /// Defaults to `linear`.
    codec: CodecKind,

    /// Width of each bin, when using the linear codec.
    ///
    /// Must be greater than zero. Defaults to 1.
    bin_width: u64,

    /// Base of the logarithm, when using the logarithmic codec.
    ///
    /// Must be at least 2. Defaults to 2.
    log_base: u64,
}

impl Default for RawHistogramConfiguration {
    fn default() -> Self {
        Self {
            codec: CodecKind::Linear,
            bin_width: LinearCodec::default().bin_width(),
            log_base: LogarithmicCodec::default().log_base(),
        }
    }
}

/// Histogram configuration.
///
/// The configuration is validated when it is deserialized, so a `HistogramConfiguration` always describes a codec that
/// can be built. Only the parameter for the selected codec is validated; the other is ignored.
///
/// ```
/// use hstg::HistogramConfiguration;
///
/// let config: HistogramConfiguration = serde_json::from_str(r#"{ "codec": "logarithmic", "log_base": 10 }"#).unwrap();
/// let mut histogram = config.build();
/// histogram.update(250);
/// assert_eq!(histogram.percentile(50.0).unwrap(), 99);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawHistogramConfiguration")]
pub struct HistogramConfiguration {
    codec: Codec,
}

impl HistogramConfiguration {
    /// Creates a configuration for the given codec.
    pub fn from_codec(codec: Codec) -> Self {
        Self { codec }
    }

    /// Returns the configured codec.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Builds an empty histogram from this configuration.
    pub fn build(&self) -> Histogram {
        Histogram::new(self.codec)
    }
}

impl TryFrom<RawHistogramConfiguration> for HistogramConfiguration {
    type Error = CodecError;

    fn try_from(raw: RawHistogramConfiguration) -> Result<Self, Self::Error> {
        let codec = match raw.codec {
            CodecKind::Linear => Codec::linear(raw.bin_width)?,
            CodecKind::Logarithmic => Codec::logarithmic(raw.log_base)?,
        };

        Ok(Self { codec })
    }
}
