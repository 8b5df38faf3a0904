use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("unknown compression algorithm `{0}`")]
    UnknownCodec(String),

    #[error("unknown distribution `{0}`")]
    UnknownDistribution(String),

    #[error("dataset size must be greater than zero")]
    EmptyDataset,

    #[error("shape parameter {value} is not valid for the `{distribution}` distribution")]
    InvalidShape { distribution: &'static str, value: f64 },

    #[error("{codec} codec failed: {source}")]
    Codec {
        codec: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "round-trip mismatch: decompressed {actual} bytes (expected {expected}), \
         first divergence at offset {offset}"
    )]
    Mismatch {
        expected: usize,
        actual: usize,
        offset: usize,
    },
}

impl HarnessError {
    /// Wraps a codec backend failure, tagging it with the codec name.
    pub(crate) fn codec(codec: &'static str, source: std::io::Error) -> Self {
        Self::Codec { codec, source }
    }
}
