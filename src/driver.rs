//! The benchmark driver: one trial = generate, compress, decompress, verify.

use tracing::debug;

use crate::codec::Codec;
use crate::distribution::Sampler;
use crate::element::Element;
use crate::error::HarnessError;
use crate::timer::Stopwatch;

/// Measurements from a single completed trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialReport {
    /// Uncompressed dataset size in bytes.
    pub raw_bytes: usize,
    /// Actual compressed output size in bytes.
    pub compressed_bytes: usize,
    /// Wall time of the compress call, milliseconds.
    pub compress_ms: f64,
    /// Wall time of the decompress call, milliseconds.
    pub decompress_ms: f64,
}

impl TrialReport {
    /// Compressed-to-raw size ratio; above 1.0 means the data expanded.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.compressed_bytes as f64 / self.raw_bytes as f64
    }
}

/// Runs generate/compress/decompress/verify cycles and times the codec calls.
///
/// The seed and shape are fixed at construction. A nonzero seed is re-applied
/// at the start of every trial, so seeded trials all operate on the same
/// dataset; an unset (or zero) seed draws fresh entropy per trial.
pub struct Bench {
    seed: Option<u64>,
    shape: Option<f64>,
    compress_timer: Stopwatch,
    decompress_timer: Stopwatch,
}

impl Bench {
    #[must_use]
    pub fn new(seed: Option<u64>, shape: Option<f64>) -> Self {
        Self {
            // Zero is the "unset" sentinel for both knobs.
            seed: seed.filter(|&s| s != 0),
            shape: shape.filter(|&s| s != 0.0),
            compress_timer: Stopwatch::new(),
            decompress_timer: Stopwatch::new(),
        }
    }

    /// Runs one trial of `len` elements of type `E`.
    ///
    /// Buffers are sized before the stopwatches start, so only the codec
    /// calls themselves land inside the timed intervals. A round-trip
    /// mismatch is a harness-level failure, not a timing data point:
    /// the trial yields [`HarnessError::Mismatch`] and no report.
    pub fn run_trial<E: Element>(
        &mut self,
        codec: &dyn Codec,
        sampler: &mut dyn Sampler,
        len: usize,
    ) -> Result<TrialReport, HarnessError> {
        if len == 0 {
            return Err(HarnessError::EmptyDataset);
        }

        sampler.reseed(self.seed);
        if let Some(shape) = self.shape {
            sampler.set_shape(shape)?;
        }

        debug!(
            codec = codec.name(),
            distribution = sampler.name(),
            elements = len,
            width = E::WIDTH,
            "starting trial"
        );

        // Generate the dataset, narrowing each sample to the element width.
        let mut raw = Vec::with_capacity(len * E::WIDTH);
        for _ in 0..len {
            E::from_sample(sampler.next_int()).extend_le(&mut raw);
        }

        self.compress_timer.reset();
        self.decompress_timer.reset();

        self.compress_timer.resume();
        let compressed = codec.compress(&raw)?;
        self.compress_timer.pause();

        self.decompress_timer.resume();
        let decompressed = codec.decompress(&compressed, raw.len())?;
        self.decompress_timer.pause();

        verify(&raw, &decompressed)?;

        Ok(TrialReport {
            raw_bytes: raw.len(),
            compressed_bytes: compressed.len(),
            compress_ms: self.compress_timer.elapsed_ms(),
            decompress_ms: self.decompress_timer.elapsed_ms(),
        })
    }
}

/// Byte-exact integrity check between the original and round-tripped data.
fn verify(raw: &[u8], decompressed: &[u8]) -> Result<(), HarnessError> {
    if raw == decompressed {
        return Ok(());
    }
    let offset = raw
        .iter()
        .zip(decompressed)
        .position(|(a, b)| a != b)
        .unwrap_or(raw.len().min(decompressed.len()));
    Err(HarnessError::Mismatch {
        expected: raw.len(),
        actual: decompressed.len(),
        offset,
    })
}
