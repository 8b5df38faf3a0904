//! Compression codec providers.
//!
//! Each supported algorithm is wrapped behind the [`Codec`] trait so the
//! driver can time any backend through one seam. Backends report the real
//! compressed length (the returned vector's length), so compression ratio is
//! observable instead of being hidden behind a caller-supplied capacity.

use std::io::{self, Read};

use crate::error::HarnessError;

/// A lossless compression backend.
///
/// `decompress` receives the expected raw length as a capacity hint; backends
/// that need an output bound (zstd) use it directly, the rest use it to
/// pre-size their output.
pub trait Codec {
    fn name(&self) -> &'static str;

    /// Compresses `src` into a freshly produced buffer.
    fn compress(&self, src: &[u8]) -> Result<Vec<u8>, HarnessError>;

    /// Inverts [`Codec::compress`]. `raw_len` is the expected decompressed size.
    fn decompress(&self, src: &[u8], raw_len: usize) -> Result<Vec<u8>, HarnessError>;
}

fn invalid_data<E>(err: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, err)
}

// --- Backends ---

/// bzip2 via the `bzip2` crate's streaming reader adapters.
pub struct Bzip2 {
    level: u32,
}

impl Default for Bzip2 {
    fn default() -> Self {
        Self { level: 6 }
    }
}

impl Codec for Bzip2 {
    fn name(&self) -> &'static str {
        "bzip2"
    }

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>, HarnessError> {
        let mut out = Vec::new();
        bzip2::read::BzEncoder::new(src, bzip2::Compression::new(self.level))
            .read_to_end(&mut out)
            .map_err(|e| HarnessError::codec(self.name(), e))?;
        Ok(out)
    }

    fn decompress(&self, src: &[u8], raw_len: usize) -> Result<Vec<u8>, HarnessError> {
        let mut out = Vec::with_capacity(raw_len);
        bzip2::read::BzDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| HarnessError::codec(self.name(), e))?;
        Ok(out)
    }
}

/// zstd via the `zstd` crate's one-shot bulk API.
pub struct Zstd {
    level: i32,
}

impl Default for Zstd {
    fn default() -> Self {
        Self { level: 3 }
    }
}

impl Codec for Zstd {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>, HarnessError> {
        zstd::bulk::compress(src, self.level).map_err(|e| HarnessError::codec(self.name(), e))
    }

    fn decompress(&self, src: &[u8], raw_len: usize) -> Result<Vec<u8>, HarnessError> {
        zstd::bulk::decompress(src, raw_len).map_err(|e| HarnessError::codec(self.name(), e))
    }
}

/// LZ4 block format via `lz4_flex`, with the size header prepended.
#[derive(Default)]
pub struct Lz4;

impl Codec for Lz4 {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>, HarnessError> {
        Ok(lz4_flex::compress_prepend_size(src))
    }

    fn decompress(&self, src: &[u8], _raw_len: usize) -> Result<Vec<u8>, HarnessError> {
        lz4_flex::decompress_size_prepended(src)
            .map_err(|e| HarnessError::codec(self.name(), invalid_data(e)))
    }
}

/// zlib (RFC 1950) via `flate2`.
pub struct Zlib {
    level: u32,
}

impl Default for Zlib {
    fn default() -> Self {
        Self { level: 6 }
    }
}

impl Codec for Zlib {
    fn name(&self) -> &'static str {
        "zlib"
    }

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>, HarnessError> {
        let mut out = Vec::new();
        flate2::read::ZlibEncoder::new(src, flate2::Compression::new(self.level))
            .read_to_end(&mut out)
            .map_err(|e| HarnessError::codec(self.name(), e))?;
        Ok(out)
    }

    fn decompress(&self, src: &[u8], raw_len: usize) -> Result<Vec<u8>, HarnessError> {
        let mut out = Vec::with_capacity(raw_len);
        flate2::read::ZlibDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| HarnessError::codec(self.name(), e))?;
        Ok(out)
    }
}

/// LZMA via the pure-Rust `lzma-rs` crate.
#[derive(Default)]
pub struct Lzma;

impl Codec for Lzma {
    fn name(&self) -> &'static str {
        "lzma"
    }

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>, HarnessError> {
        let mut out = Vec::new();
        lzma_rs::lzma_compress(&mut &src[..], &mut out)
            .map_err(|e| HarnessError::codec(self.name(), e))?;
        Ok(out)
    }

    fn decompress(&self, src: &[u8], raw_len: usize) -> Result<Vec<u8>, HarnessError> {
        let mut out = Vec::with_capacity(raw_len);
        lzma_rs::lzma_decompress(&mut &src[..], &mut out)
            .map_err(|e| HarnessError::codec(self.name(), invalid_data(e.to_string())))?;
        Ok(out)
    }
}

/// Brotli via the `brotli` crate's one-shot entry points.
pub struct Brotli {
    quality: i32,
    lgwin: i32,
}

impl Default for Brotli {
    fn default() -> Self {
        Self {
            quality: 5,
            lgwin: 22,
        }
    }
}

impl Codec for Brotli {
    fn name(&self) -> &'static str {
        "brotli"
    }

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>, HarnessError> {
        let mut params = brotli::enc::BrotliEncoderParams::default();
        params.quality = self.quality;
        params.lgwin = self.lgwin;

        let mut out = Vec::new();
        brotli::BrotliCompress(&mut &src[..], &mut out, &params)
            .map_err(|e| HarnessError::codec(self.name(), e))?;
        Ok(out)
    }

    fn decompress(&self, src: &[u8], raw_len: usize) -> Result<Vec<u8>, HarnessError> {
        let mut out = Vec::with_capacity(raw_len);
        brotli::BrotliDecompress(&mut &src[..], &mut out)
            .map_err(|e| HarnessError::codec(self.name(), e))?;
        Ok(out)
    }
}

/// Snappy raw block format via the `snap` crate.
#[derive(Default)]
pub struct Snappy;

impl Codec for Snappy {
    fn name(&self) -> &'static str {
        "snappy"
    }

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>, HarnessError> {
        snap::raw::Encoder::new()
            .compress_vec(src)
            .map_err(|e| HarnessError::codec(self.name(), invalid_data(e)))
    }

    fn decompress(&self, src: &[u8], _raw_len: usize) -> Result<Vec<u8>, HarnessError> {
        snap::raw::Decoder::new()
            .decompress_vec(src)
            .map_err(|e| HarnessError::codec(self.name(), invalid_data(e)))
    }
}

// --- Registry ---

type Factory = fn() -> Box<dyn Codec>;

/// Name-to-factory table. Adding an algorithm means adding one row here.
const REGISTRY: &[(&str, Factory)] = &[
    ("bzip2", || Box::new(Bzip2::default())),
    ("zstd", || Box::new(Zstd::default())),
    ("lz4", || Box::new(Lz4)),
    ("zlib", || Box::new(Zlib::default())),
    ("lzma", || Box::new(Lzma)),
    ("brotli", || Box::new(Brotli::default())),
    ("snappy", || Box::new(Snappy)),
];

/// Instantiates the codec registered under `name`.
pub fn create(name: &str) -> Result<Box<dyn Codec>, HarnessError> {
    REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, factory)| factory())
        .ok_or_else(|| HarnessError::UnknownCodec(name.to_owned()))
}

/// All registered codec names, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(n, _)| *n)
}
