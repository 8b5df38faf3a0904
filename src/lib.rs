//! # packbench
//!
//! `packbench` is a microbenchmark harness for lossless compression codecs.
//! Each trial generates a synthetic dataset from a statistical distribution,
//! times one compress and one decompress call, and asserts that the data
//! round-trips byte-for-byte.
//!
//! The codecs and sample distributions are registry crates wired behind the
//! [`codec::Codec`] and [`distribution::Sampler`] traits; this crate only
//! provides the harness around them.
//!
//! ## Example
//!
//! ```rust
//! use packbench::{Bench, codec, distribution};
//!
//! let codec = codec::create("zstd").unwrap();
//! let mut sampler = distribution::create("uniform").unwrap();
//!
//! // Seed 42: every trial regenerates the identical dataset.
//! let mut bench = Bench::new(Some(42), None);
//! let report = bench
//!     .run_trial::<u8>(codec.as_ref(), sampler.as_mut(), 1024)
//!     .expect("round-trip failed");
//!
//! assert_eq!(report.raw_bytes, 1024);
//! assert!(report.compressed_bytes > 0);
//! ```

#![forbid(unsafe_code)]

pub mod codec;
pub mod distribution;
pub mod driver;
pub mod element;
pub mod error;
pub mod timer;

pub use driver::{Bench, TrialReport};
pub use element::Element;
pub use error::HarnessError;
pub use timer::Stopwatch;
