use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use packbench::{Element, codec, distribution};

/// Dataset size for all scenarios: a 64KB block, typical for chunked I/O.
const SIZE: usize = 64 * 1024;

/// Generates `SIZE` bytes from a registered distribution under a fixed seed,
/// so benchmark inputs are reproducible across runs.
fn generate(dist_name: &str, seed: u64) -> Vec<u8> {
    let mut sampler = distribution::create(dist_name).expect("distribution should be registered");
    sampler.reseed(Some(seed));
    let mut data = Vec::with_capacity(SIZE);
    for _ in 0..SIZE {
        u8::from_sample(sampler.next_int()).extend_le(&mut data);
    }
    data
}

/// Benchmarks every registered codec's compression against three dataset
/// shapes:
///
/// 1. **uniform**: high entropy, generally incompressible.
/// 2. **gamma**: heavily skewed toward small byte values, very compressible.
/// 3. **normal**: moderate entropy between the two.
fn bench_compression(c: &mut Criterion) {
    let scenarios = [
        ("uniform", generate("uniform", 42)),
        ("gamma", generate("gamma", 42)),
        ("normal", generate("normal", 42)),
    ];

    for codec_name in codec::names() {
        let codec = codec::create(codec_name).unwrap();
        let mut group = c.benchmark_group(format!("{codec_name} compression"));
        group.throughput(Throughput::Bytes(SIZE as u64));

        for (dist_name, input) in &scenarios {
            group.bench_function(format!("{dist_name} 64KB"), |b| {
                b.iter(|| codec.compress(black_box(input)).unwrap());
            });
        }

        group.finish();
    }
}

/// Benchmarks decompression. Inputs are pre-compressed during setup;
/// throughput is reported against the *uncompressed* size so the number
/// reflects the rate of data restoration.
fn bench_decompression(c: &mut Criterion) {
    let scenarios = [
        ("uniform", generate("uniform", 42)),
        ("gamma", generate("gamma", 42)),
        ("normal", generate("normal", 42)),
    ];

    for codec_name in codec::names() {
        let codec = codec::create(codec_name).unwrap();
        let mut group = c.benchmark_group(format!("{codec_name} decompression"));
        group.throughput(Throughput::Bytes(SIZE as u64));

        for (dist_name, input) in &scenarios {
            let compressed = codec.compress(input).unwrap();
            group.bench_function(format!("{dist_name} 64KB"), |b| {
                b.iter(|| {
                    // A decompression failure invalidates the measurement,
                    // so the benchmark should fail loudly.
                    codec.decompress(black_box(&compressed), SIZE).unwrap()
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_compression, bench_decompression);
criterion_main!(benches);
