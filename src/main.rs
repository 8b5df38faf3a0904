use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use packbench::{Bench, TrialReport, codec, distribution};

/// Element count for the fixed smoke sequence.
const SMOKE_ELEMENTS: usize = 1024;

#[derive(Debug, Parser)]
#[command(
    name = "packbench",
    version,
    about = "Times compression codecs against synthetic statistical datasets",
    override_usage = "packbench <COUNT> <ALGO> <DIST> <SIZE> [SEED] [SHAPE]\n       packbench --smoke"
)]
struct Cli {
    /// Run one byte-oriented trial per registered codec (uniform data,
    /// 1024 elements) instead of a parameterized benchmark
    #[arg(long, conflicts_with_all = ["count", "algo", "dist", "size", "seed", "shape"])]
    smoke: bool,

    /// Number of trials to run
    #[arg(value_name = "COUNT", required_unless_present = "smoke",
          value_parser = clap::value_parser!(u32).range(1..))]
    count: Option<u32>,

    /// Compression algorithm (bzip2, zstd, lz4, zlib, lzma, brotli, snappy)
    #[arg(value_name = "ALGO", required_unless_present = "smoke")]
    algo: Option<String>,

    /// Dataset distribution (uniform, normal, gamma, exponential)
    #[arg(value_name = "DIST", required_unless_present = "smoke")]
    dist: Option<String>,

    /// Dataset size, counted in elements (not bytes)
    #[arg(value_name = "SIZE", required_unless_present = "smoke",
          value_parser = clap::value_parser!(u64).range(1..))]
    size: Option<u64>,

    /// Random seed; 0 or absent draws fresh entropy per trial
    #[arg(value_name = "SEED", allow_negative_numbers = true)]
    seed: Option<f64>,

    /// Distribution shape parameter, where the distribution has one
    #[arg(value_name = "SHAPE", allow_negative_numbers = true)]
    shape: Option<f64>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are not configuration errors.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.smoke {
        return smoke();
    }

    // The positionals are `required_unless_present = "smoke"`, so they are
    // guaranteed by clap on this path.
    let count = cli.count.context("missing trial count")?;
    let algo = cli.algo.context("missing algorithm name")?;
    let dist = cli.dist.context("missing distribution name")?;
    let size = cli.size.context("missing dataset size")? as usize;

    // The algorithm is resolved before the distribution: a bad codec name
    // fails without touching anything else.
    let codec = codec::create(&algo)
        .with_context(|| format!("valid algorithms: {}", join_names(codec::names())))?;
    let mut sampler = distribution::create(&dist)
        .with_context(|| format!("valid distributions: {}", join_names(distribution::names())))?;

    // Seeds arrive on the command line as floats; narrowing to an integer
    // seed is deliberate.
    let mut bench = Bench::new(cli.seed.map(|s| s as u64), cli.shape);

    for _ in 0..count {
        let report = bench.run_trial::<i32>(codec.as_ref(), sampler.as_mut(), size)?;
        print_report(&report);
    }

    Ok(())
}

/// One byte-oriented trial per registered codec, against uniform data.
fn smoke() -> anyhow::Result<()> {
    let mut sampler = distribution::create("uniform")?;
    let mut bench = Bench::new(None, None);

    for name in codec::names() {
        println!("=== testing {name} ===");
        let codec = codec::create(name)?;
        let report = bench.run_trial::<u8>(codec.as_ref(), sampler.as_mut(), SMOKE_ELEMENTS)?;
        print_report(&report);
        println!();
    }

    println!("compress/decompress smoke test passed");
    Ok(())
}

fn print_report(report: &TrialReport) {
    println!("Compression took {:.3} msec", report.compress_ms);
    println!("Decompression took {:.3} msec", report.decompress_ms);
    println!("Raw bytes: {}", report.raw_bytes);
    println!(
        "Compressed bytes: {} (ratio {:.3})",
        report.compressed_bytes,
        report.ratio()
    );
}

fn join_names(names: impl Iterator<Item = &'static str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
