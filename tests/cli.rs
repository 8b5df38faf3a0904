use assert_cmd::Command;
use predicates::prelude::*;

fn packbench() -> Command {
    Command::cargo_bin("packbench").expect("binary should build")
}

/// Fewer than the four required positionals: usage on stderr, exit 1.
#[test]
fn missing_arguments_exit_with_status_1() {
    packbench()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    packbench()
        .args(["3", "zstd", "uniform"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

/// An unrecognized algorithm name is rejected, naming the valid set.
#[test]
fn unknown_algorithm_exits_with_status_1() {
    packbench()
        .args(["1", "foo", "uniform", "1024"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("unknown compression algorithm `foo`")
                .and(predicate::str::contains("valid algorithms")),
        );
}

/// An unrecognized distribution name is rejected.
#[test]
fn unknown_distribution_exits_with_status_1() {
    packbench()
        .args(["1", "zstd", "foo", "1024"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown distribution `foo`"));
}

/// A zero trial count is a configuration error.
#[test]
fn zero_count_exits_with_status_1() {
    packbench()
        .args(["0", "zstd", "uniform", "1024"])
        .assert()
        .failure()
        .code(1);
}

/// A zero dataset size is a configuration error.
#[test]
fn zero_size_exits_with_status_1() {
    packbench()
        .args(["1", "zstd", "uniform", "0"])
        .assert()
        .failure()
        .code(1);
}

/// `packbench 3 zstd uniform 1024` runs exactly three trials and exits 0.
#[test]
fn three_trials_print_three_timing_pairs() {
    let output = packbench()
        .args(["3", "zstd", "uniform", "1024"])
        .output()
        .expect("process should spawn");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
    assert_eq!(stdout.matches("Compression took").count(), 3);
    assert_eq!(stdout.matches("Decompression took").count(), 3);
    assert_eq!(stdout.matches("Raw bytes: 4096").count(), 3);
}

/// Two identically seeded invocations generate identical datasets, so the
/// reported byte counts match line for line.
#[test]
fn seeded_runs_report_identical_byte_counts() {
    let byte_lines = |stdout: &str| -> Vec<String> {
        stdout
            .lines()
            .filter(|l| l.starts_with("Raw bytes") || l.starts_with("Compressed bytes"))
            .map(str::to_owned)
            .collect()
    };

    let run = || {
        let output = packbench()
            .args(["1", "zstd", "uniform", "1024", "42"])
            .output()
            .expect("process should spawn");
        assert!(output.status.success());
        byte_lines(&String::from_utf8(output.stdout).expect("stdout is utf-8"))
    };

    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}

/// The shape parameter is accepted as a sixth positional.
#[test]
fn shape_argument_is_accepted() {
    packbench()
        .args(["1", "lz4", "gamma", "512", "42", "3.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compression took"));
}

/// A zero shape is the "unset" sentinel and must not be rejected, even for
/// distributions whose real shape parameter must be positive.
#[test]
fn zero_shape_is_treated_as_unset() {
    packbench()
        .args(["1", "zstd", "gamma", "1024", "42", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compression took"));
}

/// An out-of-range shape fails before any trial completes.
#[test]
fn invalid_shape_exits_with_status_1() {
    packbench()
        .args(["1", "lz4", "gamma", "512", "42", "-3.5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("shape parameter"));
}

/// Smoke mode visits every registered codec and reports success.
#[test]
fn smoke_mode_covers_every_codec() {
    let output = packbench()
        .arg("--smoke")
        .output()
        .expect("process should spawn");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
    for name in packbench::codec::names() {
        assert!(
            stdout.contains(&format!("=== testing {name} ===")),
            "missing banner for {name}"
        );
    }
    assert!(stdout.contains("compress/decompress smoke test passed"));
}

/// `--help` is not an error.
#[test]
fn help_exits_zero() {
    packbench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
