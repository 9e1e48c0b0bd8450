//! polyfft-bench-harness
//!
//! Time the recursive FFT against the O(n²) Horner reference on seeded random
//! dense inputs, check the max error, and append CSV rows into
//! `benchmarks/reports/bench-<unix>.csv`.
//!
//! Usage examples:
//!   cargo run -p polyfft-bench-harness -- --profile benchmarks/profiles/small.toml
//!   cargo run -p polyfft-bench-harness -- --profile benchmarks/profiles/medium.toml --skip-naive

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use rand::{rngs::StdRng, Rng as _, SeedableRng};
use serde::Deserialize;

use polyfft::{
    fft, naive::evaluate_at_roots, naive::max_abs_error, Complex64, Polynomial, RootsOfUnity,
};

#[derive(Debug, Deserialize)]
struct Profile {
    /// log2 of each coefficient count to run
    log2_sizes: Vec<u32>,
    /// Repetitions per size
    repeats: u32,
    /// RNG seed for coefficients
    seed: u64,
    /// Largest accepted |fft - naive|, scaled by Σ|c|
    tolerance: f64,
}

fn parse_flag(name: &str, default: &str) -> String {
    let mut it = std::env::args().skip(1);
    while let Some(k) = it.next() {
        if k == format!("--{name}") {
            return it.next().unwrap_or_else(|| default.to_string());
        }
    }
    default.to_string()
}

fn has_flag(name: &str) -> bool {
    std::env::args().skip(1).any(|k| k == format!("--{name}"))
}

fn dur_us(d: Duration) -> u128 {
    d.as_micros()
}

/// Dense coefficients with magnitude in `[0.5, 1.5)` so none is zero.
fn random_coeffs(rng: &mut StdRng, n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|_| {
            let r = rng.random_range(0.5..1.5);
            let theta = rng.random_range(0.0..std::f64::consts::TAU);
            Complex64::from_polar(r, theta)
        })
        .collect()
}

fn main() -> Result<()> {
    let profile_path = PathBuf::from(parse_flag("profile", "benchmarks/profiles/small.toml"));
    let skip_naive = has_flag("skip-naive");

    let profile_src = fs::read_to_string(&profile_path)
        .with_context(|| format!("read profile {}", profile_path.display()))?;
    let profile: Profile = toml::from_str(&profile_src).context("parse profile toml")?;
    if profile.log2_sizes.iter().any(|&k| k > 24) {
        bail!("log2 sizes above 24 are not supported by the harness");
    }
    println!(
        "Profile: sizes=2^{:?}, repeats={}, seed={}, tolerance={:e}",
        profile.log2_sizes, profile.repeats, profile.seed, profile.tolerance
    );

    fs::create_dir_all("benchmarks/reports").context("create benchmarks/reports")?;

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let csv_path = PathBuf::from(format!("benchmarks/reports/bench-{ts}.csv"));
    let mut csv = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&csv_path)
        .with_context(|| format!("open {}", csv_path.display()))?;
    writeln!(csv, "timestamp,n,repeat,stage,us,extra")?;

    let mut rng = StdRng::seed_from_u64(profile.seed);
    let mut failures = 0usize;

    for &k in &profile.log2_sizes {
        let n = 1usize << k;
        let roots = RootsOfUnity::generate(n)?;

        for rep in 0..profile.repeats {
            let coeffs = random_coeffs(&mut rng, n);

            // 1) fft
            let t0 = Instant::now();
            let fast = fft(&coeffs, None)?;
            let t_fft = t0.elapsed();
            writeln!(csv, "{ts},{n},{rep},fft,{},samples={}", dur_us(t_fft), fast.len())?;

            if fast.len() != n {
                println!("n={n} rep={rep}: expected {n} samples, got {}", fast.len());
                failures += 1;
            }

            if skip_naive {
                continue;
            }

            // 2) naive reference + error
            let poly = Polynomial::new(coeffs.clone());
            let t0 = Instant::now();
            let slow = evaluate_at_roots(&poly, &roots);
            let t_naive = t0.elapsed();

            let scale: f64 = coeffs.iter().map(|c| c.norm()).sum();
            let err = max_abs_error(&fast, &slow);
            let ok = err <= profile.tolerance * scale.max(1.0);
            writeln!(
                csv,
                "{ts},{n},{rep},naive,{},max_abs_error={err:e};ok={ok}",
                dur_us(t_naive)
            )?;
            if !ok {
                println!("n={n} rep={rep}: max error {err:e} exceeds tolerance");
                failures += 1;
            }
        }
    }

    println!("Wrote report → {}", csv_path.display());
    if failures > 0 {
        bail!("{failures} run(s) failed the accuracy or length check");
    }
    Ok(())
}
