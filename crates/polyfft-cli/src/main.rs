// crates/polyfft-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polyfft::{
    fft_polynomial, naive, smallest_power_of_two_not_less_than, Complex64, Polynomial,
    RootsOfUnity,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "polyfft-cli",
    about = "Evaluate polynomials at roots of unity",
    long_about = "Evaluate polynomials at roots of unity.\n\nCoefficients are listed lowest power first as complex literals: `1`, `2.5`, `1+2i`, `3i`.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Samples of a polynomial at the roots of unity (recursive FFT)
    Fft {
        /// Comma-separated coefficients, lowest power first
        #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
        coeffs: Option<String>,

        /// JSON file holding a coefficient list (`[[re, im], ...]`)
        #[arg(long, conflicts_with = "coeffs")]
        input: Option<PathBuf>,

        /// Root-of-unity order (defaults to the smallest power of two covering the degree)
        #[arg(long, env = "POLYFFT_ROOT_ORDER")]
        root_order: Option<usize>,

        /// Compare against the O(n²) evaluator and report the max error
        #[arg(long, default_value_t = false)]
        check: bool,

        /// Write samples as JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Evaluate a polynomial at a single point (Horner's rule)
    Eval {
        /// Comma-separated coefficients, lowest power first
        #[arg(long, allow_hyphen_values = true)]
        coeffs: String,

        /// Point to evaluate at
        #[arg(long, allow_hyphen_values = true)]
        at: String,
    },

    /// Print a set of roots of unity
    Roots {
        /// Order n (>0)
        #[arg(long)]
        order: usize,

        /// Square the set (dropping repeats) before printing
        #[arg(long, default_value_t = false)]
        squared: bool,

        /// Keep only the first half before printing
        #[arg(long, default_value_t = false)]
        half: bool,
    },

    /// Smallest power of two not less than N
    Pow2 {
        /// Lower bound
        n: usize,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Fft {
            coeffs,
            input,
            root_order,
            check,
            out,
        } => run_fft(
            coeffs.as_deref(),
            input.as_deref(),
            root_order,
            check,
            out.as_deref(),
        ),

        Cmd::Eval { coeffs, at } => eval(&coeffs, &at),

        Cmd::Roots {
            order,
            squared,
            half,
        } => roots(order, squared, half),

        Cmd::Pow2 { n } => {
            println!("{}", smallest_power_of_two_not_less_than(n));
            Ok(())
        }
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Parse a comma-separated list of complex literals.
fn parse_coeffs(list: &str) -> Result<Vec<Complex64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_complex)
        .collect()
}

fn parse_complex(s: &str) -> Result<Complex64> {
    s.parse::<Complex64>()
        .with_context(|| format!("invalid complex number {s:?}"))
}

fn read_polynomial(path: &Path) -> Result<Polynomial> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("deserialize JSON coefficients from {}", path.display()))
}

fn run_fft(
    coeffs: Option<&str>,
    input: Option<&Path>,
    root_order: Option<usize>,
    check: bool,
    out: Option<&Path>,
) -> Result<()> {
    let poly = match (coeffs, input) {
        (Some(list), _) => Polynomial::new(parse_coeffs(list)?),
        (None, Some(path)) => read_polynomial(path)?,
        (None, None) => bail!("either --coeffs or --input is required"),
    };

    let roots = match root_order {
        Some(n) => RootsOfUnity::generate(n).context("building root-of-unity set")?,
        None => {
            let terms = usize::try_from(poly.degree() + 1).unwrap_or(0);
            let n = smallest_power_of_two_not_less_than(terms);
            RootsOfUnity::generate(n).context("building default root-of-unity set")?
        }
    };

    info!(degree = poly.degree(), order = roots.order(), "running fft");
    let samples = fft_polynomial(&poly, Some(&roots));

    if samples.len() != roots.len() && poly.degree() > 0 {
        warn!(
            samples = samples.len(),
            order = roots.order(),
            "fewer samples than roots; pad the input to a dense power-of-two length"
        );
    }

    if check {
        let reference = naive::evaluate_at_roots(&poly, &roots);
        let err = naive::max_abs_error(&samples, &reference);
        info!(
            max_abs_error = err,
            compared = samples.len().min(reference.len()),
            "checked against naive evaluation"
        );
    }

    let json = serde_json::to_string(&samples).context("serialize samples to JSON")?;
    match out {
        Some(path) => {
            ensure_parent_dir(path)?;
            let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut w = BufWriter::new(f);
            w.write_all(json.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
            println!("Wrote {} samples → {}", samples.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn eval(coeffs: &str, at: &str) -> Result<()> {
    let poly = Polynomial::new(parse_coeffs(coeffs)?);
    let x = parse_complex(at)?;
    info!(degree = poly.degree(), %x, "evaluating");
    println!("{}", poly.evaluate(x));
    Ok(())
}

fn roots(order: usize, squared: bool, half: bool) -> Result<()> {
    let mut set = RootsOfUnity::generate(order).context("building root-of-unity set")?;
    if squared {
        set = set.squared();
    }
    if half {
        set = set.first_half();
    }
    info!(order = set.order(), len = set.len(), squared, half, "roots");
    let json = serde_json::to_string(set.as_slice()).context("serialize roots to JSON")?;
    println!("{json}");
    Ok(())
}
