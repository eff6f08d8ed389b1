//! polyreduce-bench: CLI tool for timing simplification algorithms.
//!
//! Reads a polyline (`.poly`) and a list of algorithms with their
//! parameters (`.algo`), runs each algorithm several times and prints
//! the output size, median duration and positional error of each. Useful
//! for:
//!
//! - Comparing algorithms on the same data
//! - Tuning tolerances against an error budget
//! - Checking the Douglas-Peucker variants against a reference
//!
//! Set `RUST_LOG=debug` for per-algorithm progress on stderr.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin polyreduce-bench -- [OPTIONS] <POLY> [ALGO]
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod error;
mod reference;
mod report;
mod run;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use log::info;
use polyreduce::AlgorithmKind;
use polyreduce_export::{SvgMetadata, parse_algo, parse_poly, to_overlay_svg};

use crate::error::BenchError;
use crate::report::BenchReport;
use crate::run::{Clock, Container, Options};

/// Timing and error measurement for polyline simplification.
///
/// Runs every algorithm listed in the `.algo` file on the polyline in the
/// `.poly` file and prints one row of results per algorithm.
#[derive(Parser)]
#[command(name = "polyreduce-bench", version)]
struct Cli {
    /// Polyline file: one point per line, comma-separated coordinates.
    poly: PathBuf,

    /// Algorithm file: one `name,param,...` line per algorithm.
    ///
    /// Defaults to the polyline path with an `.algo` extension.
    algo: Option<PathBuf>,

    /// Number of timed runs per algorithm; the median is reported.
    #[arg(long, default_value_t = 5, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    runs: usize,

    /// Container the polyline is stored in while simplifying.
    #[arg(long, value_enum, default_value_t = Container::Slice)]
    container: Container,

    /// Output results as JSON instead of a comma-separated table.
    #[arg(long)]
    json: bool,

    /// Write one overlay SVG per algorithm into this directory (2-D only).
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Check Douglas-Peucker results against a reference implementation.
    #[arg(long)]
    compare_reference: bool,

    /// Algorithms as a JSON list, e.g. `[{"algorithm":"lang","tol":1,"look_ahead":8}]`.
    ///
    /// When provided, the `.algo` file is not read.
    #[arg(long)]
    algorithms_json: Option<String>,
}

fn read(path: &Path) -> Result<String, BenchError> {
    std::fs::read_to_string(path).map_err(|source| BenchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Algorithms from `--algorithms-json` or the `.algo` file.
fn algorithms(cli: &Cli) -> Result<Vec<AlgorithmKind>, BenchError> {
    if let Some(ref json) = cli.algorithms_json {
        return serde_json::from_str(json).map_err(BenchError::AlgorithmsJson);
    }
    let path = cli
        .algo
        .clone()
        .unwrap_or_else(|| cli.poly.with_extension("algo"));
    parse_algo(&read(&path)?).map_err(|source| BenchError::Parse { path, source })
}

/// Write one overlay SVG per result into `dir`.
fn write_svgs(
    dir: &Path,
    stem: &str,
    original: &[f64],
    report: &BenchReport,
) -> Result<(), BenchError> {
    std::fs::create_dir_all(dir).map_err(|source| BenchError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    for (index, result) in report.results.iter().enumerate() {
        let description = result.algorithm.to_string();
        let metadata = SvgMetadata {
            title: Some(stem),
            description: Some(&description),
        };
        let svg = to_overlay_svg(original, &result.simplification, &metadata);
        let path = dir.join(format!("{stem}-{index:02}-{}.svg", result.algorithm.name()));
        std::fs::write(&path, &svg).map_err(|source| BenchError::Write {
            path: path.clone(),
            source,
        })?;
        info!("SVG written to {} ({} bytes)", path.display(), svg.len());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), BenchError> {
    let polyline = parse_poly(&read(&cli.poly)?).map_err(|source| BenchError::Parse {
        path: cli.poly.clone(),
        source,
    })?;
    if cli.svg.is_some() && polyline.dimension != 2 {
        return Err(BenchError::SvgDimension(polyline.dimension));
    }
    let kinds = algorithms(cli)?;
    if kinds.is_empty() {
        return Err(BenchError::NoAlgorithms);
    }

    let options = Options {
        runs: cli.runs,
        container: cli.container,
        compare_reference: cli.compare_reference,
    };
    let results = run::bench(&polyline, &kinds, &options, &StdClock)?;
    let report = BenchReport {
        polyline: cli.poly.display().to_string(),
        dimension: polyline.dimension,
        points: polyline.point_count(),
        runs: cli.runs,
        results,
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(BenchError::Serialize)?;
        println!("{json}");
    } else {
        print!("{}", report.report());
    }

    if let Some(ref dir) = cli.svg {
        let stem = cli
            .poly
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("polyline");
        write_svgs(dir, stem, &polyline.coords, &report)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// [`Clock`] implementation backed by [`std::time::Instant`].
struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: &Instant) -> Duration {
        since.elapsed()
    }
}
