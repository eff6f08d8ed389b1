//! Benchmark results and their rendering.

use std::fmt::Write;
use std::time::Duration;

use polyreduce::{AlgorithmKind, Statistics};
use serde::Serialize;

use crate::run::Container;

/// Serde helper for `Duration` fields, written as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Serialize, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }
}

/// Result of timing one algorithm.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    /// Algorithm and parameters.
    pub algorithm: AlgorithmKind,
    /// Container the polyline was stored in.
    pub container: Container,
    /// Points in the input.
    pub original_points: usize,
    /// Points in the simplification.
    pub points: usize,
    /// Median wall-clock duration (seconds).
    #[serde(with = "duration_serde")]
    pub median: Duration,
    /// Positional error of the simplification, when it could be computed.
    pub statistics: Option<Statistics>,
    /// Agreement with the reference implementation, when checked.
    pub reference_agrees: Option<bool>,
    /// Simplified coordinates.
    #[serde(skip)]
    pub simplification: Vec<f64>,
}

impl AlgorithmReport {
    /// Output points as a percentage of input points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.original_points == 0 {
            return 0.0;
        }
        self.points as f64 / self.original_points as f64 * 100.0
    }
}

/// Results for one polyline.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Polyline file the results were measured on.
    pub polyline: String,
    /// Coordinates per point.
    pub dimension: usize,
    /// Points in the polyline.
    pub points: usize,
    /// Timed repetitions per algorithm.
    pub runs: usize,
    /// One entry per algorithm that ran.
    pub results: Vec<AlgorithmReport>,
}

fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn agreement(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "same",
        Some(false) => "DIFFERENT",
        None => "",
    }
}

impl BenchReport {
    /// Comma-separated table, one row per algorithm, preceded by a header.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}: {} points, dimension {}, {} runs",
            self.polyline, self.points, self.dimension, self.runs
        );
        out.push_str(
            "container,algorithm,parameters,points,ratio,median (ms),\
             error mean,error std,error max,error sum,reference\n",
        );
        for result in &self.results {
            let parameters: Vec<String> = result
                .algorithm
                .params()
                .iter()
                .map(f64::to_string)
                .collect();
            let _ = write!(
                out,
                "{},{},{},{},{:.0}%,{:.3},",
                result.container.name(),
                result.algorithm.name(),
                parameters.join(" "),
                result.points,
                result.ratio(),
                duration_ms(result.median),
            );
            match &result.statistics {
                Some(s) => {
                    let _ = write!(out, "{},{},{},{},", s.mean, s.std, s.max, s.sum);
                }
                None => out.push_str(",,,,"),
            }
            out.push_str(agreement(result.reference_agrees));
            out.push('\n');
        }
        out
    }
}
