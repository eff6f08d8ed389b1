//! polyreduce-export: Pure format serializers (sans-IO)
//!
//! Reads and writes the plain-text polyline (`.poly`) and algorithm
//! parameter (`.algo`) formats, and renders a 2-D polyline together with
//! its simplification as an SVG overlay.
//!
//! Every function here takes and returns strings. Reading and writing
//! files is left to the caller.

pub mod algo;
pub mod poly;
pub mod svg;

pub use algo::{parse_algo, to_algo_string};
pub use poly::{Polyline, parse_poly, to_poly_string};
pub use svg::{SvgMetadata, to_overlay_svg};

/// Error parsing a `.poly` or `.algo` document.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The document holds no points.
    #[error("no points found")]
    Empty,

    /// A value could not be parsed as a number.
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },

    /// A point has a different number of coordinates than the first.
    #[error("line {line}: expected {expected} coordinates, found {found}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The algorithm name is not one of the known routines.
    #[error("line {line}: unknown algorithm {name:?}")]
    UnknownAlgorithm { line: usize, name: String },

    /// An algorithm line lacks a required parameter.
    #[error("line {line}: {algorithm} is missing parameter {parameter}")]
    MissingParameter {
        line: usize,
        algorithm: &'static str,
        parameter: &'static str,
    },

    /// An algorithm line has more parameters than the routine takes.
    #[error("line {line}: {algorithm} takes at most {expected} parameters, found {found}")]
    TooManyParameters {
        line: usize,
        algorithm: &'static str,
        expected: usize,
        found: usize,
    },
}
