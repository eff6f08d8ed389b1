//! `.algo` algorithm parameter format.
//!
//! One algorithm per line: the routine name followed by its positional
//! parameters, comma separated.
//!
//! ```text
//! # name, parameters...
//! simplify_nth_point, 4
//! simplify_perpendicular_distance, 0.5, 3
//! simplify_opheim, 0.5, 5
//! simplify_douglas_peucker_n, 100
//! ```
//!
//! The `simplify_` prefix is optional when reading and always written.
//! The repeat count of `simplify_perpendicular_distance` is optional and
//! defaults to one pass. Blank lines and lines starting with `#` are
//! skipped.

use std::fmt::Write;

use polyreduce::AlgorithmKind;

use crate::ParseError;

const PREFIX: &str = "simplify_";

/// Positional parameters of one `.algo` line.
#[derive(Clone, Copy)]
struct Params<'a> {
    line: usize,
    algorithm: &'static str,
    values: &'a [&'a str],
}

impl<'a> Params<'a> {
    const fn named(self, algorithm: &'static str) -> Self {
        Self { algorithm, ..self }
    }

    fn raw(self, index: usize, parameter: &'static str) -> Result<&'a str, ParseError> {
        self.values
            .get(index)
            .copied()
            .ok_or(ParseError::MissingParameter {
                line: self.line,
                algorithm: self.algorithm,
                parameter,
            })
    }

    fn invalid(self, value: &str) -> ParseError {
        ParseError::InvalidNumber {
            line: self.line,
            value: value.to_owned(),
        }
    }

    fn float(self, index: usize, parameter: &'static str) -> Result<f64, ParseError> {
        let value = self.raw(index, parameter)?;
        value.parse().map_err(|_| self.invalid(value))
    }

    fn count(self, index: usize, parameter: &'static str) -> Result<usize, ParseError> {
        let value = self.raw(index, parameter)?;
        value.parse().map_err(|_| self.invalid(value))
    }

    fn optional_count(self, index: usize, default: usize) -> Result<usize, ParseError> {
        self.values.get(index).map_or(Ok(default), |value| {
            value.parse().map_err(|_| self.invalid(value))
        })
    }

    fn at_most(self, expected: usize) -> Result<(), ParseError> {
        if self.values.len() > expected {
            return Err(ParseError::TooManyParameters {
                line: self.line,
                algorithm: self.algorithm,
                expected,
                found: self.values.len(),
            });
        }
        Ok(())
    }
}

fn parse_line(line: usize, text: &str) -> Result<AlgorithmKind, ParseError> {
    let mut fields = text.split(',').map(str::trim);
    let name = fields.next().unwrap_or_default();
    let values: Vec<&str> = fields.filter(|f| !f.is_empty()).collect();
    let params = Params {
        line,
        algorithm: "",
        values: &values,
    };

    let kind = match name.strip_prefix(PREFIX).unwrap_or(name) {
        "nth_point" => {
            let p = params.named("nth_point");
            p.at_most(1)?;
            AlgorithmKind::NthPoint {
                n: p.count(0, "n")?,
            }
        }
        "radial_distance" => {
            let p = params.named("radial_distance");
            p.at_most(1)?;
            AlgorithmKind::RadialDistance {
                tol: p.float(0, "tol")?,
            }
        }
        "perpendicular_distance" => {
            let p = params.named("perpendicular_distance");
            p.at_most(2)?;
            AlgorithmKind::PerpendicularDistance {
                tol: p.float(0, "tol")?,
                repeat: p.optional_count(1, 1)?,
            }
        }
        "reumann_witkam" => {
            let p = params.named("reumann_witkam");
            p.at_most(1)?;
            AlgorithmKind::ReumannWitkam {
                tol: p.float(0, "tol")?,
            }
        }
        "opheim" => {
            let p = params.named("opheim");
            p.at_most(2)?;
            AlgorithmKind::Opheim {
                min_tol: p.float(0, "min_tol")?,
                max_tol: p.float(1, "max_tol")?,
            }
        }
        "lang" => {
            let p = params.named("lang");
            p.at_most(2)?;
            AlgorithmKind::Lang {
                tol: p.float(0, "tol")?,
                look_ahead: p.count(1, "look_ahead")?,
            }
        }
        "douglas_peucker_classic" => {
            let p = params.named("douglas_peucker_classic");
            p.at_most(1)?;
            AlgorithmKind::DouglasPeuckerClassic {
                tol: p.float(0, "tol")?,
            }
        }
        "douglas_peucker" => {
            let p = params.named("douglas_peucker");
            p.at_most(1)?;
            AlgorithmKind::DouglasPeucker {
                tol: p.float(0, "tol")?,
            }
        }
        "douglas_peucker_n" => {
            let p = params.named("douglas_peucker_n");
            p.at_most(1)?;
            AlgorithmKind::DouglasPeuckerN {
                count: p.count(0, "count")?,
            }
        }
        _ => {
            return Err(ParseError::UnknownAlgorithm {
                line,
                name: name.to_owned(),
            });
        }
    };
    Ok(kind)
}

/// Parse a `.algo` document into the algorithms it lists, in order.
///
/// A document with no algorithm lines yields an empty list.
///
/// # Errors
///
/// Returns [`ParseError::UnknownAlgorithm`], [`ParseError::MissingParameter`],
/// [`ParseError::TooManyParameters`] or [`ParseError::InvalidNumber`] for
/// the first malformed line.
///
/// # Examples
///
/// ```
/// use polyreduce::AlgorithmKind;
/// use polyreduce_export::parse_algo;
///
/// let kinds = parse_algo("# demo\nsimplify_lang, 0.5, 8\nradial_distance,2\n").unwrap();
/// assert_eq!(
///     kinds,
///     vec![
///         AlgorithmKind::Lang { tol: 0.5, look_ahead: 8 },
///         AlgorithmKind::RadialDistance { tol: 2.0 },
///     ]
/// );
/// ```
pub fn parse_algo(input: &str) -> Result<Vec<AlgorithmKind>, ParseError> {
    input
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(line, text)| parse_line(line, text))
        .collect()
}

/// Serialize algorithms as a `.algo` document, one per line.
#[must_use]
pub fn to_algo_string(kinds: &[AlgorithmKind]) -> String {
    let mut out = String::new();
    for kind in kinds {
        out.push_str(PREFIX);
        out.push_str(kind.name());
        for value in kind.params() {
            let _ = write!(out, ",{value}");
        }
        out.push('\n');
    }
    out
}
