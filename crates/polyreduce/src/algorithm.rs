//! Runtime selection of a simplification algorithm.
//!
//! Provides the [`Simplifier`] trait and the [`AlgorithmKind`] enum naming
//! every routine in this crate together with its parameters.
//!
//! # Strategy pattern
//!
//! The routines differ in their parameters and in the traversal they
//! need, so calling them directly requires knowing the algorithm at
//! compile time. `AlgorithmKind` erases that: parameter files, benchmarks
//! and tests hold a list of kinds and dispatch through [`Simplifier`],
//! while each routine stays a plain generic function.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::{Coordinate, calc_from_f64};
use crate::douglas_peucker::{
    simplify_douglas_peucker, simplify_douglas_peucker_classic, simplify_douglas_peucker_n,
};
use crate::lang::simplify_lang;
use crate::nth_point::simplify_nth_point;
use crate::opheim::simplify_opheim;
use crate::perpendicular_distance::simplify_perpendicular_distance_repeat;
use crate::radial_distance::simplify_radial_distance;
use crate::reumann_witkam::simplify_reumann_witkam;

/// A simplification algorithm and its parameters.
///
/// Tolerances are stored as `f64` and converted to the calculation type of
/// the coordinates being simplified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Keep every `n`-th point.
    NthPoint { n: usize },

    /// Drop points within `tol` of the last kept point.
    RadialDistance { tol: f64 },

    /// Drop points within `tol` of the line through their neighbours,
    /// repeated up to `repeat` times.
    PerpendicularDistance {
        tol: f64,
        #[serde(default = "default_repeat")]
        repeat: usize,
    },

    /// Drop points within a strip of half-width `tol`.
    ReumannWitkam { tol: f64 },

    /// Drop points inside a search region bounded by `min_tol` and
    /// `max_tol`.
    Opheim { min_tol: f64, max_tol: f64 },

    /// Drop points within `tol` of a segment spanning up to `look_ahead`
    /// points.
    Lang { tol: f64, look_ahead: usize },

    /// Classic Douglas-Peucker.
    DouglasPeuckerClassic { tol: f64 },

    /// Douglas-Peucker after radial distance vertex reduction.
    DouglasPeucker { tol: f64 },

    /// Douglas-Peucker keeping exactly `count` points.
    DouglasPeuckerN { count: usize },
}

const fn default_repeat() -> usize {
    1
}

impl AlgorithmKind {
    /// One instance of every algorithm with typical parameters for
    /// unit-scale data.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::NthPoint { n: 4 },
            Self::RadialDistance { tol: 1.0 },
            Self::PerpendicularDistance { tol: 1.0, repeat: 1 },
            Self::ReumannWitkam { tol: 1.0 },
            Self::Opheim {
                min_tol: 1.0,
                max_tol: 5.0,
            },
            Self::Lang {
                tol: 1.0,
                look_ahead: 8,
            },
            Self::DouglasPeuckerClassic { tol: 1.0 },
            Self::DouglasPeucker { tol: 1.0 },
            Self::DouglasPeuckerN { count: 16 },
        ]
    }

    /// Snake-case algorithm name, as used in serialized forms.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NthPoint { .. } => "nth_point",
            Self::RadialDistance { .. } => "radial_distance",
            Self::PerpendicularDistance { .. } => "perpendicular_distance",
            Self::ReumannWitkam { .. } => "reumann_witkam",
            Self::Opheim { .. } => "opheim",
            Self::Lang { .. } => "lang",
            Self::DouglasPeuckerClassic { .. } => "douglas_peucker_classic",
            Self::DouglasPeucker { .. } => "douglas_peucker",
            Self::DouglasPeuckerN { .. } => "douglas_peucker_n",
        }
    }

    /// Parameter values in their positional order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn params(&self) -> Vec<f64> {
        match *self {
            Self::NthPoint { n } => vec![n as f64],
            Self::RadialDistance { tol }
            | Self::ReumannWitkam { tol }
            | Self::DouglasPeuckerClassic { tol }
            | Self::DouglasPeucker { tol } => vec![tol],
            Self::PerpendicularDistance { tol, repeat } => vec![tol, repeat as f64],
            Self::Opheim { min_tol, max_tol } => vec![min_tol, max_tol],
            Self::Lang { tol, look_ahead } => vec![tol, look_ahead as f64],
            Self::DouglasPeuckerN { count } => vec![count as f64],
        }
    }

    /// Whether this is one of the Douglas-Peucker variants.
    #[must_use]
    pub const fn is_douglas_peucker(&self) -> bool {
        matches!(
            self,
            Self::DouglasPeuckerClassic { .. }
                | Self::DouglasPeucker { .. }
                | Self::DouglasPeuckerN { .. }
        )
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NthPoint { n } => write!(f, "nth_point(n={n})"),
            Self::RadialDistance { tol } => write!(f, "radial_distance(tol={tol})"),
            Self::PerpendicularDistance { tol, repeat } => {
                write!(f, "perpendicular_distance(tol={tol}, repeat={repeat})")
            }
            Self::ReumannWitkam { tol } => write!(f, "reumann_witkam(tol={tol})"),
            Self::Opheim { min_tol, max_tol } => {
                write!(f, "opheim(min_tol={min_tol}, max_tol={max_tol})")
            }
            Self::Lang { tol, look_ahead } => {
                write!(f, "lang(tol={tol}, look_ahead={look_ahead})")
            }
            Self::DouglasPeuckerClassic { tol } => {
                write!(f, "douglas_peucker_classic(tol={tol})")
            }
            Self::DouglasPeucker { tol } => write!(f, "douglas_peucker(tol={tol})"),
            Self::DouglasPeuckerN { count } => write!(f, "douglas_peucker_n(count={count})"),
        }
    }
}

/// Trait for simplification strategies.
///
/// Input: a flat coordinate slice of dimension `D`.
/// Output: the simplified flat coordinate sequence, a subsequence of whole
/// points of the input.
pub trait Simplifier {
    /// Simplify `coords`, returning a new coordinate vector.
    fn simplify<const D: usize, T: Coordinate>(&self, coords: &[T]) -> Vec<T>;
}

impl Simplifier for AlgorithmKind {
    fn simplify<const D: usize, T: Coordinate>(&self, coords: &[T]) -> Vec<T> {
        let tol = |value: f64| calc_from_f64::<T::Calc>(value);
        let forward = coords.iter().copied();
        let mut out = Vec::with_capacity(coords.len());
        match *self {
            Self::NthPoint { n } => {
                simplify_nth_point::<D, _, _, _>(forward, n, &mut out);
            }
            Self::RadialDistance { tol: t } => {
                simplify_radial_distance::<D, _, _, _>(forward, tol(t), &mut out);
            }
            Self::PerpendicularDistance { tol: t, repeat } => {
                simplify_perpendicular_distance_repeat::<D, _, _, _>(
                    forward,
                    tol(t),
                    repeat,
                    &mut out,
                );
            }
            Self::ReumannWitkam { tol: t } => {
                simplify_reumann_witkam::<D, _, _, _>(forward, tol(t), &mut out);
            }
            Self::Opheim { min_tol, max_tol } => {
                simplify_opheim::<D, _, _, _>(forward, tol(min_tol), tol(max_tol), &mut out);
            }
            Self::Lang { tol: t, look_ahead } => {
                simplify_lang::<D, _, _, _>(coords, tol(t), look_ahead, &mut out);
            }
            Self::DouglasPeuckerClassic { tol: t } => {
                simplify_douglas_peucker_classic::<D, _, _, _>(coords, tol(t), &mut out);
            }
            Self::DouglasPeucker { tol: t } => {
                simplify_douglas_peucker::<D, _, _, _>(coords, tol(t), &mut out);
            }
            Self::DouglasPeuckerN { count } => {
                simplify_douglas_peucker_n::<D, _, _, _>(coords, count, &mut out);
            }
        }
        out
    }
}
