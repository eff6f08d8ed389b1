//! polyreduce: Generic n-dimensional polyline simplification (sans-IO).
//!
//! A polyline is a flat sequence of coordinates, `D` per point. Every
//! routine reads such a sequence, appends a simplified one to a caller
//! supplied sink and returns the number of coordinates appended. The output
//! is always a subsequence of whole input points that starts with the first
//! point and ends with the last.
//!
//! Routines:
//!
//! | routine | traversal | parameters |
//! |---|---|---|
//! | [`simplify_nth_point`] | forward | `n` |
//! | [`simplify_radial_distance`] | forward | `tol` |
//! | [`simplify_perpendicular_distance`] | forward | `tol` |
//! | [`simplify_perpendicular_distance_repeat`] | forward | `tol`, `repeat` |
//! | [`simplify_reumann_witkam`] | forward | `tol` |
//! | [`simplify_opheim`] | forward | `min_tol`, `max_tol` |
//! | [`simplify_lang`] | random access | `tol`, `look_ahead` |
//! | [`simplify_douglas_peucker_classic`] | random access | `tol` |
//! | [`simplify_douglas_peucker`] | random access | `tol` |
//! | [`simplify_douglas_peucker_n`] | random access | `count` |
//!
//! Input that cannot be simplified is copied to the output unchanged: a
//! coordinate count that is not a multiple of `D`, fewer than three
//! points, or an out-of-range parameter.
//!
//! Distances are computed in the calculation type of the coordinate type
//! (see [`coord`]), so integer polylines neither overflow nor underflow.
//!
//! ```
//! use polyreduce::simplify_douglas_peucker;
//!
//! let polyline = [0.0, 0.0, 1.0, 0.1, 2.0, -0.1, 3.0, 5.0, 4.0, 6.0, 5.0, 7.0];
//! let mut simplified = Vec::new();
//! let written = simplify_douglas_peucker::<2, _, _, _>(&polyline[..], 1.0, &mut simplified);
//! assert_eq!(written, simplified.len());
//! assert_eq!(simplified, [0.0, 0.0, 2.0, -0.1, 3.0, 5.0, 5.0, 7.0]);
//! ```
//!
//! This crate has **no I/O dependencies**. File formats live in
//! `polyreduce-export`, timing and comparison tools in `polyreduce-bench`.

pub mod algorithm;
pub mod coord;
pub mod douglas_peucker;
pub mod lang;
pub mod math;
pub mod nth_point;
pub mod opheim;
pub mod perpendicular_distance;
pub mod positional_error;
pub mod radial_distance;
pub mod reumann_witkam;
pub mod traversal;

#[cfg(test)]
mod fixtures;

pub use algorithm::{AlgorithmKind, Simplifier};
pub use coord::{Calc, Coordinate, calc_from_f64};
pub use douglas_peucker::{
    simplify_douglas_peucker, simplify_douglas_peucker_classic, simplify_douglas_peucker_n,
};
pub use lang::simplify_lang;
pub use nth_point::simplify_nth_point;
pub use opheim::simplify_opheim;
pub use perpendicular_distance::{
    simplify_perpendicular_distance, simplify_perpendicular_distance_repeat,
};
pub use positional_error::{
    ComparisonError, Statistics, compute_positional_error_statistics, compute_positional_errors2,
};
pub use radial_distance::simplify_radial_distance;
pub use reumann_witkam::simplify_reumann_witkam;
pub use traversal::RandomAccess;
