//! Positional error of a simplification against its original polyline.
//!
//! The positional error of an original point is its distance to the
//! simplified segment that replaced it. Simplifications produced by this
//! crate are subsequences of their input, so every simplified point occurs
//! in the original and the segment each original point belongs to is found
//! by walking both sequences once.

use num_traits::{Float, ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::Coordinate;
use crate::math::{promote, segment_distance2};
use crate::traversal::points;

/// Reasons a polyline and a simplification cannot be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComparisonError {
    /// The polyline ends in a partial point.
    #[error("polyline has a trailing incomplete point")]
    MalformedPolyline,

    /// The simplification ends in a partial point.
    #[error("simplification has a trailing incomplete point")]
    MalformedSimplification,

    /// The polyline has fewer than 3 points.
    #[error("polyline has {points} points, at least 3 are required")]
    PolylineTooShort { points: usize },

    /// The simplification has fewer than 2 points.
    #[error("simplification has {points} points, at least 2 are required")]
    SimplificationTooShort { points: usize },

    /// The simplification has more points than the polyline.
    #[error("simplification has {simplified} points, more than the polyline's {original}")]
    SimplificationTooLong { simplified: usize, original: usize },

    /// The first points differ.
    #[error("polyline and simplification start at different points")]
    FirstPointMismatch,

    /// A simplified point does not occur, in order, in the polyline.
    #[error("simplified point {index} does not occur in the polyline")]
    UnmatchedPoint { index: usize },

    /// The polyline continues past the last simplified point.
    #[error("polyline and simplification end at different points")]
    LastPointMismatch,
}

/// Summary of the positional errors of a simplification.
///
/// Computed over Euclidean (not squared) distances. `std` is the population
/// standard deviation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub max: f64,
    pub sum: f64,
    pub mean: f64,
    pub std: f64,
}

impl Statistics {
    /// Summarise a set of errors. An empty set yields all zeros.
    #[must_use]
    pub fn from_errors(errors: &[f64]) -> Self {
        if errors.is_empty() {
            return Self::default();
        }
        #[allow(clippy::cast_precision_loss)]
        let n = errors.len() as f64;
        let max = errors.iter().copied().fold(0.0, f64::max);
        let sum: f64 = errors.iter().sum();
        let mean = sum / n;
        let variance = errors.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / n;
        Self {
            max,
            sum,
            mean,
            std: variance.sqrt(),
        }
    }
}

/// Squared positional error of every original point, in order.
///
/// Original points are walked alongside the simplified segments. Points up
/// to (not including) the one equal to the segment's end belong to that
/// segment; the matching point starts the next segment. The point matching
/// the last simplified point is emitted with error zero. Original points
/// after it must repeat that point, each with error zero, since both
/// sequences have to end at the same point.
///
/// Returns the number of errors written to `out`.
///
/// # Errors
///
/// Returns a [`ComparisonError`] when either sequence is malformed or too
/// short, when the simplification is longer than the polyline, when the
/// first points differ, when a simplified point is never found, or when the
/// last points differ. The first-point check happens before anything is
/// written; the other mismatches are only detected at the end of the walk,
/// and errors already written to `out` by then are meaningless.
pub fn compute_positional_errors2<const D: usize, T, P, S, O>(
    polyline: P,
    simplification: S,
    out: &mut O,
) -> Result<usize, ComparisonError>
where
    T: Coordinate,
    P: IntoIterator<Item = T>,
    P::IntoIter: ExactSizeIterator,
    S: IntoIterator<Item = T>,
    S::IntoIter: ExactSizeIterator,
    O: Extend<T::Calc>,
{
    let polyline = polyline.into_iter();
    let simplification = simplification.into_iter();
    let original = validate_len::<D>(polyline.len(), ComparisonError::MalformedPolyline)?;
    let simplified =
        validate_len::<D>(simplification.len(), ComparisonError::MalformedSimplification)?;
    if original < 3 {
        return Err(ComparisonError::PolylineTooShort { points: original });
    }
    if simplified < 2 {
        return Err(ComparisonError::SimplificationTooShort { points: simplified });
    }
    if simplified > original {
        return Err(ComparisonError::SimplificationTooLong {
            simplified,
            original,
        });
    }

    let mut polyline = points::<D, _>(polyline);
    let mut simplification = points::<D, _>(simplification);
    let (Some(mut current), Some(mut start)) = (polyline.next(), simplification.next()) else {
        return Err(ComparisonError::PolylineTooShort { points: original });
    };
    if current != start {
        return Err(ComparisonError::FirstPointMismatch);
    }

    let mut written = 0;
    for (index, end) in (1..).zip(simplification) {
        let (l0, l1) = (promote(&start), promote(&end));
        loop {
            out.extend(std::iter::once(segment_distance2(&l0, &l1, &promote(&current))));
            written += 1;
            current = polyline
                .next()
                .ok_or(ComparisonError::UnmatchedPoint { index })?;
            if current == end {
                break;
            }
        }
        start = end;
    }
    out.extend(std::iter::once(num_traits::zero::<T::Calc>()));
    written += 1;
    for rest in polyline {
        if rest != start {
            return Err(ComparisonError::LastPointMismatch);
        }
        out.extend(std::iter::once(num_traits::zero::<T::Calc>()));
        written += 1;
    }
    Ok(written)
}

/// Statistics over the positional errors of a simplification.
///
/// # Errors
///
/// Fails for the same reasons as [`compute_positional_errors2`].
pub fn compute_positional_error_statistics<const D: usize, T, P, S>(
    polyline: P,
    simplification: S,
) -> Result<Statistics, ComparisonError>
where
    T: Coordinate,
    P: IntoIterator<Item = T>,
    P::IntoIter: ExactSizeIterator,
    S: IntoIterator<Item = T>,
    S::IntoIter: ExactSizeIterator,
{
    let mut squared: Vec<T::Calc> = Vec::new();
    compute_positional_errors2::<D, _, _, _, _>(polyline, simplification, &mut squared)?;
    let errors: Vec<f64> = squared
        .iter()
        .map(|e| e.sqrt().to_f64().unwrap_or(f64::NAN))
        .collect();
    Ok(Statistics::from_errors(&errors))
}

/// Number of points in `coord_count` coordinates, or `malformed`.
const fn validate_len<const D: usize>(
    coord_count: usize,
    malformed: ComparisonError,
) -> Result<usize, ComparisonError> {
    if D == 0 || coord_count % D != 0 {
        return Err(malformed);
    }
    Ok(coord_count / D)
}
