//! Reference Douglas-Peucker used to cross-check the library.
//!
//! A straightforward recursive implementation over owned points. It
//! shares only the distance metric with `polyreduce` and is written for
//! clarity, not speed.

use polyreduce::math::{point_distance2, segment_distance2};

fn to_points<const D: usize>(coords: &[f64]) -> Vec<[f64; D]> {
    coords
        .chunks_exact(D)
        .map(|chunk| {
            let mut point = [0.0; D];
            point.copy_from_slice(chunk);
            point
        })
        .collect()
}

/// Drop points within `tol` of the previously kept point. The last point
/// is always kept.
fn reduce<const D: usize>(points: &[[f64; D]], tol2: f64) -> Vec<[f64; D]> {
    let mut kept = Vec::with_capacity(points.len());
    let Some((first, rest)) = points.split_first() else {
        return kept;
    };
    kept.push(*first);
    let mut previous = *first;
    for (i, point) in rest.iter().enumerate() {
        let is_last = i + 1 == rest.len();
        if is_last || point_distance2(&previous, point) > tol2 {
            kept.push(*point);
            previous = *point;
        }
    }
    kept
}

fn split<const D: usize>(
    points: &[[f64; D]],
    first: usize,
    last: usize,
    tol2: f64,
    keep: &mut [bool],
) {
    if last <= first + 1 {
        return;
    }
    let mut farthest = first;
    let mut max2 = 0.0;
    for (i, point) in points.iter().enumerate().take(last).skip(first + 1) {
        let d2 = segment_distance2(&points[first], &points[last], point);
        if d2 > max2 {
            farthest = i;
            max2 = d2;
        }
    }
    if max2 > tol2 {
        keep[farthest] = true;
        split(points, first, farthest, tol2, keep);
        split(points, farthest, last, tol2, keep);
    }
}

/// Simplify flat `D`-dimensional coordinates with Douglas-Peucker.
///
/// With `reduce` set, a radial distance pass with the same tolerance runs
/// first. Input with an incomplete point, fewer than three points or a
/// non-positive tolerance is returned unchanged.
pub fn douglas_peucker<const D: usize>(coords: &[f64], tol: f64, reduce_first: bool) -> Vec<f64> {
    if D == 0 || coords.len() % D != 0 || coords.len() / D < 3 || tol.is_nan() || tol <= 0.0 {
        return coords.to_vec();
    }
    let points = to_points::<D>(coords);
    let tol2 = tol * tol;
    let points = if reduce_first { reduce(&points, tol2) } else { points };

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    split(&points, 0, points.len() - 1, tol2, &mut keep);

    points
        .iter()
        .zip(&keep)
        .filter(|(_, kept)| **kept)
        .flat_map(|(point, _)| point.iter().copied())
        .collect()
}
