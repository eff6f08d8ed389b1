//! Douglas-Peucker routines.
//!
//! All three variants mark kept points in a [`Keys`] array and copy the
//! marked points out at the end, so they need random access to the input.
//!
//! - [`simplify_douglas_peucker_classic`]: the textbook algorithm, with an
//!   explicit stack of ranges instead of recursion.
//! - [`simplify_douglas_peucker`]: radial distance vertex reduction first,
//!   then the classic algorithm on the reduced polyline. Much faster on
//!   dense input; the result can differ from the classic variant.
//! - [`simplify_douglas_peucker_n`]: refines the most significant range
//!   first until a requested number of points is kept.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use num_traits::ToPrimitive;

use crate::coord::{Calc, Coordinate, is_positive};
use crate::math::{promote, segment_distance2};
use crate::radial_distance::simplify_radial_distance;
use crate::traversal::{
    Emitter, Keys, PassThrough, RandomAccess, coords_of, pass_through, point_count,
};

/// Which interior point wins when several share the maximum distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tie {
    First,
    Last,
}

/// Interior point of `(first, last)` farthest from the segment joining them.
///
/// `None` when the range has no interior point.
fn farthest<const D: usize, T, R>(
    coords: &R,
    first: usize,
    last: usize,
    tie: Tie,
) -> Option<(usize, T::Calc)>
where
    T: Coordinate,
    R: RandomAccess<T> + ?Sized,
{
    let start = promote(&coords.point::<D>(first));
    let end = promote(&coords.point::<D>(last));
    let mut best: Option<(usize, T::Calc)> = None;
    for index in first + 1..last {
        let distance2 = segment_distance2(&start, &end, &promote(&coords.point::<D>(index)));
        let better = match (best, tie) {
            (None, _) => true,
            (Some((_, max)), Tie::First) => distance2 > max,
            (Some((_, max)), Tie::Last) => distance2 >= max,
        };
        if better {
            best = Some((index, distance2));
        }
    }
    best
}

/// Keep-markers produced by the classic algorithm with squared tolerance
/// `tol2`.
fn classic_keys<const D: usize, T, R>(coords: &R, count: usize, tol2: T::Calc) -> Keys
where
    T: Coordinate,
    R: RandomAccess<T> + ?Sized,
{
    let mut keys = Keys::with_endpoints(count);
    let mut ranges = vec![(0, count - 1)];
    while let Some((first, last)) = ranges.pop() {
        let Some((split, distance2)) = farthest::<D, T, R>(coords, first, last, Tie::First) else {
            continue;
        };
        if distance2 > tol2 {
            keys.keep(split);
            ranges.push((first, split));
            ranges.push((split, last));
        }
    }
    keys
}

/// Classic Douglas-Peucker.
///
/// Starting from the whole polyline, the interior point farthest from the
/// segment joining a range's endpoints is kept when it is more than `tol`
/// away, and both halves are examined in turn. Otherwise the whole interior
/// of the range is discarded. On ties the first farthest point splits.
///
/// `tol <= 0` leaves the polyline unchanged.
///
/// Returns the number of coordinates written to `out`.
pub fn simplify_douglas_peucker_classic<const D: usize, T, R, O>(
    coords: &R,
    tol: T::Calc,
    out: &mut O,
) -> usize
where
    T: Coordinate,
    R: RandomAccess<T> + ?Sized,
    O: Extend<T>,
{
    const NAME: &str = "douglas_peucker_classic";

    let count = match point_count::<D>(coords.coord_count()) {
        Ok(count) => count,
        Err(reason) => return pass_through(NAME, reason, coords_of(coords), out),
    };
    if !is_positive(tol) {
        return pass_through(NAME, PassThrough::InvalidParameter, coords_of(coords), out);
    }

    let keys = classic_keys::<D, T, R>(coords, count, tol * tol);
    log::debug!("{NAME}: kept {} of {count} points", keys.kept_count());
    let mut emitter = Emitter::new(out);
    keys.copy_to::<D, T, R, O>(coords, &mut emitter);
    emitter.count()
}

/// Douglas-Peucker preceded by radial distance vertex reduction.
///
/// Both steps use the same `tol`. Points dropped by the reduction never
/// take part in the split search, so the result may keep different points
/// than [`simplify_douglas_peucker_classic`].
///
/// `tol <= 0` leaves the polyline unchanged.
///
/// Returns the number of coordinates written to `out`.
pub fn simplify_douglas_peucker<const D: usize, T, R, O>(
    coords: &R,
    tol: T::Calc,
    out: &mut O,
) -> usize
where
    T: Coordinate,
    R: RandomAccess<T> + ?Sized,
    O: Extend<T>,
{
    const NAME: &str = "douglas_peucker";

    if let Err(reason) = point_count::<D>(coords.coord_count()) {
        return pass_through(NAME, reason, coords_of(coords), out);
    }
    if !is_positive(tol) {
        return pass_through(NAME, PassThrough::InvalidParameter, coords_of(coords), out);
    }

    let mut reduced = Vec::with_capacity(coords.coord_count());
    simplify_radial_distance::<D, _, _, _>(coords_of(coords), tol, &mut reduced);
    log::debug!(
        "{NAME}: vertex reduction kept {} of {} points",
        reduced.len() / D,
        coords.coord_count() / D
    );
    simplify_douglas_peucker_classic::<D, T, [T], O>(&reduced, tol, out)
}

/// A range waiting to be split, ordered by the distance of its split point.
///
/// Equal distances prefer the lower split index, so the max-heap pops
/// ranges left to right among ties. Distances compare with
/// [`f64::total_cmp`], which keeps the order total when one is NaN.
#[derive(Debug, Clone, Copy)]
struct Candidate<C> {
    first: usize,
    last: usize,
    split: usize,
    distance2: C,
}

impl<C: Calc> Candidate<C> {
    fn key(&self) -> f64 {
        self.distance2.to_f64().unwrap_or(f64::NAN)
    }
}

impl<C: Calc> PartialEq for Candidate<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Calc> Eq for Candidate<C> {}

impl<C: Calc> PartialOrd for Candidate<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Calc> Ord for Candidate<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key()
            .total_cmp(&other.key())
            .then_with(|| other.split.cmp(&self.split))
    }
}

/// Douglas-Peucker keeping exactly `count` points.
///
/// Ranges are refined in order of significance: the range whose split point
/// lies farthest from its segment is split first, regardless of how deep
/// it sits. Within one range the last farthest point splits; across ranges
/// equal distances are taken left to right. Refinement stops once `count`
/// points are kept, so the output always holds exactly `count` points.
///
/// `count < 2` or `count` at least the number of points leaves the polyline
/// unchanged.
///
/// Returns the number of coordinates written to `out`.
pub fn simplify_douglas_peucker_n<const D: usize, T, R, O>(
    coords: &R,
    count: usize,
    out: &mut O,
) -> usize
where
    T: Coordinate,
    R: RandomAccess<T> + ?Sized,
    O: Extend<T>,
{
    const NAME: &str = "douglas_peucker_n";

    let points = match point_count::<D>(coords.coord_count()) {
        Ok(points) => points,
        Err(reason) => return pass_through(NAME, reason, coords_of(coords), out),
    };
    if count < 2 {
        return pass_through(NAME, PassThrough::InvalidParameter, coords_of(coords), out);
    }
    if count >= points {
        return pass_through(NAME, PassThrough::NothingToRemove, coords_of(coords), out);
    }

    let candidate = |first: usize, last: usize| {
        farthest::<D, T, R>(coords, first, last, Tie::Last).map(|(split, distance2)| Candidate {
            first,
            last,
            split,
            distance2,
        })
    };

    let mut keys = Keys::with_endpoints(points);
    let mut heap = BinaryHeap::new();
    heap.extend(candidate(0, points - 1));
    let mut kept = 2;
    while kept < count {
        let Some(best) = heap.pop() else {
            break;
        };
        keys.keep(best.split);
        kept += 1;
        heap.extend(candidate(best.first, best.split));
        heap.extend(candidate(best.split, best.last));
    }

    let mut emitter = Emitter::new(out);
    keys.copy_to::<D, T, R, O>(coords, &mut emitter);
    emitter.count()
}
