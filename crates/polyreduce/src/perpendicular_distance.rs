//! Perpendicular distance routine, single and repeated passes.
//!
//! Each pass looks at three consecutive points of the input. The middle
//! point is measured against the line through its neighbours; a close
//! middle point is dropped and its right neighbour kept outright. Because
//! of that, one pass removes at most half the points; repeating the pass
//! on its own output removes more.

use crate::coord::{Coordinate, is_positive};
use crate::math::{line_distance2, promote};
use crate::traversal::{Emitter, PassThrough, pass_through, point_count, points};

/// One pass of the perpendicular distance routine.
///
/// For each triple `(p0, p1, p2)` of original neighbours: if `p1` lies
/// within `tol` of the line `p0 p2` it is discarded, `p2` is kept and the
/// sweep restarts from `p2`. Otherwise `p1` is kept and the sweep advances
/// by one point. The last point is always kept.
///
/// `tol <= 0` leaves the polyline unchanged.
///
/// Returns the number of coordinates written to `out`.
pub fn simplify_perpendicular_distance<const D: usize, T, I, O>(
    coords: I,
    tol: T::Calc,
    out: &mut O,
) -> usize
where
    T: Coordinate,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
    O: Extend<T>,
{
    const NAME: &str = "perpendicular_distance";

    let coords = coords.into_iter();
    if let Err(reason) = point_count::<D>(coords.len()) {
        return pass_through(NAME, reason, coords, out);
    }
    if !is_positive(tol) {
        return pass_through(NAME, PassThrough::InvalidParameter, coords, out);
    }

    let tol2 = tol * tol;
    let mut points = points::<D, _>(coords);
    let mut emitter = Emitter::new(out);
    let Some(mut p0) = points.next() else {
        return emitter.count();
    };
    emitter.point(&p0);
    let Some(mut p1) = points.next() else {
        return emitter.count();
    };

    while let Some(p2) = points.next() {
        if line_distance2(&promote(&p0), &promote(&p2), &promote(&p1)) <= tol2 {
            emitter.point(&p2);
            p0 = p2;
            match points.next() {
                Some(next) => p1 = next,
                // p2 was the last point and is already emitted.
                None => return emitter.count(),
            }
        } else {
            emitter.point(&p1);
            p0 = p1;
            p1 = p2;
        }
    }
    emitter.point(&p1);
    emitter.count()
}

/// Apply [`simplify_perpendicular_distance`] up to `repeat` times.
///
/// Pass `k + 1` consumes the output of pass `k`. Iteration stops early as
/// soon as a pass removes nothing, since further passes would not either.
/// `repeat == 1` is exactly the single pass.
///
/// `repeat == 0` or `tol <= 0` leaves the polyline unchanged.
///
/// Returns the number of coordinates written to `out`.
pub fn simplify_perpendicular_distance_repeat<const D: usize, T, I, O>(
    coords: I,
    tol: T::Calc,
    repeat: usize,
    out: &mut O,
) -> usize
where
    T: Coordinate,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
    O: Extend<T>,
{
    const NAME: &str = "perpendicular_distance_repeat";

    let coords = coords.into_iter();
    if let Err(reason) = point_count::<D>(coords.len()) {
        return pass_through(NAME, reason, coords, out);
    }
    if repeat == 0 || !is_positive(tol) {
        return pass_through(NAME, PassThrough::InvalidParameter, coords, out);
    }
    if repeat == 1 {
        return simplify_perpendicular_distance::<D, _, _, _>(coords, tol, out);
    }

    let mut current = Vec::with_capacity(coords.len());
    simplify_perpendicular_distance::<D, _, _, _>(coords, tol, &mut current);
    for pass in 2..=repeat {
        let mut next = Vec::with_capacity(current.len());
        simplify_perpendicular_distance::<D, _, _, _>(current.iter().copied(), tol, &mut next);
        let removed = current.len() - next.len();
        current = next;
        if removed == 0 {
            log::debug!("{NAME}: converged after {pass} of {repeat} passes");
            break;
        }
    }

    let mut emitter = Emitter::new(out);
    emitter.coords(current);
    emitter.count()
}
