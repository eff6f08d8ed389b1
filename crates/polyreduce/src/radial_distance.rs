//! Radial distance routine (vertex reduction).

use crate::coord::{Coordinate, is_positive};
use crate::math::{point_distance2, promote};
use crate::traversal::{Emitter, PassThrough, pass_through, point_count, points};

/// Drop points that lie within `tol` of the last kept point.
///
/// The first point is the initial key. Each following point is either
/// within `tol` of the key (discarded) or beyond it (kept, becomes the new
/// key). The last point is always kept. Points exactly at `tol` are
/// discarded.
///
/// `tol <= 0` leaves the polyline unchanged.
///
/// Returns the number of coordinates written to `out`.
pub fn simplify_radial_distance<const D: usize, T, I, O>(
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
    const NAME: &str = "radial_distance";

    let coords = coords.into_iter();
    let count = match point_count::<D>(coords.len()) {
        Ok(count) => count,
        Err(reason) => return pass_through(NAME, reason, coords, out),
    };
    if !is_positive(tol) {
        return pass_through(NAME, PassThrough::InvalidParameter, coords, out);
    }

    let tol2 = tol * tol;
    let last = count - 1;
    let mut points = points::<D, _>(coords);
    let mut emitter = Emitter::new(out);
    let Some(first) = points.next() else {
        return emitter.count();
    };
    emitter.point(&first);
    let mut key = promote(&first);

    for (index, point) in (1..).zip(points) {
        if index == last {
            emitter.point(&point);
            break;
        }
        let candidate = promote(&point);
        if point_distance2(&key, &candidate) > tol2 {
            emitter.point(&point);
            key = candidate;
        }
    }
    emitter.count()
}
