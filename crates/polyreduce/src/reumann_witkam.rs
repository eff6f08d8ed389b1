//! Reumann-Witkam routine: a strip of width `2 * tol` slides along the
//! polyline.

use crate::coord::{Coordinate, is_positive};
use crate::math::{line_distance2, promote};
use crate::traversal::{Emitter, PassThrough, pass_through, point_count, points};

/// Discard points inside a strip around the line through the current key
/// and its successor.
///
/// The strip starts on the line through points 0 and 1. Following points
/// within `tol` of that line are discarded. The first point outside it
/// makes its predecessor the new key, and the strip is rebuilt on the line
/// through the new key and the offending point. The last point is always
/// kept.
///
/// `tol <= 0` leaves the polyline unchanged.
///
/// Returns the number of coordinates written to `out`.
pub fn simplify_reumann_witkam<const D: usize, T, I, O>(
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
    const NAME: &str = "reumann_witkam";

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
    let (Some(first), Some(second)) = (points.next(), points.next()) else {
        return emitter.count();
    };
    emitter.point(&first);

    let mut strip = (promote(&first), promote(&second));
    let mut previous = second;
    for point in points {
        let candidate = promote(&point);
        if line_distance2(&strip.0, &strip.1, &candidate) > tol2 {
            emitter.point(&previous);
            strip = (promote(&previous), candidate);
        }
        previous = point;
    }
    emitter.point(&previous);
    emitter.count()
}
