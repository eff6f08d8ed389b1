//! Lang routine: a fixed-size look-ahead window that shrinks until every
//! intermediate point fits.

use crate::coord::{Coordinate, is_positive};
use crate::math::{promote, segment_distance2};
use crate::traversal::{
    Emitter, PassThrough, RandomAccess, coords_of, pass_through, point_count,
};

/// Simplify with a look-ahead window of `look_ahead` points.
///
/// From the current key the candidate is the point `look_ahead` positions
/// ahead (or the last point, if closer). When every point between the key
/// and the candidate lies within `tol` of the segment joining them, the
/// candidate is kept and becomes the key. Otherwise the window shrinks by
/// one and is tested again; a window of one point always succeeds.
///
/// `look_ahead == 0` or `tol <= 0` leaves the polyline unchanged.
///
/// Returns the number of coordinates written to `out`.
pub fn simplify_lang<const D: usize, T, R, O>(
    coords: &R,
    tol: T::Calc,
    look_ahead: usize,
    out: &mut O,
) -> usize
where
    T: Coordinate,
    R: RandomAccess<T> + ?Sized,
    O: Extend<T>,
{
    const NAME: &str = "lang";

    let count = match point_count::<D>(coords.coord_count()) {
        Ok(count) => count,
        Err(reason) => return pass_through(NAME, reason, coords_of(coords), out),
    };
    if look_ahead == 0 || !is_positive(tol) {
        return pass_through(NAME, PassThrough::InvalidParameter, coords_of(coords), out);
    }

    let tol2 = tol * tol;
    let last = count - 1;
    let point = |index: usize| promote(&coords.point::<D>(index));

    let mut emitter = Emitter::new(out);
    emitter.point(&coords.point::<D>(0));
    let mut current = 0;
    while current < last {
        let key = point(current);
        let mut end = current.saturating_add(look_ahead).min(last);
        while end > current + 1 {
            let candidate = point(end);
            let fits = (current + 1..end)
                .all(|index| segment_distance2(&key, &candidate, &point(index)) <= tol2);
            if fits {
                break;
            }
            end -= 1;
        }
        emitter.point(&coords.point::<D>(end));
        current = end;
    }
    emitter.count()
}
