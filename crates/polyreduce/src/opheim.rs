//! Opheim routine: a search region bounded by a minimum and a maximum
//! tolerance.
//!
//! From each key, points closer than `min_tol` are skipped. The last of
//! them (or the key's successor) fixes a ray from the key. Following
//! points are absorbed while they stay closer than `max_tol` to the key and
//! closer than `min_tol` to the ray. The first point breaking either bound
//! makes its predecessor the next key.

use crate::coord::{Coordinate, is_positive};
use crate::math::{point_distance2, promote, ray_distance2};
use crate::traversal::{Emitter, PassThrough, pass_through, point_count, points};

/// Simplify with the Opheim search region.
///
/// Both bounds are strict: a point exactly `min_tol` from the key already
/// fixes the ray, and a point exactly `max_tol` from the key ends the
/// region. The last point is always kept.
///
/// `min_tol <= 0` or `max_tol <= 0` leaves the polyline unchanged.
///
/// Returns the number of coordinates written to `out`.
pub fn simplify_opheim<const D: usize, T, I, O>(
    coords: I,
    min_tol: T::Calc,
    max_tol: T::Calc,
    out: &mut O,
) -> usize
where
    T: Coordinate,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
    O: Extend<T>,
{
    const NAME: &str = "opheim";

    let coords = coords.into_iter();
    if let Err(reason) = point_count::<D>(coords.len()) {
        return pass_through(NAME, reason, coords, out);
    }
    if !is_positive(min_tol) || !is_positive(max_tol) {
        return pass_through(NAME, PassThrough::InvalidParameter, coords, out);
    }

    let min_tol2 = min_tol * min_tol;
    let max_tol2 = max_tol * max_tol;
    let mut points = points::<D, _>(coords);
    let mut emitter = Emitter::new(out);
    let Some(first) = points.next() else {
        return emitter.count();
    };
    emitter.point(&first);

    let mut key = promote(&first);
    // Second point of the ray starting at `key`, once one is fixed.
    let mut ray = None;
    let mut previous = first;
    let mut previous_is_key = true;

    for point in points {
        let candidate = promote(&point);
        // A new key re-examines the current point, so this runs at most twice.
        loop {
            let through = match ray {
                Some(through) => through,
                None if point_distance2(&key, &candidate) < min_tol2 => break,
                None if previous_is_key => {
                    ray = Some(candidate);
                    break;
                }
                None => {
                    let through = promote(&previous);
                    ray = Some(through);
                    through
                }
            };
            if point_distance2(&key, &candidate) < max_tol2
                && ray_distance2(&key, &through, &candidate) < min_tol2
            {
                break;
            }
            emitter.point(&previous);
            key = promote(&previous);
            ray = None;
            previous_is_key = true;
        }
        previous = point;
        previous_is_key = false;
    }
    emitter.point(&previous);
    emitter.count()
}
