//! Nth-point routine: keep the first point of every run of `n` points.

use crate::traversal::{Emitter, PassThrough, pass_through, point_count, points};

/// Keep points `0, n, 2n, ...` plus the last point.
///
/// Naive, but extremely fast: every `n`-th point is copied and nothing is
/// measured. The last point is emitted once even when its index is a
/// multiple of `n`.
///
/// `n < 2` leaves the polyline unchanged.
///
/// Returns the number of coordinates written to `out`.
///
/// ```
/// use polyreduce::simplify_nth_point;
///
/// let polyline: Vec<i32> = (0..11).flat_map(|x| [x, 0]).collect();
/// let mut simplified = Vec::new();
/// simplify_nth_point::<2, _, _, _>(polyline.iter().copied(), 4, &mut simplified);
/// assert_eq!(simplified, [0, 0, 4, 0, 8, 0, 10, 0]);
/// ```
pub fn simplify_nth_point<const D: usize, T, I, O>(coords: I, n: usize, out: &mut O) -> usize
where
    T: Copy,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
    O: Extend<T>,
{
    const NAME: &str = "nth_point";

    let coords = coords.into_iter();
    let count = match point_count::<D>(coords.len()) {
        Ok(count) => count,
        Err(reason) => return pass_through(NAME, reason, coords, out),
    };
    if n < 2 {
        return pass_through(NAME, PassThrough::InvalidParameter, coords, out);
    }

    let last = count - 1;
    let mut emitter = Emitter::new(out);
    for (index, point) in points::<D, _>(coords).enumerate() {
        if index % n == 0 || index == last {
            emitter.point(&point);
        }
    }
    emitter.count()
}
