//! Squared distance metrics over D-dimensional points.
//!
//! All metrics work on points already converted to their calculation type
//! (see [`promote`]) and return **squared** distances. No square root is
//! ever taken here: callers compare against squared tolerances instead.
//!
//! The perpendicular component is computed as `|w|² - (w·v)² / |v|²`
//! rather than by building the projected point. For integral inputs this
//! keeps results exact whenever the true distance is representable, and
//! the result is clamped at zero to absorb cancellation.

use std::array;

use crate::coord::{Calc, Coordinate};

/// Convert a point of coordinates into a point of calculation values.
#[must_use]
#[inline]
pub fn promote<const D: usize, T: Coordinate>(point: &[T; D]) -> [T::Calc; D] {
    array::from_fn(|d| point[d].to_calc())
}

/// Vector from `from` to `to`.
#[must_use]
#[inline]
pub fn make_vector<const D: usize, C: Calc>(from: &[C; D], to: &[C; D]) -> [C; D] {
    array::from_fn(|d| to[d] - from[d])
}

/// Dot product of two vectors.
#[must_use]
#[inline]
pub fn dot<const D: usize, C: Calc>(a: &[C; D], b: &[C; D]) -> C {
    a.iter()
        .zip(b)
        .fold(C::zero(), |acc, (&x, &y)| x.mul_add(y, acc))
}

/// Squared Euclidean distance between two points.
#[must_use]
#[inline]
pub fn point_distance2<const D: usize, C: Calc>(p: &[C; D], q: &[C; D]) -> C {
    let v = make_vector(p, q);
    dot(&v, &v)
}

/// Squared distance from `p` to the infinite line through `l0` and `l1`.
///
/// A degenerate line (`l0 == l1`) degrades to the distance to `l0`.
#[must_use]
pub fn line_distance2<const D: usize, C: Calc>(l0: &[C; D], l1: &[C; D], p: &[C; D]) -> C {
    let v = make_vector(l0, l1);
    let w = make_vector(l0, p);
    let cv = dot(&v, &v);
    if cv <= C::zero() {
        return dot(&w, &w);
    }
    perpendicular2(&w, dot(&w, &v), cv)
}

/// Squared distance from `p` to the closed segment `[l0, l1]`.
///
/// Points whose projection falls before `l0` or past `l1` are measured to
/// that endpoint.
#[must_use]
pub fn segment_distance2<const D: usize, C: Calc>(l0: &[C; D], l1: &[C; D], p: &[C; D]) -> C {
    let v = make_vector(l0, l1);
    let w = make_vector(l0, p);
    let cw = dot(&w, &v);
    if cw <= C::zero() {
        return dot(&w, &w);
    }
    let cv = dot(&v, &v);
    if cv <= cw {
        return point_distance2(l1, p);
    }
    perpendicular2(&w, cw, cv)
}

/// Squared distance from `p` to the ray starting at `r0` through `r1`.
///
/// Points behind `r0` are measured to `r0`; points past `r1` are measured
/// to the ray's infinite extension.
#[must_use]
pub fn ray_distance2<const D: usize, C: Calc>(r0: &[C; D], r1: &[C; D], p: &[C; D]) -> C {
    let v = make_vector(r0, r1);
    let w = make_vector(r0, p);
    let cw = dot(&w, &v);
    if cw <= C::zero() {
        return dot(&w, &w);
    }
    perpendicular2(&w, cw, dot(&v, &v))
}

/// Squared length of the component of `w` perpendicular to a vector `v`,
/// given `cw = w·v` and `cv = v·v > 0`.
#[inline]
fn perpendicular2<const D: usize, C: Calc>(w: &[C; D], cw: C, cv: C) -> C {
    let d2 = dot(w, w) - cw * cw / cv;
    d2.max(C::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn promote_integers() {
        let p = promote(&[3_u8, 250]);
        assert!(close(p[0], 3.0));
        assert!(close(p[1], 250.0));
    }

    #[test]
    fn dot_product_3d() {
        assert!(close(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0));
    }

    #[test]
    fn point_distance_2d() {
        assert!(close(point_distance2(&[0.0, 0.0], &[3.0, 4.0]), 25.0));
    }

    #[test]
    fn point_distance_1d_and_4d() {
        assert!(close(point_distance2(&[2.0], &[-1.0]), 9.0));
        assert!(close(
            point_distance2(&[1.0, 1.0, 1.0, 1.0], &[2.0, 2.0, 2.0, 2.0]),
            4.0
        ));
    }

    #[test]
    fn line_distance_on_axis() {
        // Point (1, 3) is 3 units from the line y=0.
        let d = line_distance2(&[0.0, 0.0], &[2.0, 0.0], &[1.0, 3.0]);
        assert!(close(d, 9.0));
    }

    #[test]
    fn line_distance_beyond_endpoints_uses_extension() {
        let d = line_distance2(&[0.0, 0.0], &[1.0, 0.0], &[10.0, 2.0]);
        assert!(close(d, 4.0));
        let d = line_distance2(&[0.0, 0.0], &[1.0, 0.0], &[-10.0, 2.0]);
        assert!(close(d, 4.0));
    }

    #[test]
    fn line_distance_diagonal() {
        // Point (2, -1) to line (0,0)->(4,2): |4*(-1) - 2*2|^2 / 20 = 64 / 20.
        let d = line_distance2(&[0.0, 0.0], &[4.0, 2.0], &[2.0, -1.0]);
        assert!(close(d, 64.0 / 20.0));
    }

    #[test]
    fn degenerate_line_is_point_distance() {
        let d = line_distance2(&[0.0, 0.0], &[0.0, 0.0], &[3.0, 4.0]);
        assert!(close(d, 25.0));
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let l0 = [0.0, 0.0];
        let l1 = [2.0, 0.0];
        assert!(close(segment_distance2(&l0, &l1, &[-3.0, 4.0]), 25.0));
        assert!(close(segment_distance2(&l0, &l1, &[5.0, 4.0]), 25.0));
        assert!(close(segment_distance2(&l0, &l1, &[1.0, 4.0]), 16.0));
    }

    #[test]
    fn segment_distance_degenerate_segment() {
        let d = segment_distance2(&[1.0, 1.0], &[1.0, 1.0], &[4.0, 5.0]);
        assert!(close(d, 25.0));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn segment_distance_exact_for_integral_inputs() {
        let l0 = [0.0, 0.0];
        let l1 = [7.0, 0.0];
        let expected = [4.0, 1.0, 16.0, 25.0, 9.0];
        let points = [[1.0, 2.0], [2.0, 1.0], [3.0, 4.0], [4.0, 5.0], [6.0, 3.0]];
        for (p, e) in points.iter().zip(expected) {
            assert_eq!(segment_distance2(&l0, &l1, p), e);
        }
    }

    #[test]
    fn ray_distance_clamps_only_at_origin() {
        let r0 = [0.0, 0.0];
        let r1 = [1.0, 0.0];
        // Behind the origin: measured to r0.
        assert!(close(ray_distance2(&r0, &r1, &[-3.0, 4.0]), 25.0));
        // Ahead of r1: measured along the extension.
        assert!(close(ray_distance2(&r0, &r1, &[10.0, 2.0]), 4.0));
    }

    #[test]
    fn metrics_in_three_dimensions() {
        let l0 = [0.0, 0.0, 0.0];
        let l1 = [0.0, 0.0, 10.0];
        let p = [3.0, 4.0, 5.0];
        assert!(close(line_distance2(&l0, &l1, &p), 25.0));
        assert!(close(segment_distance2(&l0, &l1, &p), 25.0));
        assert!(close(ray_distance2(&l0, &l1, &p), 25.0));
    }

    #[test]
    fn metrics_in_single_precision() {
        let d: f32 = segment_distance2(&[0.0_f32, 0.0], &[4.0, 0.0], &[2.0, 3.0]);
        assert!((d - 9.0).abs() < 1e-5);
    }
}
