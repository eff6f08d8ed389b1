//! Polyline generators shared by the unit tests.

#![allow(clippy::cast_precision_loss)]

use num_traits::NumCast;

/// Points along the x-axis: `(0, 0) (step, 0) (2 * step, 0) ...`.
pub fn straight_line<const D: usize>(count: usize, step: f64) -> Vec<f64> {
    let mut coords = Vec::with_capacity(count * D);
    for i in 0..count {
        coords.extend((0..D).map(|d| if d == 0 { i as f64 * step } else { 0.0 }));
    }
    coords
}

/// Teeth of growing height on every odd point:
/// `(0, 0) (step, 1) (2 * step, 0) (3 * step, 2) ...`.
pub fn saw_tooth<const D: usize>(count: usize, step: f64) -> Vec<f64> {
    let mut coords = Vec::with_capacity(count * D);
    for i in 0..count {
        let height = if i % 2 == 1 { ((i + 1) / 2) as f64 } else { 0.0 };
        coords.extend((0..D).map(|d| match d {
            0 => i as f64 * step,
            1 => height,
            _ => 0.0,
        }));
    }
    coords
}

/// Unit steps tracing block teeth of growing height:
/// `(0, 0) (1, 0) (1, 1) (2, 1) (2, 0) (3, 0) (4, 0) (4, 1) (4, 2) ...`.
///
/// Requires `D >= 2`.
pub fn square_tooth<const D: usize>(count: usize) -> Vec<f64> {
    let mut position = [0.0; D];
    let mut tooth = 1;
    let mut step = 0;
    let mut direction = 0;
    let mut coords = Vec::with_capacity(count * D);
    for _ in 0..count {
        coords.extend_from_slice(&position);
        match direction {
            0 | 2 => position[0] += 1.0,
            1 => position[1] += 1.0,
            _ => position[1] -= 1.0,
        }
        step += 1;
        if step == tooth {
            if direction == 3 {
                tooth += 1;
            }
            step = 0;
            direction = (direction + 1) % 4;
        }
    }
    coords
}

/// Convert generated coordinates into another coordinate type.
#[allow(clippy::unwrap_used)]
pub fn cast<T: NumCast>(coords: &[f64]) -> Vec<T> {
    coords.iter().map(|&c| T::from(c).unwrap()).collect()
}

/// The points of `coords` at the given indices, flattened.
pub fn select<const D: usize, T: Copy>(coords: &[T], indices: &[usize]) -> Vec<T> {
    indices
        .iter()
        .flat_map(|&i| coords[i * D..(i + 1) * D].iter().copied())
        .collect()
}

/// First and last point of `coords`.
pub fn endpoints<const D: usize, T: Copy>(coords: &[T]) -> Vec<T> {
    select::<D, T>(coords, &[0, coords.len() / D - 1])
}

#[test]
fn square_tooth_starts_with_unit_block() {
    let coords = square_tooth::<2>(9);
    assert_eq!(
        coords,
        vec![0., 0., 1., 0., 1., 1., 2., 1., 2., 0., 3., 0., 4., 0., 4., 1., 4., 2.]
    );
}

#[test]
fn saw_tooth_raises_odd_points() {
    let coords = saw_tooth::<2>(5, 10.0);
    assert_eq!(coords, vec![0., 0., 10., 1., 20., 0., 30., 2., 40., 0.]);
}
