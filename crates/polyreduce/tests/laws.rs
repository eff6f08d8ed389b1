//! Integration tests: properties every routine shares, checked through the
//! public API over a few generated polylines.

#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use std::collections::{LinkedList, VecDeque};

use polyreduce::{
    AlgorithmKind, ComparisonError, Simplifier, compute_positional_error_statistics,
    compute_positional_errors2, simplify_douglas_peucker, simplify_douglas_peucker_classic,
    simplify_douglas_peucker_n, simplify_lang, simplify_nth_point, simplify_radial_distance,
    simplify_reumann_witkam,
};

/// Deterministic 2-D random walk with `count` points.
fn random_walk(count: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 32) as f64 / f64::from(u32::MAX)) - 0.5
    };
    let (mut x, mut y) = (0.0, 0.0);
    let mut coords = Vec::with_capacity(count * 2);
    for _ in 0..count {
        coords.push(x);
        coords.push(y);
        x += 1.0 + next();
        y += 4.0 * next();
    }
    coords
}

fn straight_line(count: usize) -> Vec<f64> {
    (0..count).flat_map(|i| [i as f64, 0.0]).collect()
}

fn kinds() -> Vec<AlgorithmKind> {
    vec![
        AlgorithmKind::NthPoint { n: 3 },
        AlgorithmKind::RadialDistance { tol: 1.5 },
        AlgorithmKind::PerpendicularDistance { tol: 1.0, repeat: 1 },
        AlgorithmKind::PerpendicularDistance { tol: 1.0, repeat: 4 },
        AlgorithmKind::ReumannWitkam { tol: 1.0 },
        AlgorithmKind::Opheim {
            min_tol: 1.0,
            max_tol: 6.0,
        },
        AlgorithmKind::Lang {
            tol: 1.0,
            look_ahead: 6,
        },
        AlgorithmKind::DouglasPeuckerClassic { tol: 1.0 },
        AlgorithmKind::DouglasPeucker { tol: 1.0 },
        AlgorithmKind::DouglasPeuckerN { count: 12 },
    ]
}

fn invalid_kinds() -> Vec<AlgorithmKind> {
    vec![
        AlgorithmKind::NthPoint { n: 1 },
        AlgorithmKind::RadialDistance { tol: 0.0 },
        AlgorithmKind::PerpendicularDistance { tol: 0.0, repeat: 1 },
        AlgorithmKind::PerpendicularDistance { tol: 1.0, repeat: 0 },
        AlgorithmKind::ReumannWitkam { tol: -1.0 },
        AlgorithmKind::Opheim {
            min_tol: 0.0,
            max_tol: 6.0,
        },
        AlgorithmKind::Lang {
            tol: 1.0,
            look_ahead: 0,
        },
        AlgorithmKind::DouglasPeuckerClassic { tol: 0.0 },
        AlgorithmKind::DouglasPeucker { tol: 0.0 },
        AlgorithmKind::DouglasPeuckerN { count: 1 },
    ]
}

/// Indices of the points of `simplified` within `polyline`, matched in order.
fn subsequence_indices(polyline: &[f64], simplified: &[f64]) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    let mut from = 0;
    for point in simplified.chunks(2) {
        let offset = polyline[from * 2..].chunks(2).position(|p| p == point)?;
        indices.push(from + offset);
        from += offset + 1;
    }
    Some(indices)
}

#[test]
fn degenerate_input_passes_through() {
    let mut partial = random_walk(20, 1);
    partial.pop();
    let short = random_walk(2, 2);
    for kind in kinds() {
        assert_eq!(kind.simplify::<2, _>(&partial), partial, "{kind}");
        assert_eq!(kind.simplify::<2, _>(&short), short, "{kind}");
        assert!(kind.simplify::<2, f64>(&[]).is_empty(), "{kind}");
    }
}

#[test]
fn invalid_parameters_pass_through() {
    let polyline = random_walk(50, 3);
    for kind in invalid_kinds() {
        assert_eq!(kind.simplify::<2, _>(&polyline), polyline, "{kind}");
    }
}

#[test]
fn output_keeps_endpoints_and_is_a_subsequence() {
    for seed in 0..8 {
        let polyline = random_walk(200, seed);
        for kind in kinds() {
            let result = kind.simplify::<2, _>(&polyline);
            assert!(result.len() >= 4, "{kind}");
            assert_eq!(result.len() % 2, 0, "{kind}");
            assert_eq!(result[..2], polyline[..2], "{kind}");
            assert_eq!(result[result.len() - 2..], polyline[polyline.len() - 2..], "{kind}");

            let indices = subsequence_indices(&polyline, &result);
            assert!(indices.is_some(), "{kind} is not a subsequence (seed {seed})");
            let indices = indices.unwrap();
            assert!(indices.windows(2).all(|w| w[0] < w[1]), "{kind}");
        }
    }
}

#[test]
fn positional_errors_are_computable_for_every_result() {
    let polyline = random_walk(150, 11);
    for kind in kinds() {
        let result = kind.simplify::<2, _>(&polyline);
        let stats = compute_positional_error_statistics::<2, _, _, _>(
            polyline.iter().copied(),
            result.iter().copied(),
        );
        assert!(stats.is_ok(), "{kind}: {stats:?}");
    }
}

#[test]
fn douglas_peucker_bounds_positional_error() {
    let polyline = random_walk(300, 5);
    let tol = 0.75;
    let mut result = Vec::new();
    simplify_douglas_peucker_classic::<2, _, _, _>(&polyline[..], tol, &mut result);
    let stats = compute_positional_error_statistics::<2, _, _, _>(
        polyline.iter().copied(),
        result.iter().copied(),
    )
    .unwrap();
    assert!(stats.max <= tol + 1e-9, "max error {}", stats.max);
}

#[test]
fn douglas_peucker_n_outputs_exact_count() {
    let polyline = random_walk(120, 9);
    for count in [2, 3, 10, 57, 119] {
        let mut result = Vec::new();
        let written = simplify_douglas_peucker_n::<2, _, _, _>(&polyline[..], count, &mut result);
        assert_eq!(written, count * 2);
    }
    let mut result = Vec::new();
    simplify_douglas_peucker_n::<2, _, _, _>(&polyline[..], 120, &mut result);
    assert_eq!(result, polyline);
}

#[test]
fn statistics_identity() {
    let polyline = random_walk(40, 4);
    let stats = compute_positional_error_statistics::<2, _, _, _>(
        polyline.iter().copied(),
        polyline.iter().copied(),
    )
    .unwrap();
    assert!(stats.max.abs() < f64::EPSILON);
    assert!(stats.sum.abs() < f64::EPSILON);
    assert!(stats.mean.abs() < f64::EPSILON);
    assert!(stats.std.abs() < f64::EPSILON);
}

#[test]
fn containers_give_identical_results() {
    let polyline = random_walk(100, 6);
    let deque: VecDeque<f64> = polyline.iter().copied().collect();
    let list: LinkedList<f64> = polyline.iter().copied().collect();

    let mut from_slice = Vec::new();
    let mut from_deque = Vec::new();
    let mut from_list = Vec::new();
    simplify_reumann_witkam::<2, _, _, _>(polyline.iter().copied(), 1.0, &mut from_slice);
    simplify_reumann_witkam::<2, _, _, _>(deque.iter().copied(), 1.0, &mut from_deque);
    simplify_reumann_witkam::<2, _, _, _>(list.iter().copied(), 1.0, &mut from_list);
    assert_eq!(from_slice, from_deque);
    assert_eq!(from_slice, from_list);

    let mut from_slice = Vec::new();
    let mut from_deque = Vec::new();
    simplify_lang::<2, _, _, _>(&polyline[..], 1.0, 5, &mut from_slice);
    simplify_lang::<2, _, _, _>(&deque, 1.0, 5, &mut from_deque);
    assert_eq!(from_slice, from_deque);
}

#[test]
fn sink_is_appended_to() {
    let polyline = straight_line(11);
    let mut out = vec![-1.0, -1.0];
    let written = simplify_nth_point::<2, _, _, _>(polyline.iter().copied(), 5, &mut out);
    assert_eq!(written, 6);
    assert_eq!(out, vec![-1.0, -1.0, 0.0, 0.0, 5.0, 0.0, 10.0, 0.0]);
}

#[test]
fn scenario_collinear_points_collapse() {
    let polyline = straight_line(10);
    for tol in [0.1, 1.0] {
        let mut classic = Vec::new();
        let mut optimized = Vec::new();
        simplify_douglas_peucker_classic::<2, _, _, _>(&polyline[..], tol, &mut classic);
        simplify_douglas_peucker::<2, _, _, _>(&polyline[..], tol, &mut optimized);
        assert_eq!(classic, vec![0.0, 0.0, 9.0, 0.0]);
        assert_eq!(optimized, vec![0.0, 0.0, 9.0, 0.0]);
    }
}

#[test]
fn scenario_saw_tooth() {
    // Teeth of growing height on odd points, 10 units apart.
    let polyline: Vec<f64> = (0..11)
        .flat_map(|i| {
            let height = if i % 2 == 1 { f64::from((i + 1) / 2) } else { 0.0 };
            [f64::from(i) * 10.0, height]
        })
        .collect();
    let mut result = Vec::new();
    simplify_douglas_peucker::<2, _, _, _>(&polyline[..], 4.1, &mut result);
    assert_eq!(result, vec![0.0, 0.0, 80.0, 0.0, 90.0, 5.0, 100.0, 0.0]);
}

#[test]
fn scenario_positional_errors() {
    let polyline = [0., 0., 1., 2., 2., 1., 3., 4., 4., 5., 6., 3., 7., 0.];
    let simplified = [0., 0., 7., 0.];
    let mut errors = Vec::new();
    let written =
        compute_positional_errors2::<2, _, _, _, _>(polyline, simplified, &mut errors).unwrap();
    assert_eq!(written, 7);
    assert_eq!(errors, vec![0., 4., 1., 16., 25., 9., 0.]);
}

#[test]
fn scenario_nth_point() {
    let polyline = straight_line(11);
    let mut result = Vec::new();
    simplify_nth_point::<2, _, _, _>(polyline.iter().copied(), 4, &mut result);
    assert_eq!(result, vec![0., 0., 4., 0., 8., 0., 10., 0.]);
}

#[test]
fn scenario_radial_distance() {
    let polyline = straight_line(11);
    let mut result = Vec::new();
    simplify_radial_distance::<2, _, _, _>(polyline.iter().copied(), 6.5, &mut result);
    assert_eq!(result, vec![0., 0., 7., 0., 10., 0.]);
}

#[test]
fn comparison_rejects_foreign_simplification() {
    let polyline = straight_line(5);
    let result = compute_positional_error_statistics::<2, _, _, _>(
        polyline.iter().copied(),
        [0.0, 1.0, 4.0, 0.0],
    );
    assert_eq!(result, Err(ComparisonError::FirstPointMismatch));
}

#[test]
fn integer_polylines_do_not_overflow() {
    // Squared distances here far exceed i32::MAX.
    let polyline: Vec<i32> = vec![0, 0, 100_000, 90_000, 200_000, 0];
    let mut result = Vec::new();
    simplify_douglas_peucker_classic::<2, _, _, _>(&polyline[..], 80_000.0, &mut result);
    assert_eq!(result, polyline);

    let unsigned: Vec<u8> = vec![10, 0, 0, 0, 5, 5, 0, 10];
    let mut result = Vec::new();
    simplify_douglas_peucker_classic::<2, _, _, _>(&unsigned[..], 1.0, &mut result);
    assert_eq!(result, unsigned);
}
