//! Timing and error measurement for a list of algorithms.

use std::collections::{LinkedList, VecDeque};
use std::time::Duration;

use clap::ValueEnum;
use log::{debug, info, warn};
use polyreduce::{
    AlgorithmKind, RandomAccess, Simplifier, compute_positional_error_statistics,
    simplify_douglas_peucker, simplify_douglas_peucker_classic, simplify_douglas_peucker_n,
    simplify_lang, simplify_nth_point, simplify_opheim, simplify_perpendicular_distance_repeat,
    simplify_radial_distance, simplify_reumann_witkam,
};
use polyreduce_export::Polyline;
use serde::Serialize;

use crate::error::BenchError;
use crate::reference;
use crate::report::AlgorithmReport;

/// Source of elapsed time, injectable for tests.
pub trait Clock {
    /// Opaque point in time.
    type Instant;

    /// The current instant.
    fn now(&self) -> Self::Instant;

    /// Time elapsed since `since`.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// Container holding the polyline while it is simplified.
///
/// Lists only support forward traversal. Algorithms that need random
/// access copy a list into a `Vec` first, inside the timed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    /// Contiguous slice.
    Slice,
    /// Ring buffer (`VecDeque`).
    Deque,
    /// Doubly linked list.
    List,
}

impl Container {
    /// Lower-case name, as accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slice => "slice",
            Self::Deque => "deque",
            Self::List => "list",
        }
    }
}

/// How each algorithm is run.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Timed repetitions per algorithm; the median is reported.
    pub runs: usize,
    /// Container the polyline is stored in.
    pub container: Container,
    /// Cross-check Douglas-Peucker results against the reference.
    pub compare_reference: bool,
}

enum Stored {
    Slice(Vec<f64>),
    Deque(VecDeque<f64>),
    List(LinkedList<f64>),
}

impl Stored {
    fn new(coords: &[f64], container: Container) -> Self {
        match container {
            Container::Slice => Self::Slice(coords.to_vec()),
            Container::Deque => Self::Deque(coords.iter().copied().collect()),
            Container::List => Self::List(coords.iter().copied().collect()),
        }
    }
}

/// Run any algorithm over a forward-only sequence.
///
/// Algorithms that need random access run on a copy of the sequence.
fn simplify_forward<const D: usize, I>(kind: &AlgorithmKind, coords: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: ExactSizeIterator,
{
    let mut out = Vec::new();
    match *kind {
        AlgorithmKind::NthPoint { n } => {
            simplify_nth_point::<D, _, _, _>(coords, n, &mut out);
        }
        AlgorithmKind::RadialDistance { tol } => {
            simplify_radial_distance::<D, _, _, _>(coords, tol, &mut out);
        }
        AlgorithmKind::PerpendicularDistance { tol, repeat } => {
            simplify_perpendicular_distance_repeat::<D, _, _, _>(coords, tol, repeat, &mut out);
        }
        AlgorithmKind::ReumannWitkam { tol } => {
            simplify_reumann_witkam::<D, _, _, _>(coords, tol, &mut out);
        }
        AlgorithmKind::Opheim { min_tol, max_tol } => {
            simplify_opheim::<D, _, _, _>(coords, min_tol, max_tol, &mut out);
        }
        AlgorithmKind::Lang { .. }
        | AlgorithmKind::DouglasPeuckerClassic { .. }
        | AlgorithmKind::DouglasPeucker { .. }
        | AlgorithmKind::DouglasPeuckerN { .. } => {
            let buffered: Vec<f64> = coords.into_iter().collect();
            return kind.simplify::<D, _>(buffered.as_slice());
        }
    }
    out
}

/// Run a random-access algorithm. `None` for forward ones.
fn simplify_random<const D: usize, R>(kind: &AlgorithmKind, coords: &R) -> Option<Vec<f64>>
where
    R: RandomAccess<f64> + ?Sized,
{
    let mut out = Vec::new();
    match *kind {
        AlgorithmKind::Lang { tol, look_ahead } => {
            simplify_lang::<D, _, _, _>(coords, tol, look_ahead, &mut out);
        }
        AlgorithmKind::DouglasPeuckerClassic { tol } => {
            simplify_douglas_peucker_classic::<D, _, _, _>(coords, tol, &mut out);
        }
        AlgorithmKind::DouglasPeucker { tol } => {
            simplify_douglas_peucker::<D, _, _, _>(coords, tol, &mut out);
        }
        AlgorithmKind::DouglasPeuckerN { count } => {
            simplify_douglas_peucker_n::<D, _, _, _>(coords, count, &mut out);
        }
        AlgorithmKind::NthPoint { .. }
        | AlgorithmKind::RadialDistance { .. }
        | AlgorithmKind::PerpendicularDistance { .. }
        | AlgorithmKind::ReumannWitkam { .. }
        | AlgorithmKind::Opheim { .. } => return None,
    }
    Some(out)
}

fn simplify_stored<const D: usize>(kind: &AlgorithmKind, stored: &Stored) -> Vec<f64> {
    match stored {
        Stored::Slice(coords) => kind.simplify::<D, _>(coords.as_slice()),
        Stored::Deque(coords) => simplify_random::<D, _>(kind, coords)
            .unwrap_or_else(|| simplify_forward::<D, _>(kind, coords.iter().copied())),
        Stored::List(coords) => simplify_forward::<D, _>(kind, coords.iter().copied()),
    }
}

/// Median of `durations`, sorting them in place.
fn median(durations: &mut [Duration]) -> Duration {
    durations.sort_unstable();
    durations
        .get(durations.len() / 2)
        .copied()
        .unwrap_or_default()
}

/// Whether the reference implementation produces the same result.
fn reference_agrees<const D: usize>(
    kind: &AlgorithmKind,
    coords: &[f64],
    result: &[f64],
) -> Option<bool> {
    let expected = match *kind {
        AlgorithmKind::DouglasPeuckerClassic { tol } => {
            reference::douglas_peucker::<D>(coords, tol, false)
        }
        AlgorithmKind::DouglasPeucker { tol } => {
            reference::douglas_peucker::<D>(coords, tol, true)
        }
        _ => return None,
    };
    Some(expected == result)
}

fn bench_one<const D: usize, C: Clock>(
    kind: &AlgorithmKind,
    coords: &[f64],
    stored: &Stored,
    options: &Options,
    clock: &C,
) -> AlgorithmReport {
    let mut durations = Vec::with_capacity(options.runs);
    let mut simplification = Vec::new();
    for _ in 0..options.runs.max(1) {
        let start = clock.now();
        simplification = simplify_stored::<D>(kind, stored);
        durations.push(clock.elapsed(&start));
    }
    let median = median(&mut durations);

    let statistics = match compute_positional_error_statistics::<D, _, _, _>(
        coords.iter().copied(),
        simplification.iter().copied(),
    ) {
        Ok(statistics) => Some(statistics),
        Err(e) => {
            warn!("{kind}: positional error not computed: {e}");
            None
        }
    };

    let reference_agrees = if options.compare_reference && kind.is_douglas_peucker() {
        reference_agrees::<D>(kind, coords, &simplification)
    } else {
        None
    };
    if reference_agrees == Some(false) {
        warn!("{kind}: result differs from the reference implementation");
    }

    let report = AlgorithmReport {
        algorithm: *kind,
        container: options.container,
        original_points: coords.len() / D,
        points: simplification.len() / D,
        median,
        statistics,
        reference_agrees,
        simplification,
    };
    debug!(
        "{kind}: {} points, median {:?} over {} runs",
        report.points,
        report.median,
        durations.len()
    );
    report
}

fn bench_dim<const D: usize, C: Clock>(
    coords: &[f64],
    kinds: &[AlgorithmKind],
    options: &Options,
    clock: &C,
) -> Vec<AlgorithmReport> {
    let stored = Stored::new(coords, options.container);
    kinds
        .iter()
        .map(|kind| bench_one::<D, C>(kind, coords, &stored, options, clock))
        .collect()
}

/// Time every algorithm in `kinds` on `polyline`.
///
/// # Errors
///
/// Returns [`BenchError::UnsupportedDimension`] unless the polyline has
/// 1 to 4 coordinates per point.
pub fn bench<C: Clock>(
    polyline: &Polyline,
    kinds: &[AlgorithmKind],
    options: &Options,
    clock: &C,
) -> Result<Vec<AlgorithmReport>, BenchError> {
    info!(
        "{} points of dimension {}, {} algorithms, {} runs each",
        polyline.point_count(),
        polyline.dimension,
        kinds.len(),
        options.runs
    );
    let coords = &polyline.coords;
    let reports = match polyline.dimension {
        1 => bench_dim::<1, C>(coords, kinds, options, clock),
        2 => bench_dim::<2, C>(coords, kinds, options, clock),
        3 => bench_dim::<3, C>(coords, kinds, options, clock),
        4 => bench_dim::<4, C>(coords, kinds, options, clock),
        dimension => return Err(BenchError::UnsupportedDimension(dimension)),
    };
    Ok(reports)
}
