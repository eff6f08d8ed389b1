//! Traversal capabilities, point windows, key arrays and output sinks.
//!
//! Algorithms state the minimum traversal they need through their bounds:
//!
//! - **Forward** algorithms take any `IntoIterator` whose iterator is an
//!   [`ExactSizeIterator`]: a forward cursor of known extent. Slice and `Vec`
//!   iterators, `VecDeque` and `LinkedList` iterators all qualify.
//! - **Random-access** algorithms take a [`RandomAccess`] container
//!   (slices, `Vec`, `VecDeque`). Containers without indexed access can be
//!   collected into a `Vec` first; the result is identical, only slower.
//!
//! Output always goes through an `Extend<T>` sink wrapped in an
//! [`Emitter`], which counts the coordinates written.

use std::array;
use std::collections::VecDeque;
use std::fmt;

/// Why an algorithm copied its input to the output unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassThrough {
    /// The coordinate count is not a multiple of the dimension.
    IncompletePoint,
    /// Fewer than three points: nothing to simplify.
    TooFewPoints,
    /// An algorithm parameter is out of range.
    InvalidParameter,
    /// The parameters ask to keep every point.
    NothingToRemove,
}

impl fmt::Display for PassThrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompletePoint => f.write_str("trailing incomplete point"),
            Self::TooFewPoints => f.write_str("fewer than 3 points"),
            Self::InvalidParameter => f.write_str("invalid parameter"),
            Self::NothingToRemove => f.write_str("requested output keeps every point"),
        }
    }
}

/// Number of whole points in `coord_count` coordinates of dimension `D`.
///
/// # Errors
///
/// Returns [`PassThrough::IncompletePoint`] for a trailing partial point
/// (or `D == 0`) and [`PassThrough::TooFewPoints`] below three points.
pub const fn point_count<const D: usize>(coord_count: usize) -> Result<usize, PassThrough> {
    if D == 0 || coord_count % D != 0 {
        return Err(PassThrough::IncompletePoint);
    }
    let points = coord_count / D;
    if points < 3 {
        return Err(PassThrough::TooFewPoints);
    }
    Ok(points)
}

/// Iterator adapter yielding consecutive `D`-coordinate points.
///
/// A trailing partial point is silently dropped; algorithms validate the
/// coordinate count with [`point_count`] before stepping.
#[derive(Debug, Clone)]
pub struct Points<I, const D: usize> {
    coords: I,
}

impl<I, const D: usize> Points<I, D> {
    /// Wrap a coordinate iterator.
    pub const fn new(coords: I) -> Self {
        Self { coords }
    }
}

impl<T: Copy, I: Iterator<Item = T>, const D: usize> Iterator for Points<I, D> {
    type Item = [T; D];

    fn next(&mut self) -> Option<[T; D]> {
        let first = self.coords.next()?;
        let mut point = [first; D];
        for slot in point.iter_mut().skip(1) {
            *slot = self.coords.next()?;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.coords.size_hint();
        let per_point = D.max(1);
        (lower / per_point, upper.map(|u| u / per_point))
    }
}

/// Split a coordinate sequence into `D`-coordinate points.
pub fn points<const D: usize, I: IntoIterator>(coords: I) -> Points<I::IntoIter, D> {
    Points::new(coords.into_iter())
}

/// Indexed access to a flat coordinate sequence.
pub trait RandomAccess<T: Copy> {
    /// Total number of coordinates.
    fn coord_count(&self) -> usize;

    /// Coordinate at `index`.
    ///
    /// Callers only pass indices below [`coord_count`](Self::coord_count).
    fn coord(&self, index: usize) -> T;

    /// Point number `index` (coordinates `index * D .. index * D + D`).
    fn point<const D: usize>(&self, index: usize) -> [T; D] {
        array::from_fn(|d| self.coord(index * D + d))
    }
}

impl<T: Copy> RandomAccess<T> for [T] {
    fn coord_count(&self) -> usize {
        self.len()
    }

    fn coord(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy> RandomAccess<T> for Vec<T> {
    fn coord_count(&self) -> usize {
        self.len()
    }

    fn coord(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy> RandomAccess<T> for VecDeque<T> {
    fn coord_count(&self) -> usize {
        self.len()
    }

    fn coord(&self, index: usize) -> T {
        self[index]
    }
}

/// All coordinates of a random-access container, in order.
pub fn coords_of<T: Copy, R: RandomAccess<T> + ?Sized>(
    coords: &R,
) -> impl ExactSizeIterator<Item = T> + '_ {
    (0..coords.coord_count()).map(move |i| coords.coord(i))
}

/// Counting wrapper around an append-only output sink.
#[derive(Debug)]
pub struct Emitter<'a, O> {
    out: &'a mut O,
    count: usize,
}

impl<'a, O> Emitter<'a, O> {
    /// Start emitting into `out`.
    pub const fn new(out: &'a mut O) -> Self {
        Self { out, count: 0 }
    }

    /// Append one point.
    pub fn point<T: Copy, const D: usize>(&mut self, point: &[T; D])
    where
        O: Extend<T>,
    {
        self.out.extend(point.iter().copied());
        self.count += D;
    }

    /// Append every coordinate produced by `coords`.
    pub fn coords<T, I: IntoIterator<Item = T>>(&mut self, coords: I)
    where
        O: Extend<T>,
    {
        let count = &mut self.count;
        self.out.extend(coords.into_iter().inspect(|_| *count += 1));
    }

    /// Number of coordinates appended so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

/// Copy the whole input to the output, logging why.
pub(crate) fn pass_through<T, I, O>(
    algorithm: &str,
    reason: PassThrough,
    coords: I,
    out: &mut O,
) -> usize
where
    I: IntoIterator<Item = T>,
    O: Extend<T>,
{
    log::debug!("{algorithm}: {reason}, copying input unchanged");
    let mut emitter = Emitter::new(out);
    emitter.coords(coords);
    emitter.count()
}

/// Per-point keep/discard markers for index-based algorithms.
///
/// The first and last points start out kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keys(Vec<bool>);

impl Keys {
    /// Markers for `point_count` points with only the endpoints kept.
    #[must_use]
    pub fn with_endpoints(point_count: usize) -> Self {
        let mut keys = vec![false; point_count];
        if let Some(first) = keys.first_mut() {
            *first = true;
        }
        if let Some(last) = keys.last_mut() {
            *last = true;
        }
        Self(keys)
    }

    /// Mark point `index` as kept.
    pub fn keep(&mut self, index: usize) {
        self.0[index] = true;
    }

    /// Whether point `index` is kept.
    #[must_use]
    pub fn is_kept(&self, index: usize) -> bool {
        self.0[index]
    }

    /// Number of kept points.
    #[must_use]
    pub fn kept_count(&self) -> usize {
        (0..self.0.len()).filter(|&index| self.is_kept(index)).count()
    }

    /// Copy every kept point of `coords` to the output, in order.
    pub fn copy_to<const D: usize, T, R, O>(&self, coords: &R, emitter: &mut Emitter<'_, O>)
    where
        T: Copy,
        R: RandomAccess<T> + ?Sized,
        O: Extend<T>,
    {
        for index in (0..self.0.len()).filter(|&index| self.is_kept(index)) {
            emitter.point(&coords.point::<D>(index));
        }
    }
}
