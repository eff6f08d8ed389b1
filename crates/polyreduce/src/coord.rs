//! Coordinate value types and their calculation types.
//!
//! Every squared distance, dot product and accumulation in this crate is
//! evaluated in a *calculation type* chosen by the coordinate type:
//!
//! | coordinate type            | calculation type |
//! |----------------------------|------------------|
//! | `f32`                      | `f32`            |
//! | `f64`                      | `f64`            |
//! | any primitive integer      | `f64`            |
//! | custom type                | chosen by its [`Coordinate`] impl |
//!
//! Squaring small integers overflows quickly, and subtracting two unsigned
//! coordinates underflows. Promoting integers to a signed floating type
//! removes both hazards. Floating types are left alone so callers keep the
//! precision they asked for.
//!
//! A custom coordinate type opts in by implementing [`Coordinate`]. The
//! default choice for a float-like type is `Calc = Self`, i.e. no promotion:
//!
//! ```
//! use polyreduce::Coordinate;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Meters(f64);
//!
//! impl Coordinate for Meters {
//!     type Calc = f64;
//!
//!     fn to_calc(self) -> f64 {
//!         self.0
//!     }
//! }
//!
//! assert!((Meters(2.5).to_calc() - 2.5).abs() < f64::EPSILON);
//! ```

use std::fmt::Debug;

use num_traits::Float;

/// Arithmetic type used for all intermediate distance computations.
///
/// Blanket-implemented for every [`Float`] that is also `Debug`, which
/// covers `f32`, `f64` and float-like newtypes implementing `num-traits`.
pub trait Calc: Float + Debug {}

impl<F: Float + Debug> Calc for F {}

/// A single coordinate value of a polyline.
///
/// Output points are always copies of input coordinates, so only `Copy`
/// and exact equality are required of the value itself; all arithmetic
/// happens after [`to_calc`](Self::to_calc).
pub trait Coordinate: Copy + PartialEq + Debug {
    /// Calculation type for distances involving this coordinate type.
    type Calc: Calc;

    /// Convert the coordinate into its calculation type.
    fn to_calc(self) -> Self::Calc;
}

impl Coordinate for f32 {
    type Calc = Self;

    #[inline]
    fn to_calc(self) -> Self {
        self
    }
}

impl Coordinate for f64 {
    type Calc = Self;

    #[inline]
    fn to_calc(self) -> Self {
        self
    }
}

/// Promote each listed integer type to `f64`.
///
/// 64- and 128-bit integers lose precision beyond 2^53, which is accepted
/// in exchange for a uniform, overflow-free calculation type.
macro_rules! promote_to_f64 {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coordinate for $t {
                type Calc = f64;

                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_calc(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

promote_to_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Convert an `f64` parameter (tolerance) into a calculation type.
///
/// Values that cannot be represented map to zero, which every algorithm
/// treats as an invalid tolerance (pass-through).
#[must_use]
pub fn calc_from_f64<C: Calc>(value: f64) -> C {
    <C as num_traits::NumCast>::from(value).unwrap_or_else(C::zero)
}

/// Whether a tolerance is usable: strictly positive and not NaN.
#[inline]
pub(crate) fn is_positive<C: Calc>(value: C) -> bool {
    value > C::zero()
}
