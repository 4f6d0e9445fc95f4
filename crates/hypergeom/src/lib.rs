//! Points, circular arcs, and Bezier curves in N-dimensional Euclidean space.
//!
//! Every operation is a pure function. Inputs are validated up front and
//! rejected with a [`GeometryError`] instead of being truncated or padded.
//!
//! Rotations use an "angle list" ([`Angles`]) with one angle per pair of
//! adjacent axes, so a point in N dimensions takes N-1 angles.

pub use {approx, smallvec};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for approximate comparisons.
pub const EPSILON: Float = 0.000001;

/// Minimum number of dimensions accepted by any operation.
pub const MIN_NDIM: u8 = 2;

/// Maximum number of dimensions accepted by any operation.
///
/// [`VectorRef::ndim()`] saturates at `u8::MAX`, so that value is reserved
/// for inputs too long to count.
pub const MAX_NDIM: u8 = u8::MAX - 1;

/// Maximum magnitude of a single angle in an [`Angles`] list.
pub const MAX_ANGLE: Float = std::f64::consts::TAU;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod vector;
#[macro_use]
mod point;
#[macro_use]
mod angles;

pub mod arc;
pub mod bezier;
pub mod error;
pub mod kernel;
mod polar;
mod validate;


/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::angles::Angles;
    pub use crate::arc::{CircularArc, Winding};
    pub use crate::bezier::BezierCurve;
    pub use crate::error::{GeometryError, Result};
    pub use crate::point::Point;
    pub use crate::vector::{Vector, VectorRef};
    pub use crate::{EPSILON, Float, MAX_ANGLE, MAX_NDIM, MIN_NDIM, angles, point, vector};
}
pub use prelude::*;
