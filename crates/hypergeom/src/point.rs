//! N-dimensional Euclidean point.

use std::fmt;
use std::ops::*;

use crate::vector::fmt_components;
use crate::{Float, Vector, VectorRef};

/// Constructs an N-dimensional Euclidean point, using the same syntax as
/// `vec![]`.
#[macro_export]
macro_rules! point {
    [$($tok:tt)*] => {
        $crate::Point($crate::vector![$($tok)*])
    };
}

/// N-dimensional Euclidean point.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Point(pub Vector);

impl<V: VectorRef> From<V> for Point {
    fn from(value: V) -> Self {
        Point(value.to_vector())
    }
}

impl Point {
    /// Returns the origin point.
    pub fn origin(ndim: u8) -> Point {
        Point(Vector::zero(ndim))
    }

    /// Returns the number of components in the point.
    pub fn ndim(&self) -> u8 {
        self.0.ndim()
    }

    /// Returns a reference to the components of the point as a vector.
    pub fn as_vector(&self) -> &Vector {
        &self.0
    }
    /// Returns the vector from the origin to the point.
    pub fn into_vector(self) -> Vector {
        self.0
    }

    /// Returns an iterator over the coordinates of the point.
    pub fn coords(&self) -> impl ExactSizeIterator<Item = Float> + '_ {
        self.0.iter()
    }
}

impl approx::AbsDiffEq for Point {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.approx_eq(&other.0, epsilon)
    }
}

impl FromIterator<Float> for Point {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, self.coords())
    }
}

impl<V: VectorRef> Add<V> for &Point {
    type Output = Point;

    fn add(self, rhs: V) -> Self::Output {
        Point(&self.0 + rhs)
    }
}

impl Sub<&Point> for &Point {
    type Output = Vector;

    fn sub(self, rhs: &Point) -> Self::Output {
        &self.0 - &rhs.0
    }
}

impl Index<u8> for Point {
    type Output = Float;

    fn index(&self, index: u8) -> &Self::Output {
        &self.0[index]
    }
}
