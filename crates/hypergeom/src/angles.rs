//! Per-axis-pair angle lists.

use std::fmt;
use std::ops::{Index, Neg};

use crate::vector::fmt_components;
use crate::{Float, Vector, VectorRef};

/// Constructs an angle list, using the same syntax as `vec![]`.
#[macro_export]
macro_rules! angles {
    [$($tok:tt)*] => {
        $crate::Angles($crate::vector![$($tok)*])
    };
}

/// List of angles in radians, one for each pair of adjacent axes.
///
/// Angle `i` describes a rotation in the plane spanned by axis `i` and axis
/// `i + 1`, so a point in N dimensions pairs with a list of N-1 angles. For
/// example, where X is "right", Y is "up", and Z is "in" on a computer screen,
/// the direction `[PI/4, -PI/4]` points out of the screen over the viewer's
/// right shoulder.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Angles(pub Vector);

impl Angles {
    /// Returns a list of `len` zero angles.
    pub fn zero(len: u8) -> Self {
        Angles(Vector::zero(len))
    }

    /// Returns the number of angles in the list.
    pub fn len(&self) -> u8 {
        self.0.ndim()
    }
    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the angles.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Float> + '_ {
        self.0.iter()
    }

    /// Returns the dimensionality of a point that this list can rotate.
    pub fn point_ndim(&self) -> u8 {
        self.len().saturating_add(1)
    }
}

impl From<Vec<Float>> for Angles {
    fn from(value: Vec<Float>) -> Self {
        value.into_iter().collect()
    }
}

impl FromIterator<Float> for Angles {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Angles(iter.into_iter().collect())
    }
}

impl Neg for &Angles {
    type Output = Angles;

    fn neg(self) -> Self::Output {
        Angles(-&self.0)
    }
}
impl Neg for Angles {
    type Output = Angles;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Index<u8> for Angles {
    type Output = Float;

    fn index(&self, index: u8) -> &Self::Output {
        &self.0[index]
    }
}

impl approx::AbsDiffEq for Angles {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len() && self.0.approx_eq(&other.0, epsilon)
    }
}

impl fmt::Display for Angles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, self.iter())
    }
}
