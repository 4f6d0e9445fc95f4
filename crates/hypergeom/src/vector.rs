//! N-dimensional vector math.

use std::fmt;
use std::ops::*;

use smallvec::SmallVec;

use crate::Float;

/// Constructs an N-dimensional vector, using the same syntax as `vec![]`.
#[macro_export]
macro_rules! vector {
    [$($tok:tt)*] => {
        $crate::Vector($crate::smallvec::smallvec![$($tok)*])
    };
}

/// N-dimensional vector, used for offsets and displacements.
///
/// Reading a component out of bounds with [`VectorRef::get()`] returns zero,
/// but the operations in [`crate::kernel`] never rely on that: they require
/// companion vectors to have exactly matching dimensionality.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vector(pub SmallVec<[Float; 4]>);

/// Reference to an N-dimensional vector.
pub trait VectorRef: Sized + fmt::Debug {
    /// Converts the vector to a `Vector`.
    fn to_vector(&self) -> Vector {
        self.iter().collect()
    }

    /// Returns the number of components in the vector.
    fn ndim(&self) -> u8;

    /// Returns a component of the vector. If the index is out of bounds,
    /// returns zero.
    fn get(&self, idx: u8) -> Float;

    /// Returns an iterator over the components of the vector.
    fn iter(&self) -> VectorIter<&Self> {
        VectorIter {
            range: 0..self.ndim(),
            vector: self,
        }
    }

    /// Returns whether every component is finite.
    fn is_finite(&self) -> bool {
        self.iter().all(Float::is_finite)
    }

    /// Returns the dot product of this vector with another.
    fn dot(&self, rhs: impl VectorRef) -> Float {
        std::iter::zip(self.iter(), rhs.iter())
            .map(|(l, r)| l * r)
            .sum()
    }

    /// Returns the magnitude of the vector.
    fn mag(&self) -> Float {
        self.mag2().sqrt()
    }
    /// Returns the squared magnitude of the vector.
    fn mag2(&self) -> Float {
        self.dot(self)
    }

    /// Returns a scaled copy of the vector.
    #[must_use]
    fn scale(&self, scalar: Float) -> Vector {
        self.iter().map(|x| x * scalar).collect()
    }

    /// Returns whether two vectors are equal within `epsilon` on each
    /// component.
    fn approx_eq(&self, other: impl VectorRef, epsilon: Float) -> bool {
        Vector::zip(self, other).all(|(l, r)| (l - r).abs() <= epsilon)
    }
}

/// Iterator over the components of a vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VectorIter<V> {
    range: Range<u8>,
    vector: V,
}
impl<V: VectorRef> Iterator for VectorIter<V> {
    type Item = Float;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|i| self.vector.get(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}
impl<V: VectorRef> ExactSizeIterator for VectorIter<V> {}

impl VectorRef for Vector {
    fn ndim(&self) -> u8 {
        self.0.len().try_into().unwrap_or(u8::MAX)
    }

    fn get(&self, idx: u8) -> Float {
        self.0.get(idx as usize).copied().unwrap_or(0.0)
    }
}

impl VectorRef for &[Float] {
    fn ndim(&self) -> u8 {
        self.len().try_into().unwrap_or(u8::MAX)
    }

    fn get(&self, idx: u8) -> Float {
        <[Float]>::get(self, idx as usize).copied().unwrap_or(0.0)
    }
}

impl<const N: usize> VectorRef for [Float; N] {
    fn ndim(&self) -> u8 {
        N.try_into().unwrap_or(u8::MAX)
    }

    fn get(&self, idx: u8) -> Float {
        <[Float]>::get(self, idx as usize).copied().unwrap_or(0.0)
    }
}

impl<V: VectorRef> VectorRef for &'_ V {
    fn ndim(&self) -> u8 {
        (*self).ndim()
    }

    fn get(&self, idx: u8) -> Float {
        (*self).get(idx)
    }
}

/// Writes a parenthesized, comma-separated list of components.
pub(crate) fn fmt_components(
    f: &mut fmt::Formatter<'_>,
    components: impl IntoIterator<Item = Float>,
) -> fmt::Result {
    write!(f, "(")?;
    let mut iter = components.into_iter();
    if let Some(first) = iter.next() {
        fmt::Display::fmt(&first, f)?;
        for elem in iter {
            write!(f, ", ")?;
            fmt::Display::fmt(&elem, f)?;
        }
    }
    write!(f, ")")
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, self.0.iter().copied())
    }
}

macro_rules! impl_zero_padded_op {
    (impl $trait_name:ident for $type_name:ty { fn $fn_name:ident() }) => {
        impl<V: VectorRef> $trait_name<V> for $type_name {
            type Output = Vector;

            fn $fn_name(self, rhs: V) -> Self::Output {
                Vector::zip(self, rhs).map(|(l, r)| l.$fn_name(r)).collect()
            }
        }
    };
}
macro_rules! impl_vector_ops {
    (impl for $type_name:ty) => {
        impl_zero_padded_op!(impl Add for $type_name { fn add() });
        impl_zero_padded_op!(impl Sub for $type_name { fn sub() });

        impl Neg for $type_name {
            type Output = Vector;

            fn neg(self) -> Self::Output {
                self.iter().map(|n| -n).collect()
            }
        }

        impl Mul<Float> for $type_name {
            type Output = Vector;

            fn mul(self, rhs: Float) -> Self::Output {
                self.iter().map(|x| x * rhs).collect()
            }
        }
    };
}
impl_vector_ops!(impl for Vector);
impl_vector_ops!(impl for &'_ Vector);

impl Index<u8> for Vector {
    type Output = Float;

    fn index(&self, index: u8) -> &Self::Output {
        &self.0[index as usize]
    }
}
impl IndexMut<u8> for Vector {
    fn index_mut(&mut self, index: u8) -> &mut Self::Output {
        let ndim = self.ndim();
        self.0.get_mut(index as usize).unwrap_or_else(|| {
            panic!("vector index out of bounds: the dimensionality is {ndim} but the index is {index}")
        })
    }
}

impl Vector {
    /// Zero-dimensional empty vector.
    pub const EMPTY: Self = Self(SmallVec::new_const());

    /// Returns a zero vector.
    pub fn zero(ndim: u8) -> Self {
        vector![0.0; ndim as usize]
    }
    /// Returns a vector with `value` along axis 0 and zero on every other
    /// axis, up to `ndim`.
    pub fn along_first_axis(ndim: u8, value: Float) -> Self {
        let mut ret = Self::zero(ndim);
        if let Some(first) = ret.0.first_mut() {
            *first = value;
        }
        ret
    }

    /// Returns an iterator over two vectors, both padded to the same length.
    pub fn zip<A: VectorRef, B: VectorRef>(
        a: A,
        b: B,
    ) -> std::iter::Zip<VectorIter<A>, VectorIter<B>> {
        let max_ndim = std::cmp::max(a.ndim(), b.ndim());
        std::iter::zip(
            VectorIter {
                range: 0..max_ndim,
                vector: a,
            },
            VectorIter {
                range: 0..max_ndim,
                vector: b,
            },
        )
    }
}

impl approx::AbsDiffEq for Vector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.approx_eq(other, epsilon)
    }
}

impl FromIterator<Float> for Vector {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[Float]> for Vector {
    fn from(value: &[Float]) -> Self {
        Self(SmallVec::from_slice(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_add_sub() {
        let v1 = vector![1.0, 2.0, -10.0];
        let v2 = vector![-5.0, 0.5, 1.0];
        assert_eq!(&v1 + &v2, vector![-4.0, 2.5, -9.0]);
        assert_eq!(&v1 - &v2, vector![6.0, 1.5, -11.0]);
        assert_eq!(-v1, vector![-1.0, -2.0, 10.0]);
    }

    #[test]
    fn test_vector_mag() {
        assert_eq!(vector![3.0, 4.0].mag(), 5.0);
        assert_eq!([1.0, 2.0, 2.0].mag2(), 9.0);
    }

    #[test]
    fn test_vector_finite() {
        assert!(vector![1.0, -2.0].is_finite());
        assert!(!vector![1.0, Float::NAN].is_finite());
        assert!(!vector![Float::NEG_INFINITY, 0.0].is_finite());
    }

    #[test]
    fn test_along_first_axis() {
        assert_eq!(Vector::along_first_axis(3, -2.5), vector![-2.5, 0.0, 0.0]);
        assert_eq!(Vector::along_first_axis(0, 1.0), Vector::EMPTY);
    }

    #[test]
    fn test_vector_display() {
        assert_eq!(vector![1.0, -0.5].to_string(), "(1, -0.5)");
    }
}
