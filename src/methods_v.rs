/* ************************************************************************ **
** This file is part of statmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Index, IndexMut};

use crate::traits::{Semiring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveFloat};
use crate::types::{Matrix, Vector};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a vector from a function on indices.
#[inline(always)]
pub fn from_fn<X, F, const M: usize>(mut f: F) -> Vector<X, M>
where F: FnMut(usize) -> X,
{ Vector(crate::methods_m::from_fn(|i, _| f(i))) }

/// Construct a vector from a plain array.
#[inline(always)]
pub fn from_array<X, const M: usize>(data: [X; M]) -> Vector<X, M>
{ Vector(Matrix(data.map(|x| [x]))) }

/// Get a zero vector (using type inference).
#[inline(always)]
pub fn zero<X: Semiring, const M: usize>() -> Vector<X, M>
where X: PrimitiveSemiring,
{ Vector(crate::methods_m::zero()) }

/// Get the inner product of two vectors.
///
/// This is basically just `Vector::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<X: Semiring, const M: usize>(a: &Vector<X, M>, b: &Vector<X, M>) -> X
where X: PrimitiveSemiring,
{ a.dot(b) }

// ---------------------------------------------------------------------------

impl<X, const M: usize> Vector<X, M> {
    /// Construct a vector from a function on indices.
    ///
    /// This is also available as the free function `vee::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { from_fn(f) }

    /// Wrap a plain array into a (column) vector.
    #[inline(always)]
    pub fn from_array(data: [X; M]) -> Self
    { from_array(data) }

    /// Unwrap into a plain array.
    #[inline]
    pub fn into_array(self) -> [X; M]
    where X: Copy,
    { (self.0).0.map(|row| row[0]) }
}

impl<X: Semiring, const M: usize> Vector<X, M>
where X: PrimitiveSemiring,
{
    /// Get a zero vector.
    ///
    /// This is also available as the free function `vee::zero`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn zero() -> Self
    { zero() }

    /// Get the inner product with another column.
    ///
    /// The argument is any single-column matrix; vectors coerce.
    #[inline]
    pub fn dot(&self, other: &Matrix<X, M, 1>) -> X
    { (0..M).map(|i| self[i] * other[i][0]).sum() }

    /// Get the vector's squared magnitude (no square root taken).
    #[inline(always)]
    pub fn norm_squared(&self) -> X
    { self.dot(self) }

    /// True iff the magnitude strictly exceeds `value`.
    ///
    /// Compares squared magnitudes, avoiding a square root.
    #[inline(always)]
    pub fn longer_than(&self, value: X) -> bool
    { self.norm_squared() > value * value }
}

impl<X: Field, const M: usize> Vector<X, M>
where X: PrimitiveFloat,
{
    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> X
    { self.norm_squared().sqrt() }

    /// Normalize the vector in place.
    ///
    /// The zero vector has no direction; normalizing it floods the vector
    /// with NaN/infinity. See `unit_or_zero` for the guarded variant.
    #[inline]
    pub fn normalize(&mut self) {
        let n = self.norm();
        *self /= n;
    }

    /// Get a normalized copy. Same zero-vector caveat as `normalize`.
    #[inline(always)]
    pub fn unit(&self) -> Self
    { self / self.norm() }

    /// Get a normalized copy, or the zero vector if the magnitude does not
    /// exceed `eps`. This is the variant to prefer whenever the input may
    /// be (nearly) zero.
    #[inline]
    pub fn unit_or_zero(&self, eps: X) -> Self {
        let n = self.norm();
        if n > eps {
            self / n
        } else {
            Self::zero()
        }
    }

    /// `unit_or_zero` with the stock threshold of `1e-5`.
    #[inline(always)]
    pub fn unit_or_zero_default(&self) -> Self
    { self.unit_or_zero(X::unit_eps()) }

    /// Element-wise square root. (not to be confused with `norm`)
    #[inline]
    pub fn sqrt(&self) -> Self
    { Self::from_fn(|i| self[i].sqrt()) }
}

// ---------------------------------------------------------------------------
// `v[i]` addresses `(i, 0)` of the underlying single-column matrix.

impl<X, const M: usize> Index<usize> for Vector<X, M> {
    type Output = X;

    #[inline(always)]
    fn index(&self, i: usize) -> &X
    { &(self.0).0[i][0] }
}

impl<X, const M: usize> IndexMut<usize> for Vector<X, M> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut X
    { &mut (self.0).0[i][0] }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_four_five() {
        let v = from_array([3.0, 4.0]);
        assert_eq!(v.norm(), 5.0);
        assert_eq!(v.norm_squared(), 25.0);
        assert_eq!(v.dot(&v), 25.0);
        assert_eq!(dot(&v, &v), 25.0);
    }

    #[test]
    fn test_unit() {
        let v = from_array([3.0, 4.0]);
        assert_close!(abs=1e-12, v.unit().norm(), 1.0);

        let mut w = v;
        w.normalize();
        assert_close!(abs=1e-12, w.into_array(), [0.6, 0.8]);
        assert_eq!(w, v.unit());
    }

    #[test]
    fn test_unit_or_zero() {
        let z: Vector<f64, 3> = Vector::zero();
        assert_eq!(z.unit_or_zero_default(), Vector::zero());
        assert_eq!(z.unit_or_zero(1e-5), Vector::zero());

        let v = from_array([0.0, 2.0, 0.0]);
        assert_close!(abs=1e-12, v.unit_or_zero_default().into_array(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_normalize_zero_vector_degenerates() {
        let mut z: Vector<f64, 2> = Vector::zero();
        z.normalize();
        assert!(z[0].is_nan());
    }

    #[test]
    fn test_longer_than() {
        let v = from_array([3.0, 4.0]);
        assert!(v.longer_than(4.9));
        assert!(!v.longer_than(5.0));
    }

    #[test]
    fn test_elementwise_sqrt() {
        let v = from_array([4.0, 9.0, 0.25]);
        assert_close!(abs=1e-12, v.sqrt().into_array(), [2.0, 3.0, 0.5]);
    }

    #[test]
    fn test_index_addresses_column() {
        let mut v = from_array([1, 2, 3]);
        assert_eq!(v[1], 2);
        v[1] = 9;
        assert_eq!((v.0).0, [[1], [9], [3]]);
    }

    #[test]
    fn test_explicit_matrix_conversions() {
        let v = from_array([1.0, 2.0]);
        let m: Matrix<f64, 2, 1> = v.into();
        assert_eq!(m.into_array(), [[1.0], [2.0]]);
        let back = Vector::from(m);
        assert_eq!(back, v);
    }
}
