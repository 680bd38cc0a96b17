/* ************************************************************************ **
** This file is part of statmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Constructors and inherent methods of [`Matrix`].
//!
//! This library uses a column-based formalism; vectors are columns, and
//! matrix-vector multiplication has the matrix on the left. Storage is
//! row-major regardless (a matrix is a container of rows).

use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::types::Matrix;

use num_traits::{Zero, One};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices.
///
/// The shape of the matrix will be inferred solely from how it
/// is used.  There is also a static method form of this for
/// easily supplying a type hint. (e.g. `Matrix::from_fn`)
#[inline(always)]
pub fn from_fn<X, F, const M: usize, const N: usize>(mut f: F) -> Matrix<X, M, N>
where F: FnMut(usize, usize) -> X,
{ Matrix(std::array::from_fn(|i| std::array::from_fn(|j| f(i, j)))) }

/// Construct a matrix from a 2D array (of rows).
///
/// This is intended to be used in places where an array of known
/// shape already exists, and needs to be wrapped into a matrix.
#[inline(always)]
pub fn from_array<X, const M: usize, const N: usize>(arr: [[X; N]; M]) -> Matrix<X, M, N>
{ Matrix(arr) }

/// Construct a zero matrix (using type inference).
///
/// This is also available as a static method on the matrix type.
#[inline(always)]
pub fn zero<X: Semiring, const M: usize, const N: usize>() -> Matrix<X, M, N>
where X: PrimitiveSemiring,
{ Matrix([[X::zero(); N]; M]) }

/// Construct an all-ones matrix (using type inference).
#[inline(always)]
pub fn ones<X: Semiring, const M: usize, const N: usize>() -> Matrix<X, M, N>
where X: PrimitiveSemiring,
{ Matrix([[X::one(); N]; M]) }

/// Construct an all-NaN matrix (using type inference).
#[inline(always)]
pub fn nans<X: Field, const M: usize, const N: usize>() -> Matrix<X, M, N>
where X: PrimitiveFloat,
{ Matrix([[X::nan(); N]; M]) }

/// Construct an identity matrix (using type inference).
///
/// This is also available as a static method on the matrix type.
#[inline(always)]
pub fn eye<X: Semiring, const N: usize>() -> Matrix<X, N, N>
where X: PrimitiveSemiring,
{ from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

/// Compare two matrices for approximate equality.
///
/// NOTE: the `eps` argument is currently unused; comparison defers to the
/// fixed tolerance baked into `PartialEq` (`1e-4` for float scalars).
/// The parameter is kept in the signature for compatibility with callers
/// that pass one.
#[inline]
pub fn is_equal<X: Semiring, const M: usize, const N: usize>(
    x: &Matrix<X, M, N>,
    y: &Matrix<X, M, N>,
    _eps: X,
) -> bool
where X: PrimitiveSemiring,
{ x == y }

// ---------------------------------------------------------------------------

impl<X, const M: usize, const N: usize> Matrix<X, M, N> {
    /// Construct a matrix from a function on indices.
    ///
    /// This is also available as the free function `mat::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { from_fn(f) }

    /// Wrap a 2D array (of rows) into a matrix.
    #[inline(always)]
    pub fn from_array(arr: [[X; N]; M]) -> Self
    { Matrix(arr) }

    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> Matrix<X, N, M>
    where X: Copy,
    { from_fn(|r, c| self[c][r]) }

    /// Matrix transpose. (long-form alias of `t`)
    #[inline(always)]
    pub fn transpose(&self) -> Matrix<X, N, M>
    where X: Copy,
    { self.t() }

    /// Map each scalar element of a matrix.
    #[inline]
    pub fn map<B, F>(&self, mut f: F) -> Matrix<B, M, N>
    where X: Copy, F: FnMut(X) -> B,
    { from_fn(|r, c| f(self[r][c])) }
}

impl<X: Semiring, const M: usize, const N: usize> Matrix<X, M, N>
where X: PrimitiveSemiring,
{
    /// Construct the zero matrix.
    ///
    /// This is also available as the free function `mat::zero`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn zero() -> Self
    { zero() }

    /// Element-wise product with an equally-shaped matrix.
    #[inline]
    pub fn emult(&self, other: &Self) -> Self
    { from_fn(|r, c| self[r][c] * other[r][c]) }

    /// Overwrite every element with the scalar zero.
    #[inline]
    pub fn set_zero(&mut self)
    { *self = zero(); }

    /// Overwrite every element with `value`.
    #[inline]
    pub fn set_all(&mut self, value: X)
    { self.0 = [[value; N]; M]; }

    /// Overwrite every element with the scalar one.
    #[inline(always)]
    pub fn set_one(&mut self)
    { self.set_all(X::one()); }

    /// Zero the matrix, then write ones along the main diagonal.
    ///
    /// Non-square shapes get a partial diagonal of length `min(M, N)`.
    #[inline]
    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..M.min(N) {
            self.0[i][i] = X::one();
        }
    }

    /// Exchange two full rows. Identity when `a == b`.
    #[inline]
    pub fn swap_rows(&mut self, a: usize, b: usize)
    { self.0.swap(a, b); }

    /// Exchange two full columns. Identity when `a == b`.
    #[inline]
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        for row in &mut self.0 {
            row.swap(a, b);
        }
    }

    /// The largest element. The scan starts at `(0, 0)` and only a strictly
    /// greater value replaces the candidate, so the first occurrence wins
    /// ties.
    #[inline]
    pub fn max(&self) -> X {
        let mut best = self[0][0];
        for row in self {
            for &x in row {
                if x > best {
                    best = x;
                }
            }
        }
        best
    }

    /// The smallest element. First occurrence wins ties, as with `max`.
    #[inline]
    pub fn min(&self) -> X {
        let mut best = self[0][0];
        for row in self {
            for &x in row {
                if x < best {
                    best = x;
                }
            }
        }
        best
    }
}

impl<X: Ring, const M: usize, const N: usize> Matrix<X, M, N>
where X: PrimitiveRing,
{
    /// Element-wise absolute value.
    #[inline]
    pub fn abs(&self) -> Self
    { from_fn(|r, c| self[r][c].abs()) }
}

impl<X: Field, const M: usize, const N: usize> Matrix<X, M, N>
where X: PrimitiveFloat,
{
    /// Element-wise quotient with an equally-shaped matrix.
    ///
    /// Division by a zero element follows IEEE semantics (inf/NaN);
    /// there is no special case.
    #[inline]
    pub fn edivide(&self, other: &Self) -> Self
    { from_fn(|r, c| self[r][c] / other[r][c]) }

    /// Overwrite every element with NaN.
    #[inline(always)]
    pub fn set_nan(&mut self)
    { self.set_all(X::nan()); }

    /// True iff every element is NaN.
    #[inline]
    pub fn is_all_nan(&self) -> bool
    { self.into_iter().all(|row| row.iter().all(|x| x.is_nan())) }
}

impl<X: Semiring, const N: usize> Matrix<X, N, N>
where X: PrimitiveSemiring,
{
    /// Construct the identity matrix.
    ///
    /// This is also available as the free function `mat::eye`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn eye() -> Self
    { eye() }
}

// ---------------------------------------------------------------------------

impl<X: Semiring, const M: usize, const N: usize> Zero for Matrix<X, M, N>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { zero() }

    #[inline]
    fn is_zero(&self) -> bool
    { self.into_iter().all(|row| row.iter().all(|x| x.is_zero())) }
}

impl<X: Semiring, const N: usize> One for Matrix<X, N, N>
where X: PrimitiveSemiring,
{
    #[inline]
    fn one() -> Self
    { eye() }

    #[inline]
    fn is_one(&self) -> bool {
        self.into_iter().enumerate().all(|(r, row)| {
            row.iter().enumerate().all(|(c, x)| {
                match r == c {
                    true => x.is_one(),
                    false => x.is_zero(),
                }
            })
        })
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{Zero, One};

    #[test]
    fn test_zero_eye() {
        assert_eq!(from_array([[0, 0], [0, 0]]), Matrix::<i32, 2, 2>::zero());
        assert_eq!(from_array([[1, 0], [0, 1]]), Matrix::<i32, 2, 2>::eye());
        assert!(from_array([[0, 0], [0, 0]]).is_zero());
        assert!(!from_array([[0, 1], [0, 0]]).is_zero());
        assert!(from_array([[1, 0], [0, 1]]).is_one());
        assert!(!from_array([[2, 0], [0, 1]]).is_one());
        assert!(!from_array([[1, -1], [0, 1]]).is_one());
    }

    #[test]
    fn test_set_identity_square() {
        let mut m: Matrix<f64, 3, 3> = mat_filled_with(7.0);
        m.set_identity();
        assert_eq!(m, Matrix::eye());
    }

    #[test]
    fn test_set_identity_wide() {
        // a 2x4 gets ones at (0,0) and (1,1) only
        let mut m: Matrix<f64, 2, 4> = mat_filled_with(7.0);
        m.set_identity();
        assert_eq!(m.into_array(), [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
        ]);
    }

    #[test]
    fn test_transpose() {
        let m: Matrix<f32, 3, 3> = Matrix::from_row_major(&[
            0.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 10.0,
        ]);
        assert_eq!(m.t()[0][2], m[2][0]);
        assert_eq!(m.t()[0][2], 7.0);
        assert_eq!(m.t().t(), m);
    }

    #[test]
    fn test_swap_same_index_is_noop() {
        let orig = from_array([[1, 2, 3], [4, 5, 6]]);
        let mut m = orig;
        m.swap_rows(1, 1);
        m.swap_cols(2, 2);
        assert_eq!(m, orig);
    }

    #[test]
    fn test_swap() {
        let mut m = from_array([[1, 2, 3], [4, 5, 6]]);
        m.swap_rows(0, 1);
        assert_eq!(m.into_array(), [[4, 5, 6], [1, 2, 3]]);
        m.swap_cols(0, 2);
        assert_eq!(m.into_array(), [[6, 5, 4], [3, 2, 1]]);
    }

    #[test]
    fn test_max_min_first_wins() {
        let m = from_array([[3, 1], [3, -2]]);
        assert_eq!(m.max(), 3);
        assert_eq!(m.min(), -2);
    }

    #[test]
    fn test_abs() {
        let m = from_array([[-1.5, 2.0], [0.0, -0.25]]);
        assert_eq!(m.abs().into_array(), [[1.5, 2.0], [0.0, 0.25]]);
    }

    #[test]
    fn test_nan_handling() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zero();
        assert!(!m.is_all_nan());
        m.set_nan();
        assert!(m.is_all_nan());
        m.0[1][0] = 0.0;
        assert!(!m.is_all_nan());

        let n: Matrix<f64, 2, 3> = nans();
        assert!(n.is_all_nan());
    }

    #[test]
    fn test_set_all_ones() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zero();
        m.set_one();
        assert_eq!(m, ones());
    }

    #[test]
    fn test_emult_edivide() {
        let a = from_array([[1.0, 2.0], [3.0, 4.0]]);
        let b = from_array([[2.0, 2.0], [0.5, 4.0]]);
        assert_eq!(a.emult(&b).into_array(), [[2.0, 4.0], [1.5, 16.0]]);
        assert_eq!(a.edivide(&b).into_array(), [[0.5, 1.0], [6.0, 1.0]]);
    }

    #[test]
    fn test_edivide_by_zero_is_ieee() {
        let a = from_array([[1.0f64]]);
        let b = from_array([[0.0f64]]);
        assert!(a.edivide(&b)[0][0].is_infinite());
    }

    #[test]
    fn test_is_equal_ignores_eps() {
        // `is_equal` defers to the fixed-tolerance operator no matter
        // what epsilon the caller supplies.
        let a = from_array([[0.0f64]]);
        let b = from_array([[0.001f64]]);
        assert!(a != b);
        assert!(!is_equal(&a, &b, 1.0));
        assert!(is_equal(&a, &from_array([[0.00001]]), 0.0));
    }

    fn mat_filled_with<const M: usize, const N: usize>(x: f64) -> Matrix<f64, M, N> {
        let mut m = Matrix::zero();
        m.set_all(x);
        m
    }
}
