/* ************************************************************************ **
** This file is part of statmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Non-owning rectangular windows into a [`Matrix`].
//!
//! A slice holds an offset and a borrow of its source matrix; it never has
//! storage of its own, so writes through a [`SliceMut`] are immediately
//! visible in the source.  The borrow checker guarantees a slice cannot
//! outlive its source.  Offset validity (`r0 + P <= M`, `c0 + Q <= N`) is
//! asserted in debug builds only; accessors perform no checks of their own
//! beyond ordinary array indexing.

use std::ops::{Index, IndexMut};

use crate::methods_m;
use crate::types::Matrix;

// ---------------------------------------------------------------------------

/// A read-only `P`x`Q` window into a `Matrix<X, M, N>` at some offset.
pub struct Slice<'a, X, const P: usize, const Q: usize, const M: usize, const N: usize> {
    r0: usize,
    c0: usize,
    source: &'a Matrix<X, M, N>,
}

/// A writable `P`x`Q` window into a `Matrix<X, M, N>` at some offset.
pub struct SliceMut<'a, X, const P: usize, const Q: usize, const M: usize, const N: usize> {
    r0: usize,
    c0: usize,
    source: &'a mut Matrix<X, M, N>,
}

impl<'a, X, const P: usize, const Q: usize, const M: usize, const N: usize> Clone
for Slice<'a, X, P, Q, M, N> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}

impl<'a, X, const P: usize, const Q: usize, const M: usize, const N: usize> Copy
for Slice<'a, X, P, Q, M, N> { }

// ---------------------------------------------------------------------------

impl<'a, X, const P: usize, const Q: usize, const M: usize, const N: usize>
Slice<'a, X, P, Q, M, N> {
    #[inline]
    pub(crate) fn new(r0: usize, c0: usize, source: &'a Matrix<X, M, N>) -> Self {
        debug_assert!(
            r0 + P <= M && c0 + Q <= N,
            "slice of shape {}x{} at ({}, {}) extends outside its {}x{} source",
            P, Q, r0, c0, M, N,
        );
        Slice { r0, c0, source }
    }

    /// Read the element at `(i, j)` of the window, i.e. `(r0+i, c0+j)` of
    /// the source.
    #[inline(always)]
    pub fn at(&self, i: usize, j: usize) -> X
    where X: Copy,
    { self.source[self.r0 + i][self.c0 + j] }

    /// Materialize the window as an owning matrix.
    #[inline]
    pub fn to_matrix(&self) -> Matrix<X, P, Q>
    where X: Copy,
    { methods_m::from_fn(|i, j| self.at(i, j)) }
}

impl<'a, X, const P: usize, const Q: usize, const M: usize, const N: usize>
SliceMut<'a, X, P, Q, M, N> {
    #[inline]
    pub(crate) fn new(r0: usize, c0: usize, source: &'a mut Matrix<X, M, N>) -> Self {
        debug_assert!(
            r0 + P <= M && c0 + Q <= N,
            "slice of shape {}x{} at ({}, {}) extends outside its {}x{} source",
            P, Q, r0, c0, M, N,
        );
        SliceMut { r0, c0, source }
    }

    #[inline(always)]
    pub fn at(&self, i: usize, j: usize) -> X
    where X: Copy,
    { self.source[self.r0 + i][self.c0 + j] }

    #[inline(always)]
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut X
    { &mut self.source.0[self.r0 + i][self.c0 + j] }

    /// Materialize the window as an owning matrix.
    #[inline]
    pub fn to_matrix(&self) -> Matrix<X, P, Q>
    where X: Copy,
    { methods_m::from_fn(|i, j| self.at(i, j)) }

    /// Copy an equally-shaped matrix into the window.
    #[inline]
    pub fn assign(&mut self, src: &Matrix<X, P, Q>)
    where X: Copy,
    {
        for i in 0..P {
            for j in 0..Q {
                self.source.0[self.r0 + i][self.c0 + j] = src[i][j];
            }
        }
    }
}

// ---------------------------------------------------------------------------

impl<'a, X, const P: usize, const Q: usize, const M: usize, const N: usize>
Index<(usize, usize)> for Slice<'a, X, P, Q, M, N> {
    type Output = X;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &X
    { &self.source.0[self.r0 + i][self.c0 + j] }
}

impl<'a, X, const P: usize, const Q: usize, const M: usize, const N: usize>
Index<(usize, usize)> for SliceMut<'a, X, P, Q, M, N> {
    type Output = X;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &X
    { &self.source.0[self.r0 + i][self.c0 + j] }
}

impl<'a, X, const P: usize, const Q: usize, const M: usize, const N: usize>
IndexMut<(usize, usize)> for SliceMut<'a, X, P, Q, M, N> {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut X
    { &mut self.source.0[self.r0 + i][self.c0 + j] }
}

// a slice materializes into a matrix on assignment to a matrix-typed binding
impl<'a, X: Copy, const P: usize, const Q: usize, const M: usize, const N: usize>
From<Slice<'a, X, P, Q, M, N>> for Matrix<X, P, Q> {
    #[inline(always)]
    fn from(slice: Slice<'a, X, P, Q, M, N>) -> Self
    { slice.to_matrix() }
}

impl<'a, X: Copy, const P: usize, const Q: usize, const M: usize, const N: usize>
From<SliceMut<'a, X, P, Q, M, N>> for Matrix<X, P, Q> {
    #[inline(always)]
    fn from(slice: SliceMut<'a, X, P, Q, M, N>) -> Self
    { slice.to_matrix() }
}

impl<'a, 'b, X: Copy, const P: usize, const Q: usize, const M: usize, const N: usize>
From<&'b Slice<'a, X, P, Q, M, N>> for Matrix<X, P, Q> {
    #[inline(always)]
    fn from(slice: &'b Slice<'a, X, P, Q, M, N>) -> Self
    { slice.to_matrix() }
}

impl<'a, 'b, X: Copy, const P: usize, const Q: usize, const M: usize, const N: usize>
From<&'b SliceMut<'a, X, P, Q, M, N>> for Matrix<X, P, Q> {
    #[inline(always)]
    fn from(slice: &'b SliceMut<'a, X, P, Q, M, N>) -> Self
    { slice.to_matrix() }
}

// ---------------------------------------------------------------------------

impl<X, const M: usize, const N: usize> Matrix<X, M, N> {
    /// Borrow a `P`x`Q` window of the matrix at offset `(r0, c0)`.
    #[inline(always)]
    pub fn slice<const P: usize, const Q: usize>(&self, r0: usize, c0: usize)
    -> Slice<'_, X, P, Q, M, N>
    { Slice::new(r0, c0, self) }

    /// Mutably borrow a `P`x`Q` window of the matrix at offset `(r0, c0)`.
    #[inline(always)]
    pub fn slice_mut<const P: usize, const Q: usize>(&mut self, r0: usize, c0: usize)
    -> SliceMut<'_, X, P, Q, M, N>
    { SliceMut::new(r0, c0, self) }

    /// Borrow row `i` as a `1`x`N` window.
    #[inline(always)]
    pub fn row(&self, i: usize) -> Slice<'_, X, 1, N, M, N>
    { self.slice::<1, N>(i, 0) }

    /// Mutably borrow row `i` as a `1`x`N` window.
    #[inline(always)]
    pub fn row_mut(&mut self, i: usize) -> SliceMut<'_, X, 1, N, M, N>
    { self.slice_mut::<1, N>(i, 0) }

    /// Borrow column `j` as an `M`x`1` window.
    #[inline(always)]
    pub fn col(&self, j: usize) -> Slice<'_, X, M, 1, M, N>
    { self.slice::<M, 1>(0, j) }

    /// Mutably borrow column `j` as an `M`x`1` window.
    #[inline(always)]
    pub fn col_mut(&mut self, j: usize) -> SliceMut<'_, X, M, 1, M, N>
    { self.slice_mut::<M, 1>(0, j) }

    /// Overwrite row `i` with the transpose of the given column.
    #[inline]
    pub fn set_row(&mut self, i: usize, row: &Matrix<X, N, 1>)
    where X: Copy,
    { self.row_mut(i).assign(&row.t()); }

    /// Overwrite column `j` with the given column.
    #[inline]
    pub fn set_col(&mut self, j: usize, col: &Matrix<X, M, 1>)
    where X: Copy,
    { self.col_mut(j).assign(col); }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::methods_m::from_array;
    use crate::types::{Matrix, Vector};

    #[test]
    fn test_read_through_slice() {
        let m = from_array([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        let s = m.slice::<2, 2>(1, 1);
        assert_eq!(s.at(0, 0), 5);
        assert_eq!(s[(1, 1)], 9);
        assert_eq!(s.to_matrix().into_array(), [[5, 6], [8, 9]]);

        assert_eq!(m.row(1).to_matrix().into_array(), [[4, 5, 6]]);
        assert_eq!(m.col(2).to_matrix().into_array(), [[3], [6], [9]]);
    }

    #[test]
    fn test_write_through_slice() {
        let mut m: Matrix<f64, 3, 3> = Matrix::zero();
        {
            let mut row = m.row_mut(0);
            *row.at_mut(0, 1) = 2.0;
            row[(0, 2)] = 3.0;
        }
        // mutations are visible through the source; no copy was made
        assert_eq!(m[0][1], 2.0);
        assert_eq!(m[0][2], 3.0);
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let orig = from_array([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
        ]);
        let mut m = orig;
        let block: Matrix<i32, 2, 2> = m.slice::<2, 2>(1, 1).into();
        m.slice_mut::<2, 2>(1, 1).assign(&block);
        assert_eq!(m, orig);
    }

    #[test]
    fn test_set_row_set_col() {
        let mut m: Matrix<i32, 2, 3> = Matrix::zero();
        m.set_row(1, &from_array([[7], [8], [9]]));
        assert_eq!(m.into_array(), [[0, 0, 0], [7, 8, 9]]);

        // vectors coerce to their single-column matrix
        let v = Vector::from_array([4, 5]);
        m.set_col(0, &v);
        assert_eq!(m.into_array(), [[4, 0, 0], [5, 8, 9]]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_out_of_range_offset_asserts() {
        let m: Matrix<f64, 3, 3> = Matrix::zero();
        let _ = m.slice::<2, 2>(2, 0);
    }
}
