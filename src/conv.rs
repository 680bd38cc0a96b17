/* ************************************************************************ **
** This file is part of statmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Conversions between matrices, plain arrays, and flat buffers.

use slice_of_array::prelude::*;

use crate::methods_m::from_fn;
use crate::types::Matrix;

// ---------------------------------------------------------------------------

impl<X, const M: usize, const N: usize> Matrix<X, M, N> {
    /// Build a matrix by copying `M * N` elements out of a flat,
    /// row-major buffer.
    ///
    /// Panics if `data` is not exactly `M * N` elements long.
    #[inline]
    pub fn from_row_major(data: &[X]) -> Self
    where X: Copy,
    {
        assert_eq!(data.len(), M * N, "flat buffer length does not match shape");
        from_fn(|i, j| data[i * N + j])
    }

    /// Copy all elements out, row-major.
    ///
    /// Panics if `dst` is not exactly `M * N` elements long.
    #[inline]
    pub fn copy_to(&self, dst: &mut [X])
    where X: Copy,
    { dst.copy_from_slice(self.0.flat()) }

    /// Copy all elements out, column-major.
    ///
    /// This is a genuinely different operation from `copy_to`, not a
    /// convenience alias; internal storage stays row-major either way.
    ///
    /// Panics if `dst` is not exactly `M * N` elements long.
    #[inline]
    pub fn copy_to_column_major(&self, dst: &mut [X])
    where X: Copy,
    {
        assert_eq!(dst.len(), M * N, "flat buffer length does not match shape");
        for i in 0..M {
            for j in 0..N {
                dst[i + j * M] = self[i][j];
            }
        }
    }

    /// Cast into a plain `[[X; N]; M]`.
    #[inline(always)]
    pub fn into_array(self) -> [[X; N]; M]
    { self.0 }

    /// Cast into a plain `&[[X; N]; M]`.
    #[inline(always)]
    pub fn as_array(&self) -> &[[X; N]; M]
    { &self.0 }

    /// Cast into a plain `&mut [[X; N]; M]`.
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [[X; N]; M]
    { &mut self.0 }
}

impl<X, const M: usize, const N: usize> From<[[X; N]; M]> for Matrix<X, M, N> {
    #[inline(always)]
    fn from(arr: [[X; N]; M]) -> Self
    { Matrix(arr) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::methods_m::from_array;
    use crate::types::Matrix;

    #[test]
    fn test_flat_round_trip() {
        let data = [0.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0];
        let m: Matrix<f64, 3, 3> = Matrix::from_row_major(&data);
        assert_eq!(m[2][0], 7.0);

        let mut out = [0.0; 9];
        m.copy_to(&mut out);
        assert_eq!(out, data);
    }

    #[test]
    fn test_column_major_discriminates_layout() {
        // symmetric matrices can't tell the layouts apart; this one can
        let m = from_array([
            [1, 2],
            [3, 4],
        ]);
        let mut row_major = [0; 4];
        let mut col_major = [0; 4];
        m.copy_to(&mut row_major);
        m.copy_to_column_major(&mut col_major);
        assert_eq!(row_major, [1, 2, 3, 4]);
        assert_eq!(col_major, [1, 3, 2, 4]);

        // ...while the 2x2 identity happens to agree in both layouts
        let eye = Matrix::<i32, 2, 2>::eye();
        eye.copy_to_column_major(&mut col_major);
        assert_eq!(col_major, [1, 0, 0, 1]);
    }

    #[test]
    #[should_panic]
    fn test_bad_flat_length() {
        let _: Matrix<f64, 2, 2> = Matrix::from_row_major(&[1.0, 2.0, 3.0]);
    }
}
