/* ************************************************************************ **
** This file is part of statmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;

// ---------------------------------------------------------------------------

/// A dense matrix with row-major storage and a shape fixed by its type.
///
/// The backing storage is a plain `[[X; N]; M]` (one inner array per row),
/// reachable through `Deref`; element access is simply `m[i][j]`.
/// Out-of-range indices panic, the same way they would on the raw arrays.
#[derive(Copy, Clone)]
pub struct Matrix<X, const M: usize, const N: usize>(pub [[X; N]; M]);

/// A column vector; a single-column [`Matrix`] with vector semantics on top.
///
/// This is deliberately a wrapper rather than an alias: the matrix inside is
/// reachable through `Deref` (so all matrix operations delegate), but turning
/// a `Matrix<X, M, 1>` into a `Vector` (or back) is an explicit `From`
/// conversion.
#[derive(Copy, Clone)]
pub struct Vector<X, const M: usize>(pub Matrix<X, M, 1>);

// ---------------------------------------------------------------------------
// Matrix behaves generally like its backing array type.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

impl<X, const M: usize, const N: usize> Deref for Matrix<X, M, N> {
    type Target = [[X; N]; M];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<X, const M: usize, const N: usize> DerefMut for Matrix<X, M, N> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// Fix a paper cut not solved by Deref, which is that many methods
// take `I: IntoIterator`.
impl<'a, X, const M: usize, const N: usize> IntoIterator for &'a Matrix<X, M, N> {
    type Item = &'a [X; N];
    type IntoIter = Iter<'a, [X; N]>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, X, const M: usize, const N: usize> IntoIterator for &'a mut Matrix<X, M, N> {
    type Item = &'a mut [X; N];
    type IntoIter = IterMut<'a, [X; N]>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

// forward the debug impl without a surrounding "Matrix(...)", for somewhat
// selfish reasons (it makes the debug output valid JSON and Python for
// many types, significantly lowering the barrier to some common tasks
// during debugging)
impl<X: fmt::Debug, const M: usize, const N: usize> fmt::Debug for Matrix<X, M, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<X: Semiring, const M: usize, const N: usize> Default for Matrix<X, M, N>
where X: PrimitiveSemiring,
{
    /// The all-zero matrix.
    #[inline]
    fn default() -> Self
    { crate::methods_m::zero() }
}

// ---------------------------------------------------------------------------
// Vector delegates to the single-column matrix it wraps.

impl<X, const M: usize> Deref for Vector<X, M> {
    type Target = Matrix<X, M, 1>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<X, const M: usize> DerefMut for Vector<X, M> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl<X: fmt::Debug, const M: usize> fmt::Debug for Vector<X, M> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<X: Semiring, const M: usize> Default for Vector<X, M>
where X: PrimitiveSemiring,
{
    #[inline]
    fn default() -> Self
    { Vector(Default::default()) }
}

impl<X, const M: usize> From<Matrix<X, M, 1>> for Vector<X, M> {
    #[inline(always)]
    fn from(column: Matrix<X, M, 1>) -> Self
    { Vector(column) }
}

impl<X, const M: usize> From<Vector<X, M>> for Matrix<X, M, 1> {
    #[inline(always)]
    fn from(v: Vector<X, M>) -> Self
    { v.0 }
}

// ---------------------------------------------------------------------------
// serde support (optional)
//
// These are written by hand because serde's array impls do not cover
// arbitrary const-generic lengths.  A matrix is a sequence of rows;
// shape mismatches on input become data errors, not panics.

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Matrix, Vector};

    use std::convert::TryInto;

    use serde::{Serialize, Serializer, Deserialize, Deserializer};
    use serde::ser::SerializeSeq;
    use serde::de::Error;

    impl<X: Serialize, const M: usize, const N: usize> Serialize for Matrix<X, M, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(M))?;
            for row in self {
                seq.serialize_element(&row[..])?;
            }
            seq.end()
        }
    }

    impl<'de, X, const M: usize, const N: usize> Deserialize<'de> for Matrix<X, M, N>
    where X: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let rows: Vec<Vec<X>> = Deserialize::deserialize(deserializer)?;
            let mut out = Vec::with_capacity(M);
            for row in rows {
                let row: [X; N] = row.try_into().map_err(|bad: Vec<X>| {
                    D::Error::custom(format_args!(
                        "expected a row of length {}, got {}", N, bad.len(),
                    ))
                })?;
                out.push(row);
            }
            let arr: [[X; N]; M] = out.try_into().map_err(|bad: Vec<[X; N]>| {
                D::Error::custom(format_args!(
                    "expected {} rows, got {}", M, bad.len(),
                ))
            })?;
            Ok(Matrix(arr))
        }
    }

    impl<X: Serialize, const M: usize> Serialize for Vector<X, M> {
        #[inline]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
        { self.0.serialize(serializer) }
    }

    impl<'de, X, const M: usize> Deserialize<'de> for Vector<X, M>
    where X: Deserialize<'de>,
    {
        #[inline]
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>
        { Ok(Vector(Deserialize::deserialize(deserializer)?)) }
    }
}
