// NOTE: Operator impls are deliberately between same-scalar containers,
//       rather than e.g. Matrix<T> and Matrix<U> where T: Add<U>.
//
//       The reason for this is that having such generic bounds
//       tends to influence the design of the rest of the library
//       towards a design that is actually impossible to implement.

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};

use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::types::{Matrix, Vector};
use crate::{mat, vee};

// ---------------------------------------------------------------------------
// equality
//
// Equality is approximate by design: float scalars compare within the fixed
// tolerance of `scalar_eq` (integers compare exactly). This is the only
// definition of `==` the library has; there is no exact variant.

impl<X: Semiring, const M: usize, const N: usize> PartialEq for Matrix<X, M, N>
where X: PrimitiveSemiring,
{
    fn eq(&self, other: &Self) -> bool {
        self.into_iter().zip(other).all(|(a, b)| {
            a.iter().zip(b.iter()).all(|(&x, &y)| X::scalar_eq(x, y))
        })
    }
}

impl<X: Semiring, const M: usize> PartialEq for Vector<X, M>
where X: PrimitiveSemiring,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool
    { self.0 == other.0 }
}

// ---------------------------------------------------------------------------
// matrix-matrix elementwise ops

macro_rules! impl_m_add_sub {
    (
        [ $($lt_a:lifetime,)? ] [ $($ref_a:tt)* ]
        [ $($lt_b:lifetime,)? ] [ $($ref_b:tt)* ]
    ) => {
        // matrix + matrix
        impl<$($lt_a,)? $($lt_b,)? X: Semiring, const M: usize, const N: usize>
        Add<$($ref_b)* Matrix<X, M, N>> for $($ref_a)* Matrix<X, M, N>
        where X: PrimitiveSemiring,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<X, M, N>) -> Self::Output
            { mat::from_fn(|i, j| self[i][j] + other[i][j]) }
        }

        // matrix - matrix
        impl<$($lt_a,)? $($lt_b,)? X: Ring, const M: usize, const N: usize>
        Sub<$($ref_b)* Matrix<X, M, N>> for $($ref_a)* Matrix<X, M, N>
        where X: PrimitiveRing,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<X, M, N>) -> Self::Output
            { mat::from_fn(|i, j| self[i][j] - other[i][j]) }
        }
    };
}

impl_m_add_sub!{ [] [] [] [] }
impl_m_add_sub!{ [] [] ['b,] [&'b] }
impl_m_add_sub!{ ['a,] [&'a] [] [] }
impl_m_add_sub!{ ['a,] [&'a] ['b,] [&'b] }

// ---------------------------------------------------------------------------
// matrix unary ops

macro_rules! impl_m_neg {
    ( [ $($lt_a:lifetime,)? ] [ $($ref_a:tt)* ] ) => {
        // -matrix
        impl<$($lt_a,)? X: Ring, const M: usize, const N: usize>
        Neg for $($ref_a)* Matrix<X, M, N>
        where X: PrimitiveRing,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn neg(self) -> Self::Output
            { mat::from_fn(|i, j| -self[i][j]) }
        }
    };
}

impl_m_neg!{ [] [] }
impl_m_neg!{ ['a,] [&'a] }

// ---------------------------------------------------------------------------
// matrix-scalar ops

macro_rules! impl_m_scalar_ops {
    ( [ $($lt_a:lifetime,)? ] [ $($ref_a:tt)* ] ) => {
        // matrix * scalar
        impl<$($lt_a,)? X: Semiring, const M: usize, const N: usize>
        Mul<X> for $($ref_a)* Matrix<X, M, N>
        where X: PrimitiveSemiring,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { mat::from_fn(|i, j| self[i][j] * scalar) }
        }

        // matrix / scalar
        //
        // Deliberately implemented as multiplication by the reciprocal, not
        // per-element division; the last-bit rounding of the two is not the
        // same and downstream consumers depend on this one.
        impl<$($lt_a,)? X: Field, const M: usize, const N: usize>
        Div<X> for $($ref_a)* Matrix<X, M, N>
        where X: PrimitiveFloat,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output {
                let recip = X::one() / scalar;
                mat::from_fn(|i, j| self[i][j] * recip)
            }
        }

        // matrix + scalar (broadcast)
        impl<$($lt_a,)? X: Semiring, const M: usize, const N: usize>
        Add<X> for $($ref_a)* Matrix<X, M, N>
        where X: PrimitiveSemiring,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn add(self, scalar: X) -> Self::Output
            { mat::from_fn(|i, j| self[i][j] + scalar) }
        }

        // matrix - scalar, as addition of the negation
        impl<$($lt_a,)? X: Ring, const M: usize, const N: usize>
        Sub<X> for $($ref_a)* Matrix<X, M, N>
        where X: PrimitiveRing,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn sub(self, scalar: X) -> Self::Output
            { mat::from_fn(|i, j| self[i][j] + (-scalar)) }
        }
    };
}

impl_m_scalar_ops!{ [] [] }
impl_m_scalar_ops!{ ['a,] [&'a] }

// scalar * matrix, scalar * vector
//
// NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
//       we must generate a separate impl for each Semiring type rather
//       than being generic over X: Semiring
macro_rules! impl_scalar_on_left {
    ($($X:ty)*) => {$(
        impl<const M: usize, const N: usize> Mul<Matrix<$X, M, N>> for $X {
            type Output = Matrix<$X, M, N>;

            #[inline(always)]
            fn mul(self, matrix: Matrix<$X, M, N>) -> Self::Output
            { matrix * self }
        }

        impl<'a, const M: usize, const N: usize> Mul<&'a Matrix<$X, M, N>> for $X {
            type Output = Matrix<$X, M, N>;

            #[inline(always)]
            fn mul(self, matrix: &'a Matrix<$X, M, N>) -> Self::Output
            { matrix * self }
        }

        impl<const M: usize> Mul<Vector<$X, M>> for $X {
            type Output = Vector<$X, M>;

            #[inline(always)]
            fn mul(self, vector: Vector<$X, M>) -> Self::Output
            { vector * self }
        }

        impl<'a, const M: usize> Mul<&'a Vector<$X, M>> for $X {
            type Output = Vector<$X, M>;

            #[inline(always)]
            fn mul(self, vector: &'a Vector<$X, M>) -> Self::Output
            { vector * self }
        }
    )*};
}

impl_scalar_on_left!{ u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64 }

// ---------------------------------------------------------------------------
// matrix product
//
// This instantiates an impl for every required shape triple, but in exchange
// the inner dimension is checked at compile time. Each output element sums
// its reduction index in ascending order; keep it that way, float rounding
// reproducibility depends on it.

macro_rules! impl_m_mul_m {
    (
        [ $($lt_a:lifetime,)? ] [ $($ref_a:tt)* ]
        [ $($lt_b:lifetime,)? ] [ $($ref_b:tt)* ]
    ) => {
        // matrix * matrix
        impl<$($lt_a,)? $($lt_b,)? X: Semiring, const M: usize, const N: usize, const P: usize>
        Mul<$($ref_b)* Matrix<X, N, P>> for $($ref_a)* Matrix<X, M, N>
        where X: PrimitiveSemiring,
        {
            type Output = Matrix<X, M, P>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<X, N, P>) -> Self::Output
            { mat::from_fn(|r, c| (0..N).map(|k| self[r][k] * other[k][c]).sum()) }
        }
    };
}

impl_m_mul_m!{ [] [] [] [] }
impl_m_mul_m!{ [] [] ['b,] [&'b] }
impl_m_mul_m!{ ['a,] [&'a] [] [] }
impl_m_mul_m!{ ['a,] [&'a] ['b,] [&'b] }

// matrix * column vector
macro_rules! impl_m_mul_v {
    (
        [ $($lt_a:lifetime,)? ] [ $($ref_a:tt)* ]
        [ $($lt_b:lifetime,)? ] [ $($ref_b:tt)* ]
    ) => {
        impl<$($lt_a,)? $($lt_b,)? X: Semiring, const M: usize, const N: usize>
        Mul<$($ref_b)* Vector<X, N>> for $($ref_a)* Matrix<X, M, N>
        where X: PrimitiveSemiring,
        {
            type Output = Vector<X, M>;

            #[inline]
            fn mul(self, other: $($ref_b)* Vector<X, N>) -> Self::Output
            { vee::from_fn(|r| (0..N).map(|k| self[r][k] * other[k]).sum()) }
        }
    };
}

impl_m_mul_v!{ [] [] [] [] }
impl_m_mul_v!{ [] [] ['b,] [&'b] }
impl_m_mul_v!{ ['a,] [&'a] [] [] }
impl_m_mul_v!{ ['a,] [&'a] ['b,] [&'b] }

// ---------------------------------------------------------------------------
// vector ops, delegating to the matrix layer

macro_rules! impl_v_add_sub {
    (
        [ $($lt_a:lifetime,)? ] [ $($ref_a:tt)* ]
        [ $($lt_b:lifetime,)? ] [ $($ref_b:tt)* ]
    ) => {
        // vector + vector
        impl<$($lt_a,)? $($lt_b,)? X: Semiring, const M: usize>
        Add<$($ref_b)* Vector<X, M>> for $($ref_a)* Vector<X, M>
        where X: PrimitiveSemiring,
        {
            type Output = Vector<X, M>;

            #[inline]
            fn add(self, other: $($ref_b)* Vector<X, M>) -> Self::Output
            { Vector(&self.0 + &other.0) }
        }

        // vector - vector
        impl<$($lt_a,)? $($lt_b,)? X: Ring, const M: usize>
        Sub<$($ref_b)* Vector<X, M>> for $($ref_a)* Vector<X, M>
        where X: PrimitiveRing,
        {
            type Output = Vector<X, M>;

            #[inline]
            fn sub(self, other: $($ref_b)* Vector<X, M>) -> Self::Output
            { Vector(&self.0 - &other.0) }
        }
    };
}

impl_v_add_sub!{ [] [] [] [] }
impl_v_add_sub!{ [] [] ['b,] [&'b] }
impl_v_add_sub!{ ['a,] [&'a] [] [] }
impl_v_add_sub!{ ['a,] [&'a] ['b,] [&'b] }

macro_rules! impl_v_unops_scalar_ops {
    ( [ $($lt_a:lifetime,)? ] [ $($ref_a:tt)* ] ) => {
        // -vector
        impl<$($lt_a,)? X: Ring, const M: usize> Neg for $($ref_a)* Vector<X, M>
        where X: PrimitiveRing,
        {
            type Output = Vector<X, M>;

            #[inline]
            fn neg(self) -> Self::Output
            { Vector(-&self.0) }
        }

        // vector * scalar
        impl<$($lt_a,)? X: Semiring, const M: usize> Mul<X> for $($ref_a)* Vector<X, M>
        where X: PrimitiveSemiring,
        {
            type Output = Vector<X, M>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { Vector(&self.0 * scalar) }
        }

        // vector / scalar (reciprocal-multiply, via the matrix impl)
        impl<$($lt_a,)? X: Field, const M: usize> Div<X> for $($ref_a)* Vector<X, M>
        where X: PrimitiveFloat,
        {
            type Output = Vector<X, M>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { Vector(&self.0 / scalar) }
        }
    };
}

impl_v_unops_scalar_ops!{ [] [] }
impl_v_unops_scalar_ops!{ ['a,] [&'a] }

// ---------------------------------------------------------------------------
// assign ops (general)
//
// All of these compute into a temporary and then replace self, so a
// self-aliasing `m *= m` cannot observe a half-written operand.

macro_rules! impl_assign_ops {
    ( $Container:ident [ $($param:tt)* ] [ $($arg:tt)* ] ) => {
        // container += container / scalar
        impl<X, B, $($param)*> AddAssign<B> for $Container<X, $($arg)*>
        where for<'a> &'a Self: Add<B, Output=Self>,
        {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = &*self + rhs; }
        }

        // container -= container / scalar
        impl<X, B, $($param)*> SubAssign<B> for $Container<X, $($arg)*>
        where for<'a> &'a Self: Sub<B, Output=Self>,
        {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = &*self - rhs; }
        }

        // container *= scalar;
        // matrix *= square matrix (the one shape assignment can express)
        impl<X, B, $($param)*> MulAssign<B> for $Container<X, $($arg)*>
        where for<'a> &'a Self: Mul<B, Output=Self>,
        {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = &*self * rhs; }
        }

        // container /= scalar
        impl<X, B, $($param)*> DivAssign<B> for $Container<X, $($arg)*>
        where for<'a> &'a Self: Div<B, Output=Self>,
        {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B)
            { *self = &*self / rhs; }
        }
    };
}

impl_assign_ops!{ Matrix [ const M: usize, const N: usize ] [ M, N ] }
impl_assign_ops!{ Vector [ const M: usize ] [ M ] }

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::mat::{self, from_array};
    use crate::types::{Matrix, Vector};
    use crate::vee;

    fn random_matrix<const M: usize, const N: usize>() -> Matrix<f64, M, N>
    { mat::from_fn(|_, _| rand::random::<f64>() * 2.0 - 1.0) }

    #[test]
    fn test_additive_identities() {
        for _ in 0..10 {
            let a: Matrix<f64, 3, 4> = random_matrix();
            assert_eq!(&a + Matrix::zero(), a);
            assert_eq!(&a - &a, Matrix::zero());
            assert_eq!(a.t().t(), a);
        }
    }

    #[test]
    fn test_matrix_product() {
        let a = from_array([
            [1.0, 2.0],
            [3.0, 4.0],
            [5.0, 6.0],
        ]);
        let b = from_array([
            [1.0, 0.0, 1.0],
            [0.0, 2.0, 1.0],
        ]);
        let ab: Matrix<f64, 3, 3> = &a * &b;
        assert_eq!(ab.into_array(), [
            [1.0, 4.0, 3.0],
            [3.0, 8.0, 7.0],
            [5.0, 12.0, 11.0],
        ]);

        let eye = Matrix::<f64, 2, 2>::eye();
        assert_eq!(&a * &eye, a);
    }

    #[test]
    fn test_product_associativity() {
        for _ in 0..10 {
            let a: Matrix<f64, 2, 3> = random_matrix();
            let b: Matrix<f64, 3, 4> = random_matrix();
            let c: Matrix<f64, 4, 2> = random_matrix();
            // exact only when rounding paths coincide, hence the tolerance
            assert_close!(rel=1e-9, abs=1e-12,
                ((&a * &b) * &c).into_array(),
                (&a * (&b * &c)).into_array());
        }
    }

    #[test]
    fn test_matrix_vector_product() {
        let m = from_array([
            [1.0, 2.0],
            [3.0, 4.0],
        ]);
        let v = vee::from_array([1.0, 10.0]);
        assert_eq!((&m * &v).into_array(), [21.0, 43.0]);
    }

    #[test]
    fn test_scalar_ops() {
        let a = from_array([[1.0, -2.0], [0.5, 4.0]]);
        assert_eq!((&a * 2.0).into_array(), [[2.0, -4.0], [1.0, 8.0]]);
        assert_eq!(2.0 * &a, &a * 2.0);
        assert_eq!((&a + 1.0).into_array(), [[2.0, -1.0], [1.5, 5.0]]);
        assert_eq!((&a - 1.0).into_array(), [[0.0, -3.0], [-0.5, 3.0]]);
        assert_eq!((-&a).into_array(), [[-1.0, 2.0], [-0.5, -4.0]]);
    }

    #[test]
    fn test_scalar_mul_div_round_trip() {
        for _ in 0..10 {
            let a: Matrix<f64, 3, 3> = random_matrix();
            let s = 3.7;
            assert_eq!((&a * s) / s, a);
        }
    }

    #[test]
    fn test_assign_ops() {
        let mut m = from_array([[1.0, 2.0], [3.0, 4.0]]);
        m += from_array([[1.0, 1.0], [1.0, 1.0]]);
        assert_eq!(m.into_array(), [[2.0, 3.0], [4.0, 5.0]]);
        m -= from_array([[2.0, 3.0], [4.0, 5.0]]);
        assert_eq!(m, Matrix::zero());

        let mut m = from_array([[1.0, 2.0], [3.0, 4.0]]);
        m *= 2.0;
        assert_eq!(m.into_array(), [[2.0, 4.0], [6.0, 8.0]]);
        m /= 2.0;
        assert_eq!(m.into_array(), [[1.0, 2.0], [3.0, 4.0]]);
        m += 1.0;
        assert_eq!(m.into_array(), [[2.0, 3.0], [4.0, 5.0]]);
        m -= 1.0;
        assert_eq!(m.into_array(), [[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_mul_assign_is_aliasing_safe() {
        let a = from_array([[1.0, 2.0], [3.0, 4.0]]);
        let mut m = a;
        m *= a;
        assert_eq!(m, &a * &a);
    }

    #[test]
    fn test_fixed_tolerance_equality() {
        let a = from_array([[1.0f64]]);
        assert!(a == from_array([[1.00005]]));
        assert!(a != from_array([[1.001]]));

        // integers compare exactly
        let b = from_array([[1, 2]]);
        assert!(b == from_array([[1, 2]]));
        assert!(b != from_array([[1, 3]]));
    }

    #[test]
    fn test_vector_ops_delegate() {
        let v = vee::from_array([1.0, -2.0]);
        let w = vee::from_array([3.0, 1.0]);
        assert_eq!((&v + &w).into_array(), [4.0, -1.0]);
        assert_eq!((&v - &w).into_array(), [-2.0, -3.0]);
        assert_eq!((-&v).into_array(), [-1.0, 2.0]);
        assert_eq!((&v * 2.0).into_array(), [2.0, -4.0]);
        assert_eq!(2.0 * &v, &v * 2.0);
        assert_eq!((&v / 2.0).into_array(), [0.5, -1.0]);

        let mut u = v;
        u += w;
        assert_eq!(u.into_array(), [4.0, -1.0]);
        u *= 2.0;
        assert_eq!(u.into_array(), [8.0, -2.0]);
    }
}
