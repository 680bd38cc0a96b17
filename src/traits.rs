/* ************************************************************************ **
** This file is part of statmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    /// Trait for scalars with addition and multiplication.
    ///
    /// There are lots and lots and lots and lots and lots of really cool
    /// (and sometimes useful) semiring algebras, like (or, and), and
    /// (xor, and), and (min, plus)/(max, plus)/(max, times)...
    ///
    /// But don't get excited. You get primitive floats and integers.
    /// That's all that this API is willing to commit to at the moment.
    /// This trait is sealed to avoid accidental commitments.
    pub trait Semiring : Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring : Semiring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;

    /// Trait for scalars with addition, multiplication, subtraction, and division.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It's currently just primitive, real floating point types;
    /// you'll just have to take your rationals and complex numbers elsewhere.
    pub trait Field : Ring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

// Generate the (trivial) impls of Field, Ring, and Semiring.
macro_rules! impl_semiring {
    ($($T:ty)*) => {$(
        impl Semiring for $T { }
        impl semiring::private::Sealed for $T { }
    )*};
}
macro_rules! impl_ring {
    ($($T:ty)*) => {$(
        impl Ring for $T { }
        impl ring::private::Sealed for $T { }
    )*};
}
macro_rules! impl_field {
    ($($T:ty)*) => {$(
        impl Field for $T { }
        impl field::private::Sealed for $T { }
    )*};
}

impl_semiring!{ u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64 }
impl_ring!{ i8 i16 i32 i64 isize f32 f64 }
impl_field!{ f32 f64 }

/// Internal-use helper traits for generic implementations.
///
/// These wrap the primitive operations that the container types need
/// (sqrt, abs, NaN tests, and the fixed-tolerance scalar comparison)
/// so that the rest of the crate never has to name a concrete float type.
#[doc(hidden)]
pub mod internal {
    use std::ops::{Add, Sub, Mul, Div, Neg};

    pub trait PrimitiveSemiring
        : Sized + Copy + Clone + Default
        + PartialEq + PartialOrd
        + Add<Self, Output=Self>
        + Mul<Self, Output=Self>
        + num_traits::Zero
        + num_traits::One
        + std::iter::Sum
        + std::iter::Product
    {
        fn from_uint(u: u8) -> Self;
        fn to_f64(self) -> f64;

        /// The comparison that defines `==` on the container types.
        ///
        /// Exact for integers; floats use a fixed tolerance of `1e-4`.
        fn scalar_eq(a: Self, b: Self) -> bool;
    }

    macro_rules! impl_primitive_semiring {
        (int: $($T:ty)*) => {$(
            impl PrimitiveSemiring for $T {
                #[inline(always)] fn from_uint(u: u8) -> $T { u as $T }
                #[inline(always)] fn to_f64(self) -> f64 { self as f64 }
                #[inline(always)] fn scalar_eq(a: $T, b: $T) -> bool { a == b }
            }
        )*};
        (float: $($T:ty)*) => {$(
            impl PrimitiveSemiring for $T {
                #[inline(always)] fn from_uint(u: u8) -> $T { u as $T }
                #[inline(always)] fn to_f64(self) -> f64 { self as f64 }
                #[inline(always)] fn scalar_eq(a: $T, b: $T) -> bool { (a - b).abs() < 1e-4 }
            }
        )*};
    }

    impl_primitive_semiring!{int: u8 u16 u32 u64 usize i8 i16 i32 i64 isize}
    impl_primitive_semiring!{float: f32 f64}

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + Sub<Self, Output=Self> + Neg<Output=Self>
    {
        fn from_int(i: i8) -> Self;
        fn abs(self) -> Self;
    }

    macro_rules! impl_primitive_ring {
        ($($T:ty)*) => {$(
            impl PrimitiveRing for $T {
                #[inline(always)] fn from_int(i: i8) -> $T { i as $T }
                #[inline(always)] fn abs(self) -> $T { self.abs() }
            }
        )*};
    }

    impl_primitive_ring!{ i8 i16 i32 i64 isize f32 f64 }

    pub trait PrimitiveFloat
        : PrimitiveRing
        + Div<Self, Output=Self>
    {
        fn sqrt(self) -> Self;
        fn nan() -> Self;
        fn is_nan(self) -> bool;

        /// Default threshold for [`crate::Vector::unit_or_zero_default`].
        fn unit_eps() -> Self;
    }

    macro_rules! impl_primitive_float {
        ($($T:ty)*) => {$(
            impl PrimitiveFloat for $T {
                #[inline(always)] fn sqrt(self) -> $T { self.sqrt() }
                #[inline(always)] fn nan() -> $T { <$T>::NAN }
                #[inline(always)] fn is_nan(self) -> bool { self.is_nan() }
                #[inline(always)] fn unit_eps() -> $T { 1e-5 }
            }
        )*};
    }

    impl_primitive_float!{ f32 f64 }
}
