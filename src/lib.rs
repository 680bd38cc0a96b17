/* ************************************************************************ **
** This file is part of statmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-dimension dense matrices and column vectors for allocation-free
//! numerics.
//!
//! Every shape is part of the type (`Matrix<f32, 3, 3>`, `Vector<f32, 4>`),
//! so dimension mismatches are compile errors and all storage lives on the
//! stack.  [`Slice`] and [`SliceMut`] are non-owning rectangular windows for
//! reading or writing a region of a matrix in place.
//!
//! `PartialEq` on these types is approximate by design (fixed absolute
//! epsilon for floats, exact for integers); see the crate-level docs on
//! [`is_equal`] for the rationale.

#[cfg(test)]
#[macro_use]
extern crate statmat_assert_close;

pub use crate::types::{Matrix, Vector};
pub use crate::slice::{Slice, SliceMut};
pub use crate::traits::{Semiring, Ring, Field};
pub use crate::methods_m::is_equal;

mod types;
mod traits;
mod methods_m;
mod methods_v;
mod slice;
mod ops;
mod conv;
mod fmt;

/// Free functions that operate on matrices.
pub mod mat {
    pub use crate::methods_m::{from_fn, from_array, zero, ones, nans, eye, is_equal};
}

/// Free functions that operate on vectors.
pub mod vee {
    pub use crate::methods_v::{from_fn, from_array, zero, dot};
}
