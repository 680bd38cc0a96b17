//! Human-readable dumps.
//!
//! `Display` renders each row as tab-prefixed cells, one row per line with a
//! trailing newline, every cell in an 8-significant-digit general float
//! format (the closest `std::fmt` equivalent of C's `%8.8g`). This string is
//! the only place in the crate that heap-allocates.

use std::fmt;

use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;
use crate::types::{Matrix, Vector};

const SIG_DIGITS: i32 = 8;

impl<X: Semiring, const M: usize, const N: usize> fmt::Display for Matrix<X, M, N>
where X: PrimitiveSemiring,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self {
            for &x in row {
                write!(f, "\t{:>8}", general(x.to_f64()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<X: Semiring, const M: usize> fmt::Display for Vector<X, M>
where X: PrimitiveSemiring,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Display::fmt(&self.0, f) }
}

/// Format with `SIG_DIGITS` significant digits, trimming trailing zeros,
/// switching to exponent notation for extreme magnitudes.
fn general(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x < 0.0 { "-inf".to_string() } else { "inf".to_string() };
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let exp = x.abs().log10().floor() as i32;
    if exp < -4 || exp >= SIG_DIGITS {
        let s = format!("{:.prec$e}", x, prec = (SIG_DIGITS - 1) as usize);
        match s.split_once('e') {
            Some((mantissa, exponent)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{}e{}", mantissa, exponent)
            }
            None => s,
        }
    } else {
        let prec = (SIG_DIGITS - 1 - exp).max(0) as usize;
        let s = format!("{:.prec$}", x, prec = prec);
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            s
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods_m::from_array;

    #[test]
    fn test_display_layout() {
        let m = from_array([[1.0, 2.5]]);
        assert_eq!(m.to_string(), "\t       1\t     2.5\n");

        let m = from_array([[1.0], [2.0]]);
        assert_eq!(m.to_string(), "\t       1\n\t       2\n");
    }

    #[test]
    fn test_eight_significant_digits() {
        let m = from_array([[1.0f64 / 3.0]]);
        assert_eq!(m.to_string(), "\t0.33333333\n");
    }

    #[test]
    fn test_general_format() {
        assert_eq!(general(0.0), "0");
        assert_eq!(general(1.0), "1");
        assert_eq!(general(-2.5), "-2.5");
        assert_eq!(general(12345678900.0), "1.2345679e10");
        assert_eq!(general(0.00001), "1e-5");
        assert_eq!(general(f64::NAN), "NaN");
        assert_eq!(general(f64::INFINITY), "inf");
    }

    #[test]
    fn test_vector_display_delegates() {
        let v = crate::vee::from_array([3.0, 4.0]);
        assert_eq!(v.to_string(), "\t       3\n\t       4\n");
    }
}
