//! Approximate comparison functions that automatically use [`EPSILON`].

pub use approx::AbsDiffEq;

use crate::{EPSILON, Float};

/// Compares two values, but considers them equal if they are separated by
/// less than `EPSILON`.
///
/// Handles infinity specially.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float> + PartialEq>(a: &T, b: &T) -> bool {
    // use native float equality to handle infinities
    a == b || approx::abs_diff_eq!(a, b, epsilon = EPSILON)
}

/// Returns whether `x` has an absolute value no greater than `EPSILON`.
pub fn is_approx_zero(x: Float) -> bool {
    approx_eq(&x, &0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_zero() {
        assert!(is_approx_zero(0.0));
        assert!(is_approx_zero(-0.0));
        assert!(is_approx_zero(EPSILON / 2.0));
        assert!(!is_approx_zero(0.001));
        assert!(!is_approx_zero(Float::NAN));
    }

    #[test]
    fn test_approx_eq_infinity() {
        assert!(approx_eq(&Float::INFINITY, &Float::INFINITY));
        assert!(!approx_eq(&Float::INFINITY, &Float::NEG_INFINITY));
    }
}
