//! Positive or negative sign.

use std::ops::{Mul, Neg};

use crate::Float;

/// Positive or negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive.
    Pos,
    /// Negative.
    Neg,
}
impl Sign {
    /// Returns the sign of `x`, or `None` if `x` is zero or NaN.
    pub fn from_float(x: Float) -> Option<Self> {
        if x > 0.0 {
            Some(Sign::Pos)
        } else if x < 0.0 {
            Some(Sign::Neg)
        } else {
            None
        }
    }

    /// Returns `1.0` or `-1.0`.
    pub fn to_float(self) -> Float {
        match self {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
        }
    }

    /// Returns the character `'+'` or `'-'`.
    pub fn to_char(self) -> char {
        match self {
            Sign::Pos => '+',
            Sign::Neg => '-',
        }
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}
impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match rhs {
            Sign::Pos => self,
            Sign::Neg => -self,
        }
    }
}
impl Mul<Float> for Sign {
    type Output = Float;

    fn mul(self, rhs: Float) -> Self::Output {
        self.to_float() * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_from_float() {
        assert_eq!(Some(Sign::Pos), Sign::from_float(5.0));
        assert_eq!(Some(Sign::Neg), Sign::from_float(-0.5));
        assert_eq!(None, Sign::from_float(0.0));
        assert_eq!(None, Sign::from_float(-0.0));
        assert_eq!(None, Sign::from_float(Float::NAN));
    }

    #[test]
    fn test_sign_ops() {
        assert_eq!(Sign::Neg, -Sign::Pos);
        assert_eq!(Sign::Pos, Sign::Neg * Sign::Neg);
        assert_eq!(-3.0, Sign::Neg * 3.0);
    }
}
