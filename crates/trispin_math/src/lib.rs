//! Rotation and comparison primitives for a 3x3x3 twisty puzzle.

pub use {approx, cgmath};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

pub mod approx_cmp;
pub mod rotation;
pub mod sign;

pub use sign::Sign;

/// Structs, traits, and constants.
pub mod prelude {
    pub use cgmath::{
        Deg, EuclideanSpace, InnerSpace, Matrix4, Point2, Point3, Quaternion, Rad, Rotation,
        Vector2, Vector3, Zero,
    };

    pub use crate::approx_cmp::*;
    pub use crate::rotation::{rotation, rotation_matrix};
    pub use crate::sign::Sign;
    pub use crate::{EPSILON, Float};
}
pub use prelude::*;
