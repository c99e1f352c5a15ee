//! Axis-angle rotations.

use cgmath::{InnerSpace, Matrix4, Quaternion, Rad, Rotation3, Vector3};

use crate::{Float, is_approx_zero};

/// Returns a rotation of `angle` around `axis`.
///
/// `axis` should be a unit vector. The angle may be given in [`cgmath::Deg`]
/// or [`Rad`]. The result is undefined for a zero-length axis.
pub fn rotation(axis: Vector3<Float>, angle: impl Into<Rad<Float>>) -> Quaternion<Float> {
    if is_approx_zero(axis.magnitude2()) {
        debug_panic!("rotation axis must be nonzero, got {axis:?}");
    }
    Quaternion::from_axis_angle(axis, angle)
}

/// Returns a rotation of `angle` around `axis` as a homogeneous 4x4 matrix,
/// which can be composed directly with cubie transforms.
///
/// See [`rotation()`].
pub fn rotation_matrix(axis: Vector3<Float>, angle: impl Into<Rad<Float>>) -> Matrix4<Float> {
    Matrix4::from(rotation(axis, angle))
}
