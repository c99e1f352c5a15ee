//! Geometric selection of cubies.
//!
//! Selection always works from current cubie positions, so it stays correct
//! after the whole puzzle has been reoriented by any amount.

use cgmath::{InnerSpace, Vector3};
use trispin_math::{Float, Sign};

use crate::{CubeModel, CubieId};

/// Minimum dot product between a cubie's normalized position and a turn axis
/// for the cubie to be part of the turning layer.
///
/// Middle-slice cubies have a dot product of zero with an aligned axis. The
/// smallest in the outer layer is 1/sqrt(3).
pub const LAYER_THRESHOLD: Float = 0.1;

/// Returns the cubies in the outer layer perpendicular to `axis`.
///
/// For a 3x3x3 and an axis from [`select_closest_center()`], this is always
/// exactly 9 cubies.
pub fn select_layer(cube: &CubeModel, axis: Vector3<Float>) -> Vec<CubieId> {
    select_where(cube, axis, |dot| dot > LAYER_THRESHOLD)
}

/// Returns the cubies strictly on the positive side of the plane
/// perpendicular to `axis`.
///
/// This is a disambiguation test only. Use [`select_layer()`] to build the
/// set of cubies for a turn.
pub fn select_side(cube: &CubeModel, axis: Vector3<Float>) -> Vec<CubieId> {
    cube.cubies()
        .filter(|(_, cubie)| side_of(cubie.position, axis) == Some(Sign::Pos))
        .map(|(id, _)| id)
        .collect()
}

/// Returns which side of the plane perpendicular to `axis` a position lies
/// on, or `None` if it is on the plane or at the origin.
pub fn side_of(position: Vector3<Float>, axis: Vector3<Float>) -> Option<Sign> {
    Sign::from_float(normalized_dot(position, axis)?)
}

fn select_where(
    cube: &CubeModel,
    axis: Vector3<Float>,
    mut predicate: impl FnMut(Float) -> bool,
) -> Vec<CubieId> {
    cube.cubies()
        .filter(|(_, cubie)| normalized_dot(cubie.position, axis).is_some_and(&mut predicate))
        .map(|(id, _)| id)
        .collect()
}

/// Returns the face-center cubie whose current direction from the origin is
/// closest to `direction`.
///
/// Ties go to the face center that comes first. Returns `None` only if no dot
/// product is comparable, such as when `direction` contains NaN.
pub fn select_closest_center(cube: &CubeModel, direction: Vector3<Float>) -> Option<CubieId> {
    let mut best = None;
    let mut max_dot = Float::NEG_INFINITY;
    for &id in cube.face_centers() {
        let Some(dot) = normalized_dot(cube.cubie(id).position, direction) else {
            continue;
        };
        // Strictly greater, so that the first maximum wins.
        if dot > max_dot {
            best = Some(id);
            max_dot = dot;
        }
    }
    best
}

/// Returns the dot product of `axis` with the normalized `position`, or
/// `None` if the position is at the origin.
fn normalized_dot(position: Vector3<Float>, axis: Vector3<Float>) -> Option<Float> {
    let mag = position.magnitude();
    (mag > 0.0).then(|| (position / mag).dot(axis))
}
