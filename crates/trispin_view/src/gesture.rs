use cgmath::{Deg, EuclideanSpace, InnerSpace, Point2, Quaternion, Vector2, Vector3};
use trispin_math::{Float, Sign, is_approx_zero, rotation};
use trispin_puzzle::{Face, side_of};

use crate::PickHit;

/// Request to turn the layer nearest to an axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TurnCommand {
    /// Approximate turn axis. It is snapped to the nearest face center before
    /// turning.
    pub axis: Vector3<Float>,
    /// Direction of the turn around `axis`.
    pub direction: Sign,
}

/// State of the pointer between pointer-down and pointer-up.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum GestureState {
    /// The pointer is not pressed.
    #[default]
    Idle,
    /// The pointer was pressed off the puzzle, so dragging rotates the whole
    /// puzzle.
    Orbit {
        /// Pointer position at the last event, in pixels.
        last_pos: Point2<Float>,
    },
    /// The pointer was pressed on a cubie, so releasing may turn a face.
    OnCube {
        /// What was under the pointer when it was pressed.
        hit: PickHit,
        /// Pointer position at the last event, in pixels.
        last_pos: Point2<Float>,
        /// Total pointer movement since it was pressed, in pixels.
        drag_delta: Vector2<Float>,
    },
}

/// Keeps only the larger component of a screen-space drag, as a 3D vector.
///
/// The smaller component is assumed to be unintentional.
pub fn project_drag(delta: Vector2<Float>) -> Vector3<Float> {
    if delta.x.abs() > delta.y.abs() {
        Vector3::new(delta.x, 0.0, 0.0)
    } else {
        Vector3::new(0.0, delta.y, 0.0)
    }
}

/// Returns the turn direction implied by a projected drag around a turn
/// axis, or `None` if the drag is zero.
///
/// Clockwise and counterclockwise are visually reversed for the Right and
/// Down faces, so the direction is flipped for axes that point that way.
pub fn turn_direction(projected: Vector3<Float>, axis: Vector3<Float>) -> Option<Sign> {
    let sign = if projected.x == 0.0 {
        -Sign::from_float(projected.y)?
    } else {
        Sign::from_float(projected.x)?
    };
    if axis.x > 0.0 || axis.y < 0.0 {
        Some(-sign)
    } else {
        Some(sign)
    }
}

/// Resolves a drag that started on a cubie into a turn, or `None` if the drag
/// does not imply one.
pub fn resolve_turn(hit: &PickHit, drag_delta: Vector2<Float>) -> Option<TurnCommand> {
    let projected = project_drag(drag_delta);

    // The struck face crossed with the drag direction.
    let cross = hit.face_normal.cross(projected);
    if is_approx_zero(cross.magnitude2()) {
        log::trace!("drag {drag_delta:?} is parallel to face normal; no turn");
        return None;
    }
    let mut axis = cross.normalize();

    // The cross product can point at either of two opposite faces; the side
    // that was clicked decides which.
    if side_of(hit.point.to_vec(), axis) == Some(Sign::Neg) {
        axis = -axis;
    }

    let Some(direction) = turn_direction(projected, axis) else {
        log::trace!("zero drag; no turn");
        return None;
    };
    Some(TurnCommand { axis, direction })
}

/// Returns the whole-puzzle rotation for a pointer movement of `delta`
/// pixels, with `sensitivity` degrees per pixel.
///
/// Horizontal movement rotates around world Up and vertical movement
/// rotates around world Right. The Up rotation is applied first.
pub fn orbit_rotation(delta: Vector2<Float>, sensitivity: Float) -> Quaternion<Float> {
    let horizontal = rotation(Face::Up.axis(), Deg(delta.x * sensitivity));
    let vertical = rotation(Face::Right.axis(), Deg(delta.y * sensitivity));
    vertical * horizontal
}

#[cfg(test)]
mod tests {
    use cgmath::{Point3, Rotation};
    use trispin_math::assert_approx_eq;
    use trispin_puzzle::CubieId;

    use super::*;

    fn hit(face_normal: Vector3<Float>, point: Point3<Float>) -> PickHit {
        PickHit {
            cubie: CubieId(0),
            face_normal,
            point,
        }
    }

    #[test]
    fn test_project_drag() {
        assert_eq!(Vector3::new(5.0, 0.0, 0.0), project_drag(Vector2::new(5.0, -2.0)));
        assert_eq!(Vector3::new(0.0, -7.0, 0.0), project_drag(Vector2::new(3.0, -7.0)));
        // Ties go to vertical.
        assert_eq!(Vector3::new(0.0, 4.0, 0.0), project_drag(Vector2::new(4.0, 4.0)));
    }

    #[test]
    fn test_turn_direction_right_left_parity() {
        let projected = project_drag(Vector2::new(5.0, 0.0));
        let right = turn_direction(projected, Face::Right.axis()).unwrap();
        let left = turn_direction(projected, Face::Left.axis()).unwrap();
        assert_eq!(-left, right);

        let projected = project_drag(Vector2::new(0.0, 5.0));
        let down = turn_direction(projected, Face::Down.axis()).unwrap();
        let up = turn_direction(projected, Face::Up.axis()).unwrap();
        assert_eq!(-up, down);
    }

    #[test]
    fn test_turn_direction_zero_drag() {
        let projected = project_drag(Vector2::new(0.0, 0.0));
        assert_eq!(None, turn_direction(projected, Face::Front.axis()));
    }

    #[test]
    fn test_resolve_turn_zero_drag() {
        let h = hit(Face::Front.axis(), Point3::new(3.25, 3.25, 4.75));
        assert_eq!(None, resolve_turn(&h, Vector2::new(0.0, 0.0)));
    }

    #[test]
    fn test_resolve_turn_flips_to_clicked_side() {
        // Dragging down the front face crosses to -X or +X depending on
        // which column was clicked.
        let drag = Vector2::new(0.0, 5.0);
        let right_column = hit(Face::Front.axis(), Point3::new(3.25, 0.0, 4.75));
        let left_column = hit(Face::Front.axis(), Point3::new(-3.25, 0.0, 4.75));

        let right = resolve_turn(&right_column, drag).unwrap();
        let left = resolve_turn(&left_column, drag).unwrap();
        assert_approx_eq!(Face::Right.axis(), right.axis);
        assert_approx_eq!(Face::Left.axis(), left.axis);
        assert_eq!(Sign::Pos, right.direction);
        assert_eq!(Sign::Neg, left.direction);
    }

    #[test]
    fn test_resolve_turn_on_plane_keeps_cross_product() {
        // The Front center's hit point is on the plane through the turn
        // axis, so the cross product is used as is.
        let center = hit(Face::Front.axis(), Point3::new(0.0, 0.0, 4.75));
        let cmd = resolve_turn(&center, Vector2::new(20.0, 0.0)).unwrap();
        assert_approx_eq!(Face::Up.axis(), cmd.axis);

        let below = hit(Face::Front.axis(), Point3::new(0.0, -3.25, 4.75));
        let cmd = resolve_turn(&below, Vector2::new(20.0, 0.0)).unwrap();
        assert_approx_eq!(Face::Down.axis(), cmd.axis);
    }

    #[test]
    fn test_orbit_rotation_order() {
        let q = orbit_rotation(Vector2::new(600.0, 600.0), 0.15);
        // 90 degrees around Up takes +Z to +X, then 90 degrees around Right
        // leaves +X alone.
        assert_approx_eq!(Vector3::unit_x(), q.rotate_vector(Vector3::unit_z()));
    }
}
