use cgmath::{EuclideanSpace, Point2, Point3, Rotation, Vector3};
use float_ord::FloatOrd;
use trispin_math::{EPSILON, Float};
use trispin_puzzle::{CubeModel, Cubie, CubieId};

use crate::{Camera, Ray};

/// Result of a hit test at the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    /// Cubie under the pointer.
    pub cubie: CubieId,
    /// Outward normal of the cubie face under the pointer, in world space.
    pub face_normal: Vector3<Float>,
    /// Point on the cubie surface under the pointer, in world space.
    pub point: Point3<Float>,
}

/// Service that finds what is under the pointer.
pub trait HitTest {
    /// Returns the nearest cubie under a point in normalized device
    /// coordinates, or `None` if the pointer is not over the puzzle.
    fn pick(&self, camera: &Camera, cube: &CubeModel, ndc: Point2<Float>) -> Option<PickHit>;
}

/// Hit test that casts a ray from the camera against each cubie's box.
#[derive(Debug, Default, Copy, Clone)]
pub struct Raycaster;
impl HitTest for Raycaster {
    fn pick(&self, camera: &Camera, cube: &CubeModel, ndc: Point2<Float>) -> Option<PickHit> {
        let ray = match camera.ray(ndc) {
            Ok(ray) => ray,
            Err(e) => {
                log::warn!("Cannot cast ray: {e}");
                return None;
            }
        };
        let half_size = cube.geometry().cube_size * 0.5;

        cube.cubies()
            .filter_map(|(id, cubie)| {
                let (t, face_normal) = intersect_cubie(&ray, cubie, half_size)?;
                Some((t, id, face_normal))
            })
            .min_by_key(|(t, _, _)| FloatOrd(*t))
            .map(|(t, cubie, face_normal)| PickHit {
                cubie,
                face_normal,
                point: ray.at(t),
            })
    }
}

/// Intersects a ray with a cubie's oriented box using the slab method.
///
/// Returns the distance along the ray and the world-space normal of the face
/// the ray enters through. Returns `None` on a miss, or if the ray starts
/// inside the box.
fn intersect_cubie(ray: &Ray, cubie: &Cubie, half_size: Float) -> Option<(Float, Vector3<Float>)> {
    // Work in the cubie's local frame.
    let inverse = cubie.orientation.invert();
    let origin = inverse.rotate_vector(ray.origin.to_vec() - cubie.position);
    let direction = inverse.rotate_vector(ray.direction);

    let mut t_near = Float::NEG_INFINITY;
    let mut t_far = Float::INFINITY;
    let mut near_axis = None;
    for axis in 0..3 {
        let (o, d) = (origin[axis], direction[axis]);
        if d.abs() < EPSILON {
            if o.abs() > half_size {
                return None;
            }
            continue;
        }
        let t1 = (-half_size - o) / d;
        let t2 = (half_size - o) / d;
        let (t_enter, t_exit) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if t_enter > t_near {
            t_near = t_enter;
            near_axis = Some(axis);
        }
        t_far = t_far.min(t_exit);
    }

    if t_near > t_far || t_near < 0.0 {
        return None;
    }
    let axis = near_axis?;
    let mut local_normal = Vector3::new(0.0, 0.0, 0.0);
    local_normal[axis] = -direction[axis].signum();
    Some((t_near, cubie.orientation.rotate_vector(local_normal)))
}
