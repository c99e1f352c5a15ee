use cgmath::{Deg, InnerSpace, Point2, Point3, Rad, Vector3};
use eyre::{Result, bail};
use trispin_math::Float;
use trispin_prefs::ViewPreferences;

/// Perspective camera on the +Z axis, looking toward the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Position of the camera in world space.
    pub position: Point3<Float>,
    /// Vertical field of view.
    pub fov_y: Deg<Float>,
    /// Width and height of the draw target in pixels.
    pub target_size: [u32; 2],
}
impl Camera {
    /// Constructs a camera from view preferences.
    pub fn new(prefs: &ViewPreferences) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, prefs.camera_distance),
            fov_y: Deg(prefs.fov_y),
            target_size: prefs.target_size,
        }
    }

    fn target_size_f64(&self) -> Result<(Float, Float)> {
        let [w, h] = self.target_size;
        if w == 0 || h == 0 {
            bail!("draw target has zero size");
        }
        Ok((w as Float, h as Float))
    }

    /// Returns the width divided by the height of the draw target.
    pub fn aspect(&self) -> Result<Float> {
        let (w, h) = self.target_size_f64()?;
        Ok(w / h)
    }

    /// Converts a pixel position (origin at top left, Y down) to normalized
    /// device coordinates (origin at center, Y up, each axis in `-1..=1`).
    pub fn pixel_to_ndc(&self, pos: Point2<Float>) -> Result<Point2<Float>> {
        let (w, h) = self.target_size_f64()?;
        Ok(Point2::new(pos.x / w * 2.0 - 1.0, -(pos.y / h) * 2.0 + 1.0))
    }

    /// Returns the ray from the camera through a point in normalized device
    /// coordinates.
    pub fn ray(&self, ndc: Point2<Float>) -> Result<Ray> {
        let tan_half_fov = (Rad::from(self.fov_y).0 * 0.5).tan();
        let aspect = self.aspect()?;
        let direction = Vector3::new(ndc.x * tan_half_fov * aspect, ndc.y * tan_half_fov, -1.0);
        Ok(Ray {
            origin: self.position,
            direction: direction.normalize(),
        })
    }
}

/// Half-line in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Starting point.
    pub origin: Point3<Float>,
    /// Unit direction.
    pub direction: Vector3<Float>,
}
impl Ray {
    /// Returns the point at distance `t` along the ray.
    pub fn at(&self, t: Float) -> Point3<Float> {
        self.origin + self.direction * t
    }
}
