use serde::{Deserialize, Serialize};
use trispin_math::Float;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewPreferences {
    /// Vertical field of view, in degrees.
    pub fov_y: Float,
    /// Distance from the camera to the center of the puzzle.
    pub camera_distance: Float,
    /// Width and height of the draw target in pixels.
    pub target_size: [u32; 2],
}
impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            fov_y: 45.0,
            camera_distance: 40.0,
            target_size: [800, 600],
        }
    }
}
