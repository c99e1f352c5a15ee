use serde::{Deserialize, Serialize};
use trispin_math::Float;
use trispin_puzzle::PuzzleGeometry;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeometryPreferences {
    pub cube_size: Float,
    pub gap: Float,
}
impl Default for GeometryPreferences {
    fn default() -> Self {
        let PuzzleGeometry { cube_size, gap } = PuzzleGeometry::default();
        Self { cube_size, gap }
    }
}
impl GeometryPreferences {
    pub fn to_geometry(&self) -> PuzzleGeometry {
        PuzzleGeometry {
            cube_size: self.cube_size,
            gap: self.gap,
        }
    }
}
