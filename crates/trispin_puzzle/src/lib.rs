//! Sub-cube model for a 3x3x3 twisty puzzle.
//!
//! There is no symbolic puzzle state. The only state is the live transform of
//! each of the 27 sub-cubes ("cubies"), and layer membership is re-derived
//! from cubie positions whenever it is needed.

mod color;
mod cube;
mod face;
pub mod select;

#[cfg(test)]
mod tests;

pub use color::Rgb;
pub use cube::{CUBIE_COUNT, CubeModel, Cubie, CubieId, DIMENSION, GeometryError, PuzzleGeometry};
pub use face::{Face, PerFace};
pub use select::{
    LAYER_THRESHOLD, select_closest_center, select_layer, select_side, side_of,
};
