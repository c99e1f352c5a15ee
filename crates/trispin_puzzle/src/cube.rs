use std::fmt;

use cgmath::{Matrix4, One, Quaternion, Rotation, Vector3};
use itertools::iproduct;
use trispin_math::Float;

use crate::{Face, PerFace, Rgb};

/// Number of cubies along each edge of the puzzle.
pub const DIMENSION: usize = 3;
/// Total number of cubies, including the hidden one at the core.
pub const CUBIE_COUNT: usize = DIMENSION * DIMENSION * DIMENSION;

/// Error constructing a [`CubeModel`] from invalid geometry.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Cubie size is zero, negative, or not finite.
    #[error("cubie size must be positive and finite, got {0}")]
    BadCubeSize(Float),
    /// Gap is negative or not finite.
    #[error("gap between cubies must be non-negative and finite, got {0}")]
    BadGap(Float),
}

/// Physical dimensions of the puzzle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PuzzleGeometry {
    /// Edge length of each cubie.
    pub cube_size: Float,
    /// Empty space between adjacent cubies.
    pub gap: Float,
}
impl Default for PuzzleGeometry {
    fn default() -> Self {
        Self {
            cube_size: 3.0,
            gap: 0.25,
        }
    }
}
impl PuzzleGeometry {
    /// Returns the distance between the centers of adjacent cubies.
    pub fn spacing(&self) -> Float {
        self.cube_size + self.gap
    }

    /// Returns an error if the geometry cannot produce a valid puzzle.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.cube_size.is_finite() && self.cube_size > 0.0) {
            return Err(GeometryError::BadCubeSize(self.cube_size));
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(GeometryError::BadGap(self.gap));
        }
        Ok(())
    }
}

/// Index of a cubie in a [`CubeModel`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubieId(pub u8);
impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
impl CubieId {
    fn to_index(self) -> usize {
        self.0 as usize
    }
}

/// One of the small cubes that make up the puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubie {
    /// Grid offset at construction, with each component in `-1..=1`.
    ///
    /// This is a label only. It is never updated, so it must not be used to
    /// decide which layer a cubie is in.
    pub offset: [i8; 3],
    /// World-space center of the cubie.
    pub position: Vector3<Float>,
    /// Accumulated orientation of the cubie.
    pub orientation: Quaternion<Float>,
    /// Sticker color of each face in the cubie's local frame, or `None` if
    /// that face is hidden inside the puzzle (drawn black).
    pub stickers: PerFace<Option<Rgb>>,
}
impl Cubie {
    fn new(offset: [i8; 3], spacing: Float) -> Self {
        let [i, j, k] = offset.map(|o| o as Float * spacing);
        Self {
            offset,
            position: Vector3::new(i, j, k),
            orientation: Quaternion::one(),
            stickers: PerFace::from_fn(|face| {
                let outer = offset[face.axis_index()] == face.sign().to_float() as i8;
                outer.then(|| face.color())
            }),
        }
    }

    /// Returns whether the cubie is at the center of one face.
    ///
    /// Exactly two of its grid offsets are zero.
    pub fn is_face_center(&self) -> bool {
        let [i, j, k] = self.offset;
        ((i == 0 && j == 0) || (i == 0 && k == 0) || (j == 0 && k == 0))
            && !(i == 0 && j == 0 && k == 0)
    }

    /// Returns the sticker color of a face in the cubie's local frame, with
    /// hidden faces black.
    pub fn sticker_color(&self, face: Face) -> Rgb {
        self.stickers[face].unwrap_or(Rgb::BLACK)
    }

    /// Returns the full transform of the cubie: rotation followed by
    /// translation.
    pub fn transform(&self) -> Matrix4<Float> {
        Matrix4::from_translation(self.position) * Matrix4::from(self.orientation)
    }

    /// Left-multiplies `rot` onto the cubie's transform, which rotates it
    /// around a fixed world-space axis through the origin.
    pub fn rotate(&mut self, rot: Quaternion<Float>) {
        self.position = rot.rotate_vector(self.position);
        self.orientation = rot * self.orientation;
    }
}

/// Live transforms of all the cubies of a 3x3x3 puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeModel {
    geometry: PuzzleGeometry,
    cubies: Vec<Cubie>,
    face_centers: Vec<CubieId>,
}
impl CubeModel {
    /// Constructs a puzzle at rest, centered at the origin.
    pub fn new(geometry: &PuzzleGeometry) -> Result<Self, GeometryError> {
        geometry.validate()?;
        let spacing = geometry.spacing();

        // X outermost, Z innermost.
        let cubies: Vec<Cubie> = iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(i, j, k)| Cubie::new([i, j, k], spacing))
            .collect();
        let face_centers = (0..cubies.len())
            .map(|i| CubieId(i as u8))
            .filter(|&id| cubies[id.to_index()].is_face_center())
            .collect();
        log::debug!("constructed {} cubies with spacing {spacing}", cubies.len());

        Ok(Self {
            geometry: *geometry,
            cubies,
            face_centers,
        })
    }

    /// Returns the geometry the puzzle was constructed with.
    pub fn geometry(&self) -> &PuzzleGeometry {
        &self.geometry
    }

    /// Returns the number of cubies.
    pub fn len(&self) -> usize {
        self.cubies.len()
    }
    /// Returns whether the puzzle has no cubies, which is never the case.
    pub fn is_empty(&self) -> bool {
        self.cubies.is_empty()
    }

    /// Returns an iterator over all cubie IDs.
    pub fn ids(&self) -> impl Iterator<Item = CubieId> + use<> {
        (0..self.cubies.len() as u8).map(CubieId)
    }
    /// Returns an iterator over all cubies with their IDs.
    pub fn cubies(&self) -> impl Iterator<Item = (CubieId, &Cubie)> {
        self.cubies
            .iter()
            .enumerate()
            .map(|(i, cubie)| (CubieId(i as u8), cubie))
    }
    /// Returns a cubie.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn cubie(&self, id: CubieId) -> &Cubie {
        &self.cubies[id.to_index()]
    }
    /// Returns the cubie that was constructed at `offset`.
    pub fn cubie_at_offset(&self, offset: [i8; 3]) -> Option<CubieId> {
        self.cubies().find(|(_, c)| c.offset == offset).map(|(id, _)| id)
    }

    /// Returns the 6 face-center cubies.
    pub fn face_centers(&self) -> &[CubieId] {
        &self.face_centers
    }

    /// Returns the current transform of every cubie, for drawing.
    pub fn transforms(&self) -> impl Iterator<Item = (CubieId, Matrix4<Float>)> {
        self.cubies().map(|(id, cubie)| (id, cubie.transform()))
    }

    /// Rotates each cubie in `subset` by `rot` around the fixed world axis.
    pub fn apply_rotation(&mut self, rot: Quaternion<Float>, subset: &[CubieId]) {
        for &id in subset {
            self.cubies[id.to_index()].rotate(rot);
        }
    }
    /// Rotates every cubie by `rot` around the fixed world axis.
    pub fn apply_rotation_to_all(&mut self, rot: Quaternion<Float>) {
        for cubie in &mut self.cubies {
            cubie.rotate(rot);
        }
    }

    /// Overwrites the transform of a cubie.
    pub fn set_transform(
        &mut self,
        id: CubieId,
        position: Vector3<Float>,
        orientation: Quaternion<Float>,
    ) {
        let cubie = &mut self.cubies[id.to_index()];
        cubie.position = position;
        cubie.orientation = orientation;
    }
}
