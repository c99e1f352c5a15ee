use std::ops::{Index, IndexMut};

use cgmath::Vector3;
use serde::{Deserialize, Serialize};
use trispin_math::{Float, Sign};

use crate::Rgb;

/// Face of the puzzle, named in the un-rotated reference frame.
///
/// The order of [`Face::ALL`] is the order in which faces are iterated
/// everywhere.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Face {
    /// -X
    Left,
    /// +X
    Right,
    /// +Y
    Up,
    /// -Y
    Down,
    /// +Z
    Front,
    /// -Z
    Back,
}
impl Face {
    /// All faces.
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
    ];

    /// Returns the index of the face in [`Face::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the coordinate axis (0 = X, 1 = Y, 2 = Z) normal to the face.
    pub fn axis_index(self) -> usize {
        match self {
            Face::Left | Face::Right => 0,
            Face::Up | Face::Down => 1,
            Face::Front | Face::Back => 2,
        }
    }

    /// Returns which side of the origin the face is on along its axis.
    pub fn sign(self) -> Sign {
        match self {
            Face::Right | Face::Up | Face::Front => Sign::Pos,
            Face::Left | Face::Down | Face::Back => Sign::Neg,
        }
    }

    /// Returns the fixed outward unit vector of the face.
    pub fn axis(self) -> Vector3<Float> {
        let mut v = Vector3::new(0.0, 0.0, 0.0);
        v[self.axis_index()] = self.sign().to_float();
        v
    }

    /// Returns the sticker color for the face.
    pub fn color(self) -> Rgb {
        match self {
            Face::Left => Rgb::from_hex(0xFF5900),
            Face::Right => Rgb::from_hex(0xB90000),
            Face::Up => Rgb::from_hex(0xFFFFFF),
            Face::Down => Rgb::from_hex(0xFFD500),
            Face::Front => Rgb::from_hex(0x009B48),
            Face::Back => Rgb::from_hex(0x0045AD),
        }
    }
}

/// One value per face, indexed by [`Face`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T>(pub [T; 6]);
impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face.index()]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face.index()]
    }
}
impl<T> PerFace<T> {
    /// Constructs a value for each face using `f`.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Self(Face::ALL.map(&mut f))
    }

    /// Returns an iterator over faces and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        std::iter::zip(Face::ALL, &self.0)
    }
}
