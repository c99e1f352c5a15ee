use std::collections::BTreeMap;

use serde::Serialize;
use trispin_math::Float;
use trispin_puzzle::{CubeModel, Face, Rgb};

/// Serializable snapshot of one cubie.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct CubieReport {
    id: u8,
    offset: [i8; 3],
    position: [Float; 3],
    /// Scalar first.
    orientation: [Float; 4],
    /// Column-major 4x4 transform.
    transform: [[Float; 4]; 4],
    stickers: BTreeMap<Face, Rgb>,
}

pub(crate) fn cube_report(cube: &CubeModel) -> Vec<CubieReport> {
    cube.cubies()
        .map(|(id, cubie)| {
            let q = cubie.orientation;
            CubieReport {
                id: id.0,
                offset: cubie.offset,
                position: cubie.position.into(),
                orientation: [q.s, q.v.x, q.v.y, q.v.z],
                transform: cubie.transform().into(),
                stickers: cubie
                    .stickers
                    .iter()
                    .filter_map(|(face, sticker)| Some((face, (*sticker)?)))
                    .collect(),
            }
        })
        .collect()
}
