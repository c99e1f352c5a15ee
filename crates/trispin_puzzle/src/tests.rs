use std::collections::BTreeMap;

use cgmath::{Deg, InnerSpace, Rotation, Vector3};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use trispin_math::{EPSILON, Float, Sign, assert_approx_eq, rotation};

use crate::*;

fn new_cube() -> CubeModel {
    CubeModel::new(&PuzzleGeometry::default()).unwrap()
}

fn offsets(cube: &CubeModel, ids: &[CubieId]) -> Vec<[i8; 3]> {
    ids.iter().map(|&id| cube.cubie(id).offset).collect()
}

#[test]
fn test_construction() {
    let cube = new_cube();
    assert_eq!(CUBIE_COUNT, cube.len());

    let spacing = 3.25;
    for (_, cubie) in cube.cubies() {
        let [i, j, k] = cubie.offset.map(|o| o as Float * spacing);
        assert_approx_eq!(Vector3::new(i, j, k), cubie.position);
    }

    // X outermost, Z innermost.
    assert_eq!([-1, -1, -1], cube.cubie(CubieId(0)).offset);
    assert_eq!([-1, -1, 0], cube.cubie(CubieId(1)).offset);
    assert_eq!([1, 1, 1], cube.cubie(CubieId(26)).offset);
}

#[test]
fn test_face_centers() {
    let cube = new_cube();
    assert_eq!(
        vec![
            [-1, 0, 0],
            [0, -1, 0],
            [0, 0, -1],
            [0, 0, 1],
            [0, 1, 0],
            [1, 0, 0],
        ],
        offsets(&cube, cube.face_centers()),
    );
}

#[test]
fn test_invalid_geometry() {
    let bad_size = PuzzleGeometry {
        cube_size: 0.0,
        gap: 0.25,
    };
    assert_eq!(Err(GeometryError::BadCubeSize(0.0)), CubeModel::new(&bad_size));

    let bad_gap = PuzzleGeometry {
        cube_size: 3.0,
        gap: Float::NAN,
    };
    assert!(matches!(
        CubeModel::new(&bad_gap),
        Err(GeometryError::BadGap(_)),
    ));
}

#[test]
fn test_stickers() {
    let cube = new_cube();

    let mut counts = BTreeMap::<Face, usize>::new();
    for (_, cubie) in cube.cubies() {
        for (face, sticker) in cubie.stickers.iter() {
            if let Some(color) = sticker {
                assert_eq!(face.color(), *color);
                *counts.entry(face).or_default() += 1;
            }
        }
    }
    assert_eq!(Face::ALL.map(|f| (f, 9)).into_iter().collect::<BTreeMap<_, _>>(), counts);

    // The core cubie is all black, and a corner has exactly three stickers.
    let core = cube.cubie_at_offset([0, 0, 0]).unwrap();
    assert!(cube.cubie(core).stickers.iter().all(|(_, s)| s.is_none()));
    let corner = cube.cubie(cube.cubie_at_offset([1, 1, -1]).unwrap());
    assert_eq!(Rgb::from_hex(0xB90000), corner.sticker_color(Face::Right));
    assert_eq!(Rgb::from_hex(0xFFFFFF), corner.sticker_color(Face::Up));
    assert_eq!(Rgb::from_hex(0x0045AD), corner.sticker_color(Face::Back));
    assert_eq!(Rgb::BLACK, corner.sticker_color(Face::Left));
    assert_eq!("#0045ad", Face::Back.color().to_string());
}

#[test]
fn test_select_layer_completeness() {
    let cube = new_cube();

    let mut times_selected = vec![0; cube.len()];
    for face in Face::ALL {
        let layer = select_layer(&cube, face.axis());
        assert_eq!(9, layer.len(), "{face}");
        let axis = face.axis_index();
        let sign = face.sign().to_float() as i8;
        assert!(offsets(&cube, &layer).iter().all(|o| o[axis] == sign));
        for id in layer {
            times_selected[id.0 as usize] += 1;
        }
    }

    for (id, cubie) in cube.cubies() {
        let nonzero = cubie.offset.iter().filter(|&&o| o != 0).count();
        // corners = 3, edges = 2, centers = 1, core = 0
        assert_eq!(nonzero, times_selected[id.0 as usize], "{:?}", cubie.offset);
    }
    assert_eq!(26, times_selected.iter().filter(|&&n| n > 0).count());
}

#[test]
fn test_select_side_includes_only_positive() {
    let cube = new_cube();
    let axis = Vector3::new(1.0, 1.0, 0.0).normalize();
    let side = select_side(&cube, axis);
    for id in cube.ids() {
        let p = cube.cubie(id).position;
        assert_eq!(p.dot(axis) > EPSILON, side.contains(&id));
    }
}

#[test]
fn test_side_of() {
    let axis = Face::Right.axis();
    assert_eq!(Some(Sign::Pos), side_of(Vector3::new(3.25, -3.25, 0.0), axis));
    assert_eq!(Some(Sign::Neg), side_of(Vector3::new(-0.5, 4.0, 4.0), axis));
    // On the plane or at the origin.
    assert_eq!(None, side_of(Vector3::new(0.0, 3.25, 3.25), axis));
    assert_eq!(None, side_of(Vector3::new(0.0, 0.0, 0.0), axis));
    assert_eq!("right", Face::Right.to_string());
}

#[test]
fn test_select_closest_center_at_rest() {
    let cube = new_cube();
    for face in Face::ALL {
        let center = select_closest_center(&cube, face.axis()).unwrap();
        let axis = face.axis_index();
        let mut expected = [0; 3];
        expected[axis] = face.sign().to_float() as i8;
        assert_eq!(expected, cube.cubie(center).offset, "{face}");
    }
}

#[test]
fn test_select_closest_center_tie_break() {
    let cube = new_cube();
    // Halfway between Front and Up. Front is iterated before Up, so it wins
    // the tie.
    let direction = Vector3::new(0.0, 1.0, 1.0).normalize();
    let center = select_closest_center(&cube, direction).unwrap();
    assert_eq!([0, 0, 1], cube.cubie(center).offset);

    assert_eq!(None, select_closest_center(&cube, Vector3::new(Float::NAN, 0.0, 0.0)));
}

#[test]
fn test_apply_rotation_uses_world_axis() {
    let mut cube = new_cube();
    let id = cube.cubie_at_offset([1, 0, 0]).unwrap();

    let qx = rotation(Vector3::unit_x(), Deg(90.0));
    let qy = rotation(Vector3::unit_y(), Deg(90.0));
    cube.apply_rotation(qx, &[id]);
    cube.apply_rotation(qy, &[id]);

    let c = cube.cubie(id);
    assert_approx_eq!(qy * qx, c.orientation);
    assert_approx_eq!(Vector3::new(0.0, 0.0, -3.25), c.position);
    // Local +Y went to world +Z, then around world Y to world +X.
    assert_approx_eq!(Vector3::unit_x(), c.orientation.rotate_vector(Vector3::unit_y()));
}

#[test]
fn test_apply_rotation_leaves_others_alone() {
    let mut cube = new_cube();
    let before = cube.clone();
    let layer = select_layer(&cube, Face::Up.axis());
    cube.apply_rotation(rotation(Face::Up.axis(), Deg(90.0)), &layer);
    for id in cube.ids().filter(|id| !layer.contains(id)) {
        assert_eq!(before.cubie(id), cube.cubie(id));
    }
}

proptest! {
    #[test]
    fn proptest_layers_survive_reorientation(
        yaw in -180.0..180.0_f64,
        pitch in -180.0..180.0_f64,
        face_index in 0..6_usize,
    ) {
        let mut cube = new_cube();
        let orbit = rotation(Vector3::unit_x(), Deg(pitch)) * rotation(Vector3::unit_y(), Deg(yaw));
        cube.apply_rotation_to_all(orbit);

        // A face's reoriented direction still resolves to that face's center
        // and still selects its 9 cubies.
        let face = Face::ALL[face_index];
        let direction = orbit.rotate_vector(face.axis());
        let center = select_closest_center(&cube, direction).unwrap();
        let axis = cube.cubie(center).position.normalize();
        let layer = select_layer(&cube, axis);
        prop_assert_eq!(9, layer.len());
        let sign = face.sign().to_float() as i8;
        prop_assert!(offsets(&cube, &layer).iter().all(|o| o[face.axis_index()] == sign));
    }
}
