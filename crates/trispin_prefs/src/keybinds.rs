use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trispin_math::Sign;
use trispin_puzzle::Face;

/// Character for each face's direct-turn shortcut.
///
/// The lowercase character turns the face in the positive direction and the
/// uppercase character turns it in the negative direction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Keybinds(pub BTreeMap<Face, char>);
impl Default for Keybinds {
    fn default() -> Self {
        Self(
            [
                (Face::Left, 'l'),
                (Face::Right, 'r'),
                (Face::Up, 'u'),
                (Face::Down, 'd'),
                (Face::Front, 'f'),
                (Face::Back, 'b'),
            ]
            .into_iter()
            .collect(),
        )
    }
}
impl Keybinds {
    /// Returns the face and direction bound to a typed character.
    pub fn face_for_char(&self, c: char) -> Option<(Face, Sign)> {
        self.0.iter().find_map(|(&face, &key)| {
            if c == key.to_ascii_lowercase() {
                Some((face, Sign::Pos))
            } else if c == key.to_ascii_uppercase() {
                Some((face, Sign::Neg))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_for_char() {
        let keybinds = Keybinds::default();
        assert_eq!(Some((Face::Right, Sign::Pos)), keybinds.face_for_char('r'));
        assert_eq!(Some((Face::Right, Sign::Neg)), keybinds.face_for_char('R'));
        assert_eq!(Some((Face::Back, Sign::Neg)), keybinds.face_for_char('B'));
        assert_eq!(None, keybinds.face_for_char('x'));
        assert_eq!(None, keybinds.face_for_char(' '));
    }

    #[test]
    fn test_uppercase_binding_still_uses_case_for_direction() {
        let keybinds = Keybinds([(Face::Up, 'W')].into_iter().collect());
        assert_eq!(Some((Face::Up, Sign::Pos)), keybinds.face_for_char('w'));
        assert_eq!(Some((Face::Up, Sign::Neg)), keybinds.face_for_char('W'));
    }
}
