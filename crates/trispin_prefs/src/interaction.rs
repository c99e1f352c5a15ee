use serde::{Deserialize, Serialize};
use trispin_math::Float;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Degrees of whole-puzzle rotation per pixel dragged.
    pub drag_sensitivity: Float,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.15,
        }
    }
}
