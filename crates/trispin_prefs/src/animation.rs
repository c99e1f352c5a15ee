use serde::{Deserialize, Serialize};
use trispin_math::Float;

/// Number of ticks in a turn when `turn_step` is unusable.
pub const DEFAULT_TICKS_PER_TURN: u32 = 8;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Fraction of a quarter turn applied on each tick. Rounded to the
    /// nearest `1/n`, so that a whole number of ticks makes a quarter turn.
    pub turn_step: Float,
    /// Whether to overwrite the turning layer with the exact quarter-turn
    /// rotation when a turn finishes, discarding accumulated error.
    pub snap_on_completion: bool,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            turn_step: 0.125,
            snap_on_completion: false,
        }
    }
}
impl AnimationPreferences {
    /// Returns whether `turn_step` is a usable fraction of a quarter turn.
    pub fn is_turn_step_valid(&self) -> bool {
        self.turn_step.is_finite() && 0.0 < self.turn_step && self.turn_step <= 1.0
    }

    /// Returns the number of ticks that one turn takes: `1 / turn_step`
    /// rounded to the nearest whole number, or [`DEFAULT_TICKS_PER_TURN`] if
    /// `turn_step` is invalid.
    pub fn ticks_per_turn(&self) -> u32 {
        if self.is_turn_step_valid() {
            // `as` saturates for tiny steps.
            ((1.0 / self.turn_step).round() as u32).max(1)
        } else {
            DEFAULT_TICKS_PER_TURN
        }
    }

    /// Returns `turn_step` rounded to the nearest `1/n`.
    pub fn rounded_turn_step(&self) -> Float {
        1.0 / self.ticks_per_turn() as Float
    }
}
