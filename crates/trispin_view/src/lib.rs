//! Puzzle interaction: turning pointer gestures and key presses into face
//! turns, and animating those turns.
//!
//! Everything here runs on one scheduler. [`PuzzleController`] owns all the
//! mutable state and every event handler and tick takes `&mut self`, so no
//! tick can observe a half-handled event.

mod animation;
mod camera;
mod controller;
mod gesture;
mod pick;


pub use animation::{TickOutcome, TurnAnimator};
pub use camera::{Camera, Ray};
pub use controller::PuzzleController;
pub use gesture::{
    GestureState, TurnCommand, orbit_rotation, project_drag, resolve_turn, turn_direction,
};
pub use pick::{HitTest, PickHit, Raycaster};
