use cgmath::Point2;
use trispin_math::Float;
use trispin_prefs::{Keybinds, Preferences};
use trispin_puzzle::{CubeModel, GeometryError};

use crate::gesture::{GestureState, TurnCommand, orbit_rotation, resolve_turn};
use crate::{Camera, HitTest, TickOutcome, TurnAnimator};

/// All the mutable state of an interactive puzzle: the cubies, the pointer
/// gesture, and the turn animation.
///
/// Input events and ticks are handled one at a time, each to completion.
#[derive(Debug, Clone)]
pub struct PuzzleController {
    cube: CubeModel,
    camera: Camera,
    gesture: GestureState,
    animator: TurnAnimator,
    drag_sensitivity: Float,
    keybinds: Keybinds,
}
impl PuzzleController {
    /// Constructs a controller for a puzzle at rest.
    pub fn new(prefs: &Preferences) -> Result<Self, GeometryError> {
        Ok(Self {
            cube: CubeModel::new(&prefs.geometry.to_geometry())?,
            camera: Camera::new(&prefs.view),
            gesture: GestureState::Idle,
            animator: TurnAnimator::new(&prefs.animation),
            drag_sensitivity: prefs.interaction.drag_sensitivity,
            keybinds: prefs.keybinds.clone(),
        })
    }

    /// Returns the puzzle, whose cubie transforms should be drawn every tick.
    pub fn cube(&self) -> &CubeModel {
        &self.cube
    }
    /// Returns the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
    /// Returns the camera, for updating the draw target size.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
    /// Returns the current pointer gesture.
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }
    /// Returns the turn animation state.
    pub fn animator(&self) -> &TurnAnimator {
        &self.animator
    }
    /// Returns whether a turn is in progress.
    pub fn is_turning(&self) -> bool {
        self.animator.is_turning()
    }

    /// Handles the pointer being pressed at `pos` (in pixels).
    pub fn pointer_down(&mut self, pos: Point2<Float>, hit_test: &impl HitTest) {
        let hit = match self.camera.pixel_to_ndc(pos) {
            Ok(ndc) => hit_test.pick(&self.camera, &self.cube, ndc),
            Err(e) => {
                log::warn!("Cannot pick at {pos:?}: {e}");
                None
            }
        };
        self.gesture = match hit {
            Some(hit) => {
                log::trace!("pressed on cubie {}", hit.cubie);
                GestureState::OnCube {
                    hit,
                    last_pos: pos,
                    drag_delta: cgmath::vec2(0.0, 0.0),
                }
            }
            None => GestureState::Orbit { last_pos: pos },
        };
    }

    /// Handles the pointer moving to `pos` (in pixels).
    pub fn pointer_move(&mut self, pos: Point2<Float>) {
        match &mut self.gesture {
            GestureState::Idle => (),
            GestureState::Orbit { last_pos } => {
                let delta = pos - *last_pos;
                *last_pos = pos;
                if !self.animator.is_turning() {
                    let rot = orbit_rotation(delta, self.drag_sensitivity);
                    self.cube.apply_rotation_to_all(rot);
                }
            }
            GestureState::OnCube {
                last_pos,
                drag_delta,
                ..
            } => {
                *drag_delta += pos - *last_pos;
                *last_pos = pos;
            }
        }
    }

    /// Handles the pointer being released. Returns whether a turn was
    /// started.
    pub fn pointer_up(&mut self) -> bool {
        match std::mem::take(&mut self.gesture) {
            GestureState::OnCube {
                hit, drag_delta, ..
            } if !self.animator.is_turning() => match resolve_turn(&hit, drag_delta) {
                Some(cmd) => self.submit_turn(cmd),
                None => false,
            },
            _ => false,
        }
    }

    /// Handles a typed character. Returns whether a turn was started.
    pub fn key_press(&mut self, c: char) -> bool {
        let Some((face, direction)) = self.keybinds.face_for_char(c) else {
            log::trace!("no face is bound to {c:?}");
            return false;
        };
        log::trace!("key {c:?} turns {face} {}", direction.to_char());
        self.submit_turn(TurnCommand {
            axis: face.axis(),
            direction,
        })
    }

    /// Starts a turn, unless one is already in progress. Returns whether the
    /// turn was started.
    pub fn submit_turn(&mut self, cmd: TurnCommand) -> bool {
        self.animator.try_start(&self.cube, cmd)
    }

    /// Advances the animation by one tick. Call this once per frame, before
    /// drawing.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.animator.step(&mut self.cube);
        if outcome == TickOutcome::Finished
            && matches!(self.gesture, GestureState::OnCube { .. })
        {
            // A press that began during the turn must not turn on release.
            self.gesture = GestureState::Idle;
        }
        outcome
    }

    /// Ticks until no turn is in progress. Returns the number of ticks that
    /// advanced a turn.
    pub fn settle(&mut self) -> usize {
        let mut ticks = 0;
        loop {
            match self.tick() {
                TickOutcome::Idle => return ticks,
                TickOutcome::Turning => ticks += 1,
                TickOutcome::Finished => return ticks + 1,
            }
        }
    }
}
