use std::f64::consts::FRAC_PI_2;

use cgmath::{InnerSpace, Quaternion, Rad, Vector3};
use trispin_math::{Float, Sign, rotation};
use trispin_prefs::AnimationPreferences;
use trispin_puzzle::{CubeModel, CubieId, select_closest_center, select_layer};

use crate::TurnCommand;

/// What happened on one animation tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No turn was in progress.
    Idle,
    /// A turn advanced and is still in progress.
    Turning,
    /// A turn advanced and completed on this tick.
    Finished,
}

/// Turn in progress.
#[derive(Debug, Clone, PartialEq)]
struct ActiveTurn {
    /// Unit axis through the face center that is turning.
    axis: Vector3<Float>,
    direction: Sign,
    /// Number of steps applied so far.
    ticks: u32,
    selection: Vec<CubieId>,
    /// Transforms of the selected cubies before the turn, recorded only when
    /// snapping on completion.
    start_transforms: Option<Vec<(Vector3<Float>, Quaternion<Float>)>>,
}

/// State machine that animates one face turn at a time.
///
/// A turn advances by a fixed fraction of a quarter turn per tick, regardless
/// of how much wall-clock time passes between ticks, and always finishes after
/// a whole number of ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnAnimator {
    ticks_per_turn: u32,
    snap_on_completion: bool,
    active: Option<ActiveTurn>,
}
impl TurnAnimator {
    /// Constructs an idle animator.
    ///
    /// The turn step is rounded to the nearest `1/n`. An invalid turn step is
    /// replaced with the default.
    pub fn new(prefs: &AnimationPreferences) -> Self {
        if !prefs.is_turn_step_valid() {
            log::warn!("Invalid turn step {}; using default", prefs.turn_step);
        }
        Self {
            ticks_per_turn: prefs.ticks_per_turn(),
            snap_on_completion: prefs.snap_on_completion,
            active: None,
        }
    }

    /// Returns whether a turn is in progress.
    pub fn is_turning(&self) -> bool {
        self.active.is_some()
    }
    /// Returns the number of ticks that one turn takes.
    pub fn ticks_per_turn(&self) -> u32 {
        self.ticks_per_turn
    }
    /// Returns the fraction of the current turn applied so far, or zero if
    /// idle.
    pub fn elapsed(&self) -> Float {
        self.active.as_ref().map_or(0.0, |turn| {
            turn.ticks as Float / self.ticks_per_turn as Float
        })
    }
    /// Returns the axis of the current turn.
    pub fn axis(&self) -> Option<Vector3<Float>> {
        Some(self.active.as_ref()?.axis)
    }
    /// Returns the direction of the current turn.
    pub fn direction(&self) -> Option<Sign> {
        Some(self.active.as_ref()?.direction)
    }
    /// Returns the cubies moving in the current turn.
    pub fn selection(&self) -> &[CubieId] {
        self.active
            .as_ref()
            .map_or(&[][..], |turn| turn.selection.as_slice())
    }

    /// Starts a turn, unless one is already in progress. Returns whether the
    /// turn was started.
    ///
    /// The command's axis is snapped to the face center closest to it, so the
    /// turn always moves a whole layer even after the puzzle has been
    /// reoriented.
    pub fn try_start(&mut self, cube: &CubeModel, cmd: TurnCommand) -> bool {
        if self.is_turning() {
            log::trace!("ignoring {cmd:?} during another turn");
            return false;
        }
        let Some(center) = select_closest_center(cube, cmd.axis) else {
            log::trace!("no face center near {:?}", cmd.axis);
            return false;
        };
        let axis = cube.cubie(center).position.normalize();
        let selection = select_layer(cube, axis);
        log::debug!(
            "starting turn of {} cubies around {axis:?}, direction {}",
            selection.len(),
            cmd.direction.to_char(),
        );

        let start_transforms = self.snap_on_completion.then(|| {
            selection
                .iter()
                .map(|&id| (cube.cubie(id).position, cube.cubie(id).orientation))
                .collect()
        });
        self.active = Some(ActiveTurn {
            axis,
            direction: cmd.direction,
            ticks: 0,
            selection,
            start_transforms,
        });
        true
    }

    /// Advances the current turn by one step.
    pub fn step(&mut self, cube: &mut CubeModel) -> TickOutcome {
        let Some(turn) = &mut self.active else {
            return TickOutcome::Idle;
        };

        let angle = Rad(turn.direction * FRAC_PI_2 / self.ticks_per_turn as Float);
        cube.apply_rotation(rotation(turn.axis, angle), &turn.selection);
        turn.ticks += 1;
        log::trace!("turn at tick {}/{}", turn.ticks, self.ticks_per_turn);

        if turn.ticks < self.ticks_per_turn {
            return TickOutcome::Turning;
        }

        if let Some(start_transforms) = &turn.start_transforms {
            let exact = rotation(turn.axis, Rad(turn.direction * FRAC_PI_2));
            for (&id, &(position, orientation)) in std::iter::zip(&turn.selection, start_transforms)
            {
                cube.set_transform(id, position, orientation);
                cube.apply_rotation(exact, &[id]);
            }
        }
        log::debug!("finished turn around {:?}", turn.axis);
        self.active = None;
        TickOutcome::Finished
    }
}
