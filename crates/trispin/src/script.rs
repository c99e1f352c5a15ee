use cgmath::Point2;
use eyre::{Context, Result};
use serde::Deserialize;
use trispin_math::Float;
use trispin_view::{HitTest, PuzzleController};

/// One step of a scripted interaction.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ScriptEvent {
    /// Press the pointer at a pixel position.
    Down([Float; 2]),
    /// Move the pointer to a pixel position.
    Move([Float; 2]),
    /// Release the pointer.
    Up,
    /// Type a character.
    Key(char),
    /// Run some animation ticks.
    Ticks(usize),
}

/// Parses a YAML list of events, each written as a single-key map such as
/// `down: [400, 300]` or a bare name such as `up`.
pub(crate) fn parse(source: &str) -> Result<Vec<ScriptEvent>> {
    let de = serde_norway::Deserializer::from_str(source);
    serde_norway::with::singleton_map_recursive::deserialize(de)
        .wrap_err("error parsing event script")
}

/// Feeds each event to the controller in order.
pub(crate) fn run(
    controller: &mut PuzzleController,
    hit_test: &impl HitTest,
    events: &[ScriptEvent],
) {
    for event in events {
        log::trace!("{event:?}");
        match *event {
            ScriptEvent::Down([x, y]) => controller.pointer_down(Point2::new(x, y), hit_test),
            ScriptEvent::Move([x, y]) => controller.pointer_move(Point2::new(x, y)),
            ScriptEvent::Up => {
                if controller.pointer_up() {
                    log::info!("pointer release started a turn");
                }
            }
            ScriptEvent::Key(c) => {
                if !controller.key_press(c) {
                    log::info!("key {c:?} did not start a turn");
                }
            }
            ScriptEvent::Ticks(n) => {
                for _ in 0..n {
                    controller.tick();
                }
            }
        }
    }
}
