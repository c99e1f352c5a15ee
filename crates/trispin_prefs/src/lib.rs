//! User preferences.
//!
//! Preferences are layered: the built-in defaults in `default.yaml` first,
//! then the user's file on top, so a user file only needs the keys it
//! changes.

#![allow(missing_docs)] // too many things to document

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
mod geometry;
mod interaction;
mod keybinds;
pub mod persist;
mod view;

pub use animation::*;
pub use geometry::*;
pub use interaction::*;
pub use keybinds::*;
pub use view::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub geometry: GeometryPreferences,
    pub interaction: InteractionPreferences,
    pub animation: AnimationPreferences,
    pub keybinds: Keybinds,
    pub view: ViewPreferences,
}
impl Preferences {
    /// Loads preferences from the defaults plus the file at `user_file`, if
    /// any. If loading fails, the built-in defaults are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = user_file {
            config = config.add_source(persist::user_config_source(path));
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .map(Self::sanitized)
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                DEFAULT_PREFS.clone()
            })
    }

    /// Serializes the preferences as YAML.
    pub fn to_yaml(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Replaces values that would make the puzzle misbehave with their
    /// defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = &*DEFAULT_PREFS;
        if !self.animation.is_turn_step_valid() {
            log::warn!(
                "Invalid turn step {}; using {}",
                self.animation.turn_step,
                defaults.animation.turn_step,
            );
            self.animation.turn_step = defaults.animation.turn_step;
        }
        let rounded = self.animation.rounded_turn_step();
        if rounded != self.animation.turn_step {
            log::warn!(
                "Turn step {} does not divide a quarter turn; using {rounded}",
                self.animation.turn_step,
            );
            self.animation.turn_step = rounded;
        }
        if !self.interaction.drag_sensitivity.is_finite() {
            log::warn!("Invalid drag sensitivity; using default");
            self.interaction.drag_sensitivity = defaults.interaction.drag_sensitivity;
        }
        if !(0.0 < self.view.fov_y && self.view.fov_y < 180.0) {
            log::warn!("Invalid field of view {}; using default", self.view.fov_y);
            self.view.fov_y = defaults.view.fov_y;
        }
        self
    }
}
