//! User preferences for the cube simulator.
//!
//! Preferences are layered: the built-in defaults, then the user preferences
//! file, then environment variables prefixed with `RUBIK_` (for example,
//! `RUBIK_ANIMATION__MOVE_DURATION=0`).

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate strum;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
pub mod paths;
mod persist;
mod script;
mod view;

pub use animation::*;
pub use script::*;
pub use view::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

/// Prefix for environment variables that override preferences.
pub const ENV_PREFIX: &str = "RUBIK";

lazy_static! {
    /// Built-in default preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Twist animation.
    pub animation: AnimationPreferences,
    /// Camera.
    pub view: ViewPreferences,
    /// Scripted playback.
    pub script: ScriptPreferences,
}

impl Preferences {
    /// Loads preferences from `path`, or from the default preferences file if
    /// `path` is `None`. If loading fails, a warning is logged and the default
    /// preferences are returned.
    pub fn load(path: Option<&Path>) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Loads preferences from `path`, or from the default preferences file if
    /// `path` is `None`.
    ///
    /// A missing preferences file is not an error.
    pub fn try_load(path: Option<&Path>) -> eyre::Result<Self> {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder();

        // Load default preferences.
        config = config.add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        // Load user preferences.
        match persist::user_config_source(path) {
            Ok(config_source) => config = config.add_source(config_source),
            Err(e) => log::warn!("Error loading user preferences: {e}"),
        }

        // Load overrides from the environment.
        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let prefs: Self = config.build()?.try_deserialize()?;
        log::debug!("loaded preferences: {prefs:?}");
        Ok(prefs)
    }

    /// Saves preferences to `path`, or to the default preferences file if
    /// `path` is `None`.
    pub fn save(&self, path: Option<&Path>) -> eyre::Result<()> {
        persist::save(self, path)
    }

    /// Returns the preferences formatted as YAML.
    pub fn to_yaml(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_prefs_match_builtin_values() {
        let prefs = &*DEFAULT_PREFS;
        assert_eq!(prefs.animation.move_duration, 0.9);
        assert_eq!(prefs.animation.script_clock, ScriptClockMode::Persistent);
        assert_eq!((prefs.view.yaw, prefs.view.pitch, prefs.view.roll), (0.0, 45.0, 45.0));
        assert_eq!(prefs.script.moves, " urdtfl");
        assert_eq!(prefs.script.step(), Duration::from_secs(1));
        assert_eq!(*prefs, Preferences::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.yaml");

        let mut prefs = DEFAULT_PREFS.clone();
        prefs.animation.move_duration = 0.25;
        prefs.animation.script_clock = ScriptClockMode::Restart;
        prefs.script.moves = "uU".to_string();
        prefs.save(Some(&path)).unwrap();

        assert_eq!(Preferences::try_load(Some(&path)).unwrap(), prefs);
    }

    #[test]
    fn test_partial_user_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(&path, "animation:\n  move_duration: 0.0\n").unwrap();

        let prefs = Preferences::try_load(Some(&path)).unwrap();
        assert_eq!(prefs.animation.duration(), Duration::ZERO);
        assert_eq!(prefs.view, DEFAULT_PREFS.view);
        assert_eq!(prefs.script, DEFAULT_PREFS.script);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.yaml");
        assert_eq!(Preferences::load(Some(&path)), *DEFAULT_PREFS);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(&path, "animation:\n  script_clock: sometimes\n").unwrap();

        assert!(Preferences::try_load(Some(&path)).is_err());
        assert_eq!(Preferences::load(Some(&path)), *DEFAULT_PREFS);
    }
}
