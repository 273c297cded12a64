use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Preferences for scripted playback.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScriptPreferences {
    /// Move string played by default. Characters that are not moves take up a
    /// step without doing anything.
    pub moves: String,
    /// Time between script steps, in seconds.
    pub step_seconds: f32,
}

impl Default for ScriptPreferences {
    fn default() -> Self {
        Self {
            moves: " urdtfl".to_string(),
            step_seconds: 1.0,
        }
    }
}

impl ScriptPreferences {
    /// Returns the time between script steps. Invalid or zero values are
    /// treated as one second.
    pub fn step(&self) -> Duration {
        match Duration::try_from_secs_f32(self.step_seconds) {
            Ok(d) if !d.is_zero() => d,
            _ => {
                log::warn!("invalid script step {}; using 1 second", self.step_seconds);
                Duration::from_secs(1)
            }
        }
    }
}
