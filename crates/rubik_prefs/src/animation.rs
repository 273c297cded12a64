use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Preferences for twist animation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Time for a quarter turn to complete, in seconds. Zero disables
    /// animation.
    pub move_duration: f32,
    /// What happens to the script clock when a new script starts.
    pub script_clock: ScriptClockMode,
}

impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            move_duration: 0.9,
            script_clock: ScriptClockMode::default(),
        }
    }
}

impl AnimationPreferences {
    /// Returns the move duration. Negative or non-finite values are treated as
    /// zero.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.move_duration).unwrap_or_else(|e| {
            log::warn!("invalid move duration {}: {e}", self.move_duration);
            Duration::ZERO
        })
    }
}

/// Policy for the script clock when a script is restarted.
#[derive(
    Serialize, Deserialize, Debug, Display, EnumString, Default, Copy, Clone, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScriptClockMode {
    /// The clock and step pointer keep running across restarts.
    #[default]
    Persistent,
    /// Restarting a script resets the clock and the step pointer.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_duration_is_zero() {
        for move_duration in [-1.0, f32::NAN, f32::INFINITY] {
            let prefs = AnimationPreferences {
                move_duration,
                ..Default::default()
            };
            assert_eq!(prefs.duration(), Duration::ZERO);
        }
        assert_eq!(
            AnimationPreferences::default().duration(),
            Duration::from_secs_f32(0.9),
        );
    }

    #[test]
    fn test_script_clock_names() {
        assert_eq!(ScriptClockMode::Restart.to_string(), "restart");
        assert_eq!("persistent".parse(), Ok(ScriptClockMode::Persistent));
    }
}
