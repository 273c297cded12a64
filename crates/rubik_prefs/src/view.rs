use rubikmath::{Float, Rotation};
use serde::{Deserialize, Serialize};

/// Preferences for the camera.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewPreferences {
    /// Initial yaw, in degrees.
    pub yaw: f32,
    /// Initial pitch, in degrees.
    pub pitch: f32,
    /// Initial roll, in degrees.
    pub roll: f32,
    /// Degrees of view rotation per pixel of drag per second.
    pub drag_sensitivity: f32,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 45.0,
            roll: 45.0,
            drag_sensitivity: 1.0,
        }
    }
}

impl ViewPreferences {
    /// Returns the initial view orientation.
    pub fn initial_orientation(&self) -> Rotation {
        Rotation::from_euler(
            Float::from(self.yaw).to_radians(),
            Float::from(self.pitch).to_radians(),
            Float::from(self.roll).to_radians(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use rubikmath::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_orientation() {
        assert_approx_eq!(
            ViewPreferences::default().initial_orientation(),
            Rotation::from_euler(0.0, FRAC_PI_4, FRAC_PI_4),
        );
    }
}
