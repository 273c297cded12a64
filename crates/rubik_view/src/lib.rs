//! Time-driven cube simulation, to ensure consistent feel across frontends.
//!
//! [`CubeSimulation`] owns the cube, animates one quarter turn at a time, and
//! tracks the view orientation. [`ScriptPlayer`] feeds it moves from a string
//! on a clock.

mod animations;
mod script;
mod simulation;

pub use animations::{TwistAnimation, TwistAnimationState};
pub use script::{ScriptPlayer, ScriptStep};
pub use simulation::{CubeSimulation, CubeletPose};

pub use rubik_prefs::ScriptClockMode;
