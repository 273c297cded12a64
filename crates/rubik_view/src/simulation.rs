use rubik_core::{Cube, Move, Stickers};
use rubik_prefs::{AnimationPreferences, Preferences};
use rubikmath::{Float, Rotation, Vector3};
use web_time::Duration;

use crate::animations::TwistAnimationState;

/// Cube simulation, which manages the cube state, the twist animation, and the
/// view orientation.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Cube state, including any partial turn in progress.
    cube: Cube,
    /// Twist animation state.
    twist_anim: TwistAnimationState,
    /// Time for a quarter turn. Zero means moves are applied instantly.
    move_duration: Duration,

    /// Current view orientation.
    view: Rotation,
    /// View orientation to return to on reset.
    initial_view: Rotation,
    /// Degrees of view rotation per pixel of drag per second.
    drag_sensitivity: Float,

    /// Every move issued so far, including the one being animated.
    history: Vec<Move>,
}

impl Default for CubeSimulation {
    fn default() -> Self {
        Self::from_prefs(&Preferences::default())
    }
}

impl CubeSimulation {
    /// Constructs a new simulation with a solved cube.
    pub fn new(animation_prefs: &AnimationPreferences, view: Rotation) -> Self {
        Self {
            cube: Cube::new(),
            twist_anim: TwistAnimationState::default(),
            move_duration: animation_prefs.duration(),

            view,
            initial_view: view,
            drag_sensitivity: 1.0,

            history: vec![],
        }
    }
    /// Constructs a new simulation with a solved cube, using the animation and
    /// view preferences.
    pub fn from_prefs(prefs: &Preferences) -> Self {
        let mut ret = Self::new(&prefs.animation, prefs.view.initial_orientation());
        ret.drag_sensitivity = Float::from(prefs.view.drag_sensitivity);
        ret
    }

    /// Returns the cube, including any partial turn in progress.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns the cube as it will be once the current turn completes.
    pub fn settled_cube(&self) -> Cube {
        let mut ret = self.cube.clone();
        self.twist_anim.clone().finish(&mut ret);
        ret
    }
    /// Returns the pose of every cubelet in view space, for drawing.
    pub fn cubelets(&self) -> impl Iterator<Item = CubeletPose> + '_ {
        self.cube
            .cubelets()
            .iter()
            .map(|c| CubeletPose {
                home: c.home(),
                position: self.view.rotate_vector(c.position),
                orientation: self.view * c.orientation,
                stickers: *c.stickers(),
            })
    }
    /// Returns every move issued so far, in order.
    ///
    /// Nothing is ever dropped from the history, so it keeps growing for as
    /// long as a [`crate::ScriptPlayer`] drives the simulation.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    /// Returns the twist animation state.
    pub fn twist_anim(&self) -> &TwistAnimationState {
        &self.twist_anim
    }
    /// Returns whether a turn is in progress.
    pub fn is_animating(&self) -> bool {
        self.twist_anim.is_turning()
    }
    /// Returns whether the cube is solved once any turn in progress completes.
    pub fn is_solved(&self) -> bool {
        self.settled_cube().is_solved()
    }

    /// Returns the time for a quarter turn.
    pub fn move_duration(&self) -> Duration {
        self.move_duration
    }
    /// Sets the time for a quarter turn. Zero makes later moves instant.
    pub fn set_move_duration(&mut self, move_duration: Duration) {
        self.move_duration = move_duration;
    }

    /// Applies the move written as `ch`. Returns `false` and does nothing if
    /// `ch` is not a move.
    pub fn apply_move(&mut self, ch: char) -> bool {
        match Move::from_char(ch) {
            Some(twist) => {
                self.do_move(twist);
                true
            }
            None => {
                log::trace!("ignoring non-move character {ch:?}");
                false
            }
        }
    }
    /// Applies a move, animating it if the move duration is nonzero.
    ///
    /// Any turn already in progress completes instantly first.
    pub fn do_move(&mut self, twist: Move) {
        log::debug!("move {twist}");
        if self.move_duration.is_zero() {
            self.finish_animation();
            self.cube.do_move(twist);
        } else {
            if self.is_animating() {
                log::trace!("completing previous turn early");
            }
            self.twist_anim.start(&mut self.cube, twist);
        }
        self.history.push(twist);
    }

    /// Advances the animation by `delta`. Returns whether the cube must be
    /// redrawn.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.twist_anim
            .proceed(&mut self.cube, delta, self.move_duration)
    }
    /// Completes any turn in progress instantly.
    pub fn finish_animation(&mut self) {
        self.twist_anim.finish(&mut self.cube);
    }

    /// Returns the view orientation.
    pub fn view_orientation(&self) -> Rotation {
        self.view
    }
    /// Rotates the view by `dx` degrees of pitch and `dy` degrees of roll.
    pub fn rotate_view(&mut self, dx: Float, dy: Float) {
        let delta = Rotation::from_euler(0.0, dx.to_radians(), dy.to_radians());
        self.view = (delta * self.view).normalize();
    }
    /// Rotates the view in response to a mouse drag of `dx` by `dy` pixels held
    /// for `delta`.
    pub fn drag_view(&mut self, dx: Float, dy: Float, delta: Duration) {
        let scale = self.drag_sensitivity * delta.as_secs_f64();
        self.rotate_view(dx * scale, dy * scale);
    }

    /// Resets the cube to the solved state and the view to its initial
    /// orientation, discarding any animation and history.
    pub fn reset(&mut self) {
        self.cube = Cube::new();
        self.twist_anim = TwistAnimationState::Idle;
        self.view = self.initial_view;
        self.history.clear();
    }
}

/// Cubelet transformed by the view orientation.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CubeletPose {
    /// Position of the cubelet in the solved state.
    pub home: [i8; 3],
    /// Position in view space.
    pub position: Vector3,
    /// Orientation in view space.
    pub orientation: Rotation,
    /// Stickers, in local face order.
    pub stickers: Stickers,
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use pretty_assertions::assert_eq;
    use rubikmath::assert_approx_eq;

    use super::*;

    fn instant_sim() -> CubeSimulation {
        let mut sim = CubeSimulation::default();
        sim.set_move_duration(Duration::ZERO);
        sim
    }

    #[test]
    fn test_default_view() {
        let sim = CubeSimulation::default();
        assert_approx_eq!(
            sim.view_orientation(),
            Rotation::from_euler(0.0, FRAC_PI_4, FRAC_PI_4),
        );
        assert_eq!(sim.move_duration(), Duration::from_secs_f32(0.9));
    }

    #[test]
    fn test_apply_move_ignores_unknown_characters() {
        let mut sim = instant_sim();
        assert!(!sim.apply_move('t'));
        assert!(!sim.apply_move(' '));
        assert_eq!(sim.cube(), &Cube::new());
        assert!(sim.history().is_empty());

        assert!(sim.apply_move('U'));
        assert_eq!(sim.history(), &[Move::from_char('U').unwrap()]);
        assert!(!sim.is_animating());
        assert!(!sim.is_solved());
    }

    #[test]
    fn test_is_solved_looks_past_animation() {
        let mut sim = CubeSimulation::default();
        sim.apply_move('f');
        sim.advance(Duration::from_millis(100));
        assert!(sim.is_animating());
        assert!(!sim.is_solved());

        sim.finish_animation();
        sim.apply_move('F');
        assert!(sim.is_solved());
        assert!(!sim.cube().is_solved());
    }

    #[test]
    fn test_rotate_view() {
        let mut sim = instant_sim();
        let before = sim.view_orientation();
        sim.rotate_view(0.0, 0.0);
        assert_approx_eq!(sim.view_orientation(), before);

        sim.rotate_view(90.0, 0.0);
        assert!(!sim.view_orientation().is_equivalent_to(&before));
        assert!(sim.view_orientation().is_unit());

        sim.reset();
        assert_approx_eq!(sim.view_orientation(), before);
    }

    #[test]
    fn test_drag_view_scales_by_time() {
        let mut a = instant_sim();
        let mut b = instant_sim();
        a.drag_view(10.0, -4.0, Duration::from_millis(500));
        b.rotate_view(5.0, -2.0);
        assert_approx_eq!(a.view_orientation(), b.view_orientation());
    }

    #[test]
    fn test_cubelet_poses_use_view() {
        let mut sim = instant_sim();
        sim.reset();
        let view = sim.view_orientation();
        for (pose, cubelet) in sim.cubelets().zip(sim.cube().cubelets()) {
            assert_eq!(pose.home, cubelet.home());
            assert_approx_eq!(pose.position, view.rotate_vector(cubelet.position));
        }
    }
}
