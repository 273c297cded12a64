use rubik_core::{Cube, Cubelet, Move, QUARTER_TURN};
use rubikmath::{EPSILON, Float, Rotation, Vector3};
use web_time::Duration;

/// State of the twist animation. At most one face turns at a time.
#[derive(Debug, Default, Clone)]
pub enum TwistAnimationState {
    /// No turn is in progress.
    #[default]
    Idle,
    /// A face is partway through a quarter turn.
    Turning(TwistAnimation),
}

impl TwistAnimationState {
    /// Begins animating `twist` on `cube`, completing any turn that is already
    /// in progress first.
    pub fn start(&mut self, cube: &mut Cube, twist: Move) {
        self.finish(cube);
        let Some((axis, layer)) = cube.turning_axis(twist.face) else {
            return;
        };
        *self = Self::Turning(TwistAnimation {
            twist,
            grip: cube.face_members(twist.face),
            axis,
            layer,
            remaining: twist.angle(),
            snapshot: cube.cubelets().to_vec(),
        });
    }

    /// Steps the animation forward. Returns whether the cube should be redrawn
    /// next frame.
    ///
    /// A zero `move_duration` completes the turn immediately.
    pub fn proceed(&mut self, cube: &mut Cube, delta: Duration, move_duration: Duration) -> bool {
        let Self::Turning(anim) = self else {
            return false; // Do not request redraw
        };

        // Fraction of a quarter turn covered this frame, in radians.
        let mut step = QUARTER_TURN * delta.as_secs_f64() / move_duration.as_secs_f64();
        if anim.remaining < 0.0 {
            step = -step;
        }

        // Division by zero produces infinity or NaN; both finish the turn. So
        // does a step that reaches the end, allowing for the error accumulated
        // in `remaining`.
        if step.is_nan() || step.abs() + EPSILON >= anim.remaining.abs() {
            self.finish(cube);
        } else {
            let delta = Rotation::from_axis_angle(step, anim.axis_vector());
            cube.rotate_cubelets(&anim.grip, &delta, Some((anim.axis, anim.layer)));
            anim.remaining -= step;
        }

        true // Request redraw
    }

    /// Completes any turn in progress by restoring the cube to its state before
    /// the turn and applying the full quarter turn at once, so that no rounding
    /// error from the partial steps remains.
    pub fn finish(&mut self, cube: &mut Cube) {
        if let Self::Turning(anim) = std::mem::take(self) {
            cube.restore(&anim.snapshot);
            cube.do_move(anim.twist);
        }
    }

    /// Returns the turn in progress, if any.
    pub fn current(&self) -> Option<&TwistAnimation> {
        match self {
            Self::Idle => None,
            Self::Turning(anim) => Some(anim),
        }
    }

    /// Returns whether a turn is in progress.
    pub fn is_turning(&self) -> bool {
        matches!(self, Self::Turning(_))
    }
}

/// Quarter turn that is partway complete.
#[derive(Debug, Clone)]
pub struct TwistAnimation {
    /// Move being animated.
    pub twist: Move,
    /// Indices of the cubelets that turn.
    pub grip: Vec<usize>,
    /// Axis perpendicular to the turning layer.
    pub axis: u8,
    /// Coordinate of the turning layer along `axis`, which every gripped
    /// cubelet keeps for the whole turn.
    pub layer: Float,
    /// Signed angle still to turn, in radians.
    pub remaining: Float,
    /// Cubelets before the turn started.
    pub snapshot: Vec<Cubelet>,
}

impl TwistAnimation {
    /// Returns the axis of rotation, which is the position of the face's centre
    /// cubelet.
    pub fn axis_vector(&self) -> Vector3 {
        Vector3::unit(self.axis) * self.layer
    }

    /// Returns the fraction of the turn that has been completed, from 0.0 to
    /// 1.0.
    pub fn progress(&self) -> Float {
        1.0 - self.remaining.abs() / QUARTER_TURN
    }
}
