//! Quaternion representation of 3D rotations.
//!
//! A unit quaternion (also called a versor) represents a rotation in 3D space.
//! Quaternions compose without gimbal lock and interpolate smoothly, which
//! makes them much more convenient to work with than Euler angles.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::approx_cmp::{approx_eq, to_approx_integer};
use crate::{Float, Vector3};

/// Dot product above which [`Rotation::slerp()`] falls back to linear
/// interpolation.
const SLERP_LINEAR_THRESHOLD: Float = 0.9995;

/// Imaginary magnitude below which [`Rotation::to_axis_angle()`] reports no
/// axis.
const AXIS_ANGLE_DEGENERATE_THRESHOLD: Float = 0.001;

/// Quaternion `w + xi + yj + zk`.
///
/// When used as an orientation, a rotation **must** have norm 1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    /// Real component.
    pub w: Float,
    /// Coefficient of `i`.
    pub x: Float,
    /// Coefficient of `j`.
    pub y: Float,
    /// Coefficient of `k`.
    pub z: Float,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENT
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { w, x, y, z } = self;
        write!(f, "[{w}, ({x}, {y}, {z})]")
    }
}

/// Rotation expressed as an angle around an axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisAngle {
    /// Rotation angle in degrees.
    pub angle_degrees: Float,
    /// Unit axis of rotation, or zero if the rotation is (nearly) the
    /// identity.
    pub axis: Vector3,
}
impl AxisAngle {
    /// Converts back to a quaternion. A zero axis produces the identity.
    pub fn to_rotation(&self) -> Rotation {
        if self.axis == Vector3::ZERO {
            Rotation::IDENT
        } else {
            Rotation::from_axis_angle(self.angle_degrees.to_radians(), self.axis)
        }
    }
}

impl Rotation {
    /// Identity rotation.
    pub const IDENT: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Constructs a quaternion from raw components.
    pub const fn new(w: Float, x: Float, y: Float, z: Float) -> Self {
        Self { w, x, y, z }
    }

    /// Constructs a rotation by `angle` radians around `axis`, following the
    /// right-hand rule.
    ///
    /// `axis` does not need to be normalized. A zero axis is an invariant
    /// violation.
    pub fn from_axis_angle(angle: Float, axis: Vector3) -> Self {
        let Some(axis) = axis.normalize() else {
            debug_panic!("rotation axis must be nonzero");
            return Self::IDENT;
        };
        let half_angle = angle / 2.0;
        let s = half_angle.sin();
        Self::new(half_angle.cos(), axis.x * s, axis.y * s, axis.z * s).normalize()
    }

    /// Constructs a rotation from Euler angles in radians.
    pub fn from_euler(yaw: Float, pitch: Float, roll: Float) -> Self {
        let (sy, cy) = (yaw / 2.0).sin_cos();
        let (sr, cr) = (roll / 2.0).sin_cos();
        let (sp, cp) = (pitch / 2.0).sin_cos();

        Self::new(
            cy * cr * cp + sy * sr * sp,
            cy * sr * cp - sy * cr * sp,
            cy * cr * sp + sy * sr * cp,
            sy * cr * cp - cy * sr * sp,
        )
        .normalize()
    }

    /// Returns the product `self * other`, which applies `other` first and then
    /// `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w - a.z * b.y + a.y * b.z,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }

    /// Returns the 4D dot product of two quaternions.
    pub fn dot(&self, other: &Self) -> Float {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// Returns the Euclidean norm of the quaternion.
    pub fn norm(&self) -> Float {
        self.dot(self).sqrt()
    }
    /// Returns the quaternion scaled to norm 1.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the quaternion is zero. In release mode, an
    /// error is logged and the result is NaN.
    #[must_use]
    #[track_caller]
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            debug_panic!("cannot normalize zero quaternion");
        }
        *self * (1.0 / n)
    }

    /// Returns the conjugate, which negates the imaginary part.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }
    /// Returns the inverse rotation.
    ///
    /// For a unit quaternion this is the conjugate; normalizing guards against
    /// accumulated drift.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.conjugate().normalize()
    }

    /// Returns the imaginary part as a vector.
    pub fn imaginary(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Rotates a vector by computing `q * (0, v) * q⁻¹`.
    pub fn rotate_vector(&self, v: Vector3) -> Vector3 {
        let qv = Self::new(0.0, v.x, v.y, v.z);
        (self * qv * self.inverse()).imaginary()
    }

    /// Returns the rotation as an angle (in degrees) around an axis.
    ///
    /// If the imaginary part is too small to determine an axis, the axis is
    /// zero and the caller should treat the rotation as a no-op.
    pub fn to_axis_angle(&self) -> AxisAngle {
        let s = self.imaginary().mag();
        let angle_degrees = (2.0 * s.atan2(self.w)).to_degrees();
        let axis = if s < AXIS_ANGLE_DEGENERATE_THRESHOLD {
            Vector3::ZERO
        } else {
            self.imaginary().scale(1.0 / s)
        };
        AxisAngle {
            angle_degrees,
            axis,
        }
    }

    /// Spherically interpolates between two unit quaternions along the shortest
    /// path.
    ///
    /// `t = 0` returns `a` and `t = 1` returns `b` (or `-b`, which is the same
    /// rotation).
    pub fn slerp(a: &Self, b: &Self, t: Float) -> Self {
        let mut b = *b;
        let mut dot = a.dot(&b);
        if dot < 0.0 {
            b = -b;
            dot = -dot;
        }

        if dot > SLERP_LINEAR_THRESHOLD {
            return (a + (b - a) * t).normalize();
        }

        // stay in domain of acos
        let dot = dot.clamp(-1.0, 1.0);
        let theta_0 = dot.acos(); // angle between inputs
        let theta = theta_0 * t; // angle between `a` and result
        let orthogonal = (b - a * dot).normalize(); // {a, orthogonal} is an orthonormal basis
        a * theta.cos() + orthogonal * theta.sin()
    }

    /// Returns whether two quaternions represent the same rotation. `q` and
    /// `-q` are equivalent.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        use approx::AbsDiffEq;

        let eps = crate::EPSILON;
        self.abs_diff_eq(other, eps) || self.abs_diff_eq(&-other, eps)
    }

    /// Returns the 3x3 rotation matrix, indexed as `[row][column]`.
    pub fn to_matrix(&self) -> [[Float; 3]; 3] {
        let cols = [0, 1, 2].map(|axis| self.rotate_vector(Vector3::unit(axis)));
        [0, 1, 2].map(|row| cols.map(|col| col.get(row)))
    }

    /// Returns whether the rotation is a composition of quarter turns around
    /// cardinal axes, i.e., whether it maps each coordinate axis onto a
    /// coordinate axis.
    pub fn is_quarter_turn_multiple(&self) -> bool {
        self.to_matrix()
            .iter()
            .flatten()
            .all(|&entry| to_approx_integer(entry).is_some_and(|i| (-1..=1).contains(&i)))
    }

    /// Returns whether the quaternion has norm 1.
    pub fn is_unit(&self) -> bool {
        approx_eq(&self.norm(), &1.0)
    }
}

impl Mul<&Rotation> for &Rotation {
    type Output = Rotation;

    fn mul(self, rhs: &Rotation) -> Self::Output {
        self.compose(rhs)
    }
}
impl Add<&Rotation> for &Rotation {
    type Output = Rotation;

    fn add(self, rhs: &Rotation) -> Self::Output {
        Rotation::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Sub<&Rotation> for &Rotation {
    type Output = Rotation;

    fn sub(self, rhs: &Rotation) -> Self::Output {
        Rotation::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
forward_ref_binops! {
    Mul::mul for Rotation;
    Add::add for Rotation;
    Sub::sub for Rotation;
}

impl Mul<Float> for Rotation {
    type Output = Rotation;

    fn mul(self, rhs: Float) -> Self::Output {
        Rotation::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl Mul<Float> for &Rotation {
    type Output = Rotation;

    fn mul(self, rhs: Float) -> Self::Output {
        *self * rhs
    }
}

impl Neg for Rotation {
    type Output = Rotation;

    fn neg(self) -> Self::Output {
        Rotation::new(-self.w, -self.x, -self.y, -self.z)
    }
}
impl Neg for &Rotation {
    type Output = Rotation;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl_abs_diff_eq_by_fields!(impl for Rotation { w, x, y, z });
