//! 3D vector math.

use std::fmt;
use std::ops::*;

use crate::approx_cmp::{is_approx_nonzero, round_to_grid, to_approx_integer};
use crate::Float;

/// Constructs a 3D vector from its three components.
#[macro_export]
macro_rules! vector3 {
    [$x:expr, $y:expr, $z:expr $(,)?] => {
        $crate::Vector3::new($x as $crate::Float, $y as $crate::Float, $z as $crate::Float)
    };
}

/// 3D vector. Indexing out of bounds returns zero.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3 {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
    /// Z component.
    pub z: Float,
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        self.x.fmt(f)?;
        write!(f, ", ")?;
        self.y.fmt(f)?;
        write!(f, ", ")?;
        self.z.fmt(f)?;
        write!(f, ")")
    }
}

impl Vector3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
    /// Returns a unit vector along an axis.
    ///
    /// Axes beyond Z produce the zero vector.
    pub fn unit(axis: u8) -> Self {
        let mut ret = Self::ZERO;
        if let Some(component) = ret.get_mut(axis) {
            *component = 1.0;
        }
        ret
    }
    /// Constructs a vector from integer grid coordinates.
    pub fn from_grid(grid: [i8; 3]) -> Self {
        let [x, y, z] = grid;
        Self::new(x as Float, y as Float, z as Float)
    }

    /// Returns a component of the vector. If the index is out of bounds,
    /// returns zero.
    pub fn get(&self, axis: u8) -> Float {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => 0.0,
        }
    }
    /// Returns a mutable reference to a component of the vector, or `None` if
    /// the index is out of bounds.
    pub fn get_mut(&mut self, axis: u8) -> Option<&mut Float> {
        match axis {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            _ => None,
        }
    }
    /// Returns the components as an array.
    pub fn to_array(self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }
    /// Returns an iterator over the components of the vector.
    pub fn iter(self) -> impl Iterator<Item = Float> {
        self.to_array().into_iter()
    }
    /// Returns an iterator over the nonzero components of the vector along with
    /// their axes.
    pub fn iter_nonzero(self) -> impl Iterator<Item = (u8, Float)> {
        (0..3).filter_map(move |i| {
            let x = self.get(i);
            is_approx_nonzero(&x).then_some((i, x))
        })
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(&self, rhs: &Self) -> Float {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
    /// Returns the cross product of two vectors.
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Returns the magnitude of the vector.
    pub fn mag(&self) -> Float {
        self.mag2().sqrt()
    }
    /// Returns the squared magnitude of the vector.
    pub fn mag2(&self) -> Float {
        self.dot(self)
    }

    /// Returns a normalized copy of the vector, or `None` if the vector is
    /// zero.
    #[must_use]
    pub fn normalize(&self) -> Option<Self> {
        let mult = 1.0 / self.mag();
        mult.is_finite().then(|| self.scale(mult))
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(&self, scalar: Float) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Returns a copy of the vector with each component rounded to the nearest
    /// integer.
    #[must_use]
    pub fn round(&self) -> Self {
        Self::new(
            round_to_grid(self.x),
            round_to_grid(self.y),
            round_to_grid(self.z),
        )
    }
    /// Returns the integer grid cell occupied by the vector, or `None` if any
    /// component is not approximately an integer in the range of `i8`.
    pub fn to_grid(&self) -> Option<[i8; 3]> {
        let mut ret = [0; 3];
        for (out, x) in std::iter::zip(&mut ret, self.iter()) {
            *out = i8::try_from(to_approx_integer(x)?).ok()?;
        }
        Some(ret)
    }
}

impl Add<&Vector3> for &Vector3 {
    type Output = Vector3;

    fn add(self, rhs: &Vector3) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Sub<&Vector3> for &Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: &Vector3) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
forward_ref_binops! {
    Add::add for Vector3;
    Sub::sub for Vector3;
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
impl Neg for &Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Mul<Float> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Float) -> Self::Output {
        self.scale(rhs)
    }
}
impl Mul<Float> for &Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Float) -> Self::Output {
        self.scale(rhs)
    }
}

impl num_traits::Zero for Vector3 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl_abs_diff_eq_by_fields!(impl for Vector3 { x, y, z });

impl From<[Float; 3]> for Vector3 {
    fn from([x, y, z]: [Float; 3]) -> Self {
        Self::new(x, y, z)
    }
}
impl From<Vector3> for [Float; 3] {
    fn from(value: Vector3) -> Self {
        value.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_vector_add() {
        let v1 = vector3![1.0, 2.0, -10.0];
        let v2 = vector3![-5.0, 0.0, 0.0];
        assert_eq!(v1 + v2, vector3![-4.0, 2.0, -10.0]);
        assert_eq!(&v2 - &v1, vector3![-6.0, -2.0, 10.0]);
    }

    #[test]
    pub fn test_vector_neg() {
        let v1 = vector3![1.0, 2.0, -10.0];
        assert_eq!(-&v1, vector3![-1.0, -2.0, 10.0]);
    }

    #[test]
    pub fn test_dot_and_cross_product() {
        let v1 = vector3![1.0, 2.0, -10.0];
        let v2 = vector3![-5.0, 16.0, 0.0];
        assert_eq!(v1.dot(&v2), 27.0);
        assert_eq!(Vector3::unit(0).cross(&Vector3::unit(1)), Vector3::unit(2));
    }

    #[test]
    pub fn test_iter_nonzero() {
        let v = vector3![0.0, -1.0, 0.0000000001];
        assert_eq!(v.iter_nonzero().collect::<Vec<_>>(), vec![(1, -1.0)]);
    }

    #[test]
    pub fn test_grid() {
        let v = vector3![0.9999999999, -0.0000000002, -1.0000000003];
        assert_eq!(v.to_grid(), Some([1, 0, -1]));
        assert_eq!(v.round(), vector3![1, 0, -1]);
        assert_eq!(vector3![0.5, 0, 0].to_grid(), None);
    }

    #[test]
    pub fn test_normalize_zero() {
        assert_eq!(Vector3::ZERO.normalize(), None);
        crate::assert_approx_eq!(
            vector3![3, 0, 4].normalize().unwrap(),
            vector3![0.6, 0, 0.8],
        );
    }
}
