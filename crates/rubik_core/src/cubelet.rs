use std::fmt;

use rubikmath::{Rotation, Vector3};

use crate::sticker::{STICKER_NORMALS, StickerColor, Stickers};

/// One of the 27 unit sub-cubes of the puzzle.
///
/// A cubelet has no identity beyond its position; turning the cube permutes
/// and reorients the fixed set of cubelets.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Cubelet {
    /// Current position. Between turns, every component is exactly -1, 0, or 1.
    pub position: Vector3,
    /// Current orientation relative to the solved state.
    pub orientation: Rotation,
    /// Position in the solved state.
    home: [i8; 3],
    /// Stickers, computed once from the home position.
    stickers: Stickers,
}

impl fmt::Display for Cubelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)
    }
}

impl Cubelet {
    /// Constructs a cubelet in its solved position.
    pub fn new(home: [i8; 3]) -> Self {
        Self {
            position: Vector3::from_grid(home),
            orientation: Rotation::IDENT,
            home,
            stickers: StickerColor::stickers_for(home),
        }
    }

    /// Returns the position of the cubelet in the solved state.
    pub fn home(&self) -> [i8; 3] {
        self.home
    }
    /// Returns the stickers on the cubelet, in local face order.
    pub fn stickers(&self) -> &Stickers {
        &self.stickers
    }
    /// Returns the current grid cell of the cubelet, or `None` if it is between
    /// grid cells (e.g., mid-turn).
    pub fn grid_position(&self) -> Option<[i8; 3]> {
        self.position.to_grid()
    }

    /// Applies a rotation about the origin to the cubelet, updating both its
    /// orientation and position.
    pub fn rotate(&mut self, delta: &Rotation) {
        self.orientation = delta * self.orientation;
        self.position = delta.rotate_vector(self.position);
    }
    /// Snaps the position to the nearest grid cell and renormalizes the
    /// orientation.
    pub fn align(&mut self) {
        self.position = self.position.round();
        self.orientation = self.orientation.normalize();
    }

    /// Returns each sticker along with the direction it currently faces.
    pub fn sticker_normals(&self) -> impl Iterator<Item = (StickerColor, Vector3)> + '_ {
        std::iter::zip(&self.stickers, STICKER_NORMALS).filter_map(|(&color, normal)| {
            Some((color?, self.orientation.rotate_vector(Vector3::from_grid(normal))))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use rubikmath::{assert_approx_eq, vector3};

    use super::*;

    #[test]
    fn test_rotate_moves_position_and_stickers() {
        let mut c = Cubelet::new([0, 1, 1]);
        c.rotate(&Rotation::from_axis_angle(FRAC_PI_2, vector3![1, 0, 0]));
        assert_approx_eq!(c.position, vector3![0, -1, 1]);
        c.align();
        assert_eq!(c.grid_position(), Some([0, -1, 1]));

        // White sticker used to face +Y; now it faces +Z.
        let (color, normal) = c
            .sticker_normals()
            .find(|(color, _)| *color == StickerColor::White)
            .unwrap();
        assert_eq!(color, StickerColor::White);
        assert_approx_eq!(normal, vector3![0, 0, 1]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cubelet::new([-1, 0, 1]).to_string(), "(-1, 0, 1)");
    }
}
