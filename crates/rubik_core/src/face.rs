use std::fmt;

use strum::{EnumCount, EnumIter};

/// Face of the cube, identified by the cubelet at its centre.
///
/// Labels and centre positions match the construction order of the cube, so
/// `R` sits on the negative X side and `L` on the positive X side.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
pub enum Face {
    /// Face centred at `(-1, 0, 0)`.
    R,
    /// Face centred at `(0, -1, 0)`.
    D,
    /// Face centred at `(0, 0, -1)`.
    B,
    /// Face centred at `(0, 0, 1)`.
    F,
    /// Face centred at `(0, 1, 0)`.
    U,
    /// Face centred at `(1, 0, 0)`.
    L,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Face {
    /// Returns the lowercase label for the face.
    pub fn label(self) -> char {
        match self {
            Face::R => 'r',
            Face::D => 'd',
            Face::B => 'b',
            Face::F => 'f',
            Face::U => 'u',
            Face::L => 'l',
        }
    }
    /// Returns the face with a lowercase label, or `None` if there is none.
    pub fn from_label(label: char) -> Option<Self> {
        match label {
            'r' => Some(Face::R),
            'd' => Some(Face::D),
            'b' => Some(Face::B),
            'f' => Some(Face::F),
            'u' => Some(Face::U),
            'l' => Some(Face::L),
            _ => None,
        }
    }

    /// Returns the grid position of the face's centre cubelet.
    pub fn centre(self) -> [i8; 3] {
        let mut ret = [0; 3];
        ret[self.axis() as usize] = self.sign();
        ret
    }
    /// Returns the axis (0 = X, 1 = Y, 2 = Z) perpendicular to the face.
    pub fn axis(self) -> u8 {
        match self {
            Face::R | Face::L => 0,
            Face::D | Face::U => 1,
            Face::B | Face::F => 2,
        }
    }
    /// Returns the sign of the face's centre along its axis.
    pub fn sign(self) -> i8 {
        match self {
            Face::R | Face::D | Face::B => -1,
            Face::F | Face::U | Face::L => 1,
        }
    }

    /// Returns the index of the face, for use in per-face arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_face_labels_round_trip() {
        for face in Face::iter() {
            assert_eq!(Face::from_label(face.label()), Some(face));
            assert_eq!(face.to_string(), face.label().to_string());
        }
        assert_eq!(Face::from_label('x'), None);
        assert_eq!(Face::from_label('R'), None);
    }

    #[test]
    fn test_face_centres() {
        assert_eq!(Face::R.centre(), [-1, 0, 0]);
        assert_eq!(Face::U.centre(), [0, 1, 0]);
        assert_eq!(Face::F.centre(), [0, 0, 1]);
        assert_eq!(Face::COUNT, 6);
    }
}
