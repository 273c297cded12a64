use rubikmath::Vector3;
use strum::Display;

/// Outward normals of the six faces of a cubelet, in local face order.
pub const STICKER_NORMALS: [[i8; 3]; 6] = [
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

/// Colored stickers on a cubelet, in the same order as [`STICKER_NORMALS`].
///
/// Faces on the interior of the cube have no sticker.
pub type Stickers = [Option<StickerColor>; 6];

/// Sticker color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum StickerColor {
    /// Sticker facing negative X in the solved state.
    Orange,
    /// Sticker facing positive X in the solved state.
    Red,
    /// Sticker facing negative Y in the solved state.
    Yellow,
    /// Sticker facing positive Y in the solved state.
    White,
    /// Sticker facing negative Z in the solved state.
    Blue,
    /// Sticker facing positive Z in the solved state.
    Green,
}

impl StickerColor {
    const ALL: [StickerColor; 6] = [
        StickerColor::Orange,
        StickerColor::Red,
        StickerColor::Yellow,
        StickerColor::White,
        StickerColor::Blue,
        StickerColor::Green,
    ];

    /// Returns the direction this color faces when the cube is solved.
    pub fn home_normal(self) -> Vector3 {
        Vector3::from_grid(STICKER_NORMALS[self as usize])
    }

    /// Returns the stickers visible on the cubelet that starts at `home`.
    pub fn stickers_for(home: [i8; 3]) -> Stickers {
        let mut ret = [None; 6];
        for (i, normal) in STICKER_NORMALS.iter().enumerate() {
            let exterior = (0..3).any(|axis| normal[axis] != 0 && normal[axis] == home[axis]);
            if exterior {
                ret[i] = Some(Self::ALL[i]);
            }
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_corner_stickers() {
        use StickerColor::*;

        assert_eq!(
            StickerColor::stickers_for([-1, 1, 1]),
            [Some(Orange), None, None, Some(White), None, Some(Green)],
        );
    }

    #[test]
    fn test_interior_has_no_stickers() {
        assert_eq!(StickerColor::stickers_for([0, 0, 0]), [None; 6]);
        assert_eq!(
            StickerColor::stickers_for([0, -1, 0]).iter().flatten().count(),
            1,
        );
    }
}
