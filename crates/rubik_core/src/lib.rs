//! Cubelet geometry and quarter-turn logic for a 3x3x3 Rubik's cube.
//!
//! This crate only knows about quiescent cube states and instantaneous turns.
//! Animation lives in `rubik_view`.

mod cube;
mod cubelet;
mod errors;
mod face;
pub mod notation;
mod sticker;

pub use cube::Cube;
pub use cubelet::Cubelet;
pub use errors::ParseMoveError;
pub use face::Face;
pub use notation::{Move, format_moves, parse_moves};
pub use sticker::{STICKER_NORMALS, StickerColor, Stickers};

/// Number of cubelets in the cube.
pub const CUBELET_COUNT: usize = 27;

/// Angle of a quarter turn, in radians.
pub const QUARTER_TURN: rubikmath::Float = std::f64::consts::FRAC_PI_2;

/// Returns the index of the cubelet that starts at `grid` in a solved cube, or
/// `None` if `grid` is outside the cube.
///
/// Cubelets are created with X varying slowest and Z varying fastest.
pub fn home_index(grid: [i8; 3]) -> Option<usize> {
    let [x, y, z] = grid.map(|c| (-1..=1).contains(&c).then(|| (c + 1) as usize));
    Some(x? * 9 + y? * 3 + z?)
}
