//! Single-letter move notation.
//!
//! Each move is one face label. A lowercase letter turns the face by -90°
//! around its centre's position vector; an uppercase letter turns it by +90°.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use rubikmath::Float;

use crate::{Face, ParseMoveError, QUARTER_TURN};

/// Quarter turn of one face.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face to turn.
    pub face: Face,
    /// Whether the move is written with an uppercase letter (+90°).
    pub inverse: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.char_indices();
        match (chars.next(), chars.next()) {
            (Some((_, ch)), None) => {
                Move::from_char(ch).ok_or(ParseMoveError::UnknownMove { index: 0, ch })
            }
            (None, _) => Err(ParseMoveError::UnknownMove { index: 0, ch: ' ' }),
            (Some(_), Some((index, ch))) => Err(ParseMoveError::UnknownMove { index, ch }),
        }
    }
}

impl Move {
    /// Constructs a move.
    pub fn new(face: Face, inverse: bool) -> Self {
        Self { face, inverse }
    }
    /// Returns the move written as `ch`, or `None` if `ch` is not a face label.
    pub fn from_char(ch: char) -> Option<Self> {
        let face = Face::from_label(ch.to_ascii_lowercase())?;
        Some(Self::new(face, ch.is_ascii_uppercase()))
    }
    /// Returns the letter for the move.
    pub fn to_char(self) -> char {
        let label = self.face.label();
        match self.inverse {
            true => label.to_ascii_uppercase(),
            false => label,
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.face, !self.inverse)
    }

    /// Returns the signed rotation angle of the move in radians, around the
    /// centre's position vector.
    pub fn angle(self) -> Float {
        match self.inverse {
            true => QUARTER_TURN,
            false => -QUARTER_TURN,
        }
    }
}

/// Parses a sequence of moves, ignoring whitespace.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.char_indices()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(index, ch)| Move::from_char(ch).ok_or(ParseMoveError::UnknownMove { index, ch }))
        .collect()
}

/// Formats a sequence of moves as a string with no separators.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().map(Move::to_char).join("")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_move_case() {
        let m = Move::from_char('u').unwrap();
        assert_eq!(m, Move::new(Face::U, false));
        assert_eq!(m.angle(), -QUARTER_TURN);
        assert_eq!(m.rev().to_char(), 'U');
        assert_eq!(m.rev().angle(), QUARTER_TURN);
        assert_eq!(Move::from_char('t'), None);
        assert_eq!(Move::from_char(' '), None);
    }

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves("uR d\tF").unwrap();
        assert_eq!(format_moves(moves.iter().copied()), "uRdF");
        assert_eq!(
            parse_moves("ur x"),
            Err(ParseMoveError::UnknownMove { index: 3, ch: 'x' }),
        );
        assert_eq!("L".parse(), Ok(Move::new(Face::L, true)));
        assert!("LL".parse::<Move>().is_err());
    }
}
