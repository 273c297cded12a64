use thiserror::Error;

/// Error produced when parsing a move sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Character is not a face label
    #[error("unknown move {ch:?} at index {index}")]
    UnknownMove {
        /// Byte index of the character in the input string.
        index: usize,
        /// Offending character.
        ch: char,
    },
}
