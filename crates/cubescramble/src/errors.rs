use thiserror::Error;

/// Error produced while building a move space or generating a scramble.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// The puzzle does not supply one of its capabilities.
    #[error("puzzle capability `{capability}` is not implemented")]
    NotImplemented {
        /// Name of the missing capability, such as `"faces"`.
        capability: &'static str,
    },
    /// The puzzle's move space is empty, or no move is allowed after the
    /// previous one, so there is nothing to draw from.
    #[error("invalid puzzle configuration: {0}")]
    InvalidConfiguration(String),
}

/// Error encountered while parsing a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError<'a> {
    /// String does not have the shape of a move.
    #[error("bad move: {0:?}")]
    BadMove(&'a str),
    /// Face label is not one of the puzzle's faces.
    #[error("bad face: {0:?}")]
    BadFace(&'a str),
    /// Depth prefix is not a valid depth for the puzzle.
    #[error("bad depth: {0:?}")]
    BadDepth(&'a str),
    /// The puzzle itself could not describe its move space.
    #[error("{0}")]
    Puzzle(#[from] ScrambleError),
}

