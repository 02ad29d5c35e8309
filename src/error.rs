//! Error types for the atlas crate

use thiserror::Error;

use crate::board::Coord;

/// Main error type for the atlas crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("coordinate ({row}, {col}) is outside the 3x3 grid")]
    InvalidCoord { row: usize, col: usize },

    #[error("cell {coord} is already occupied")]
    OccupiedCell { coord: Coord },

    #[error(
        "canonical entries {first} and {second} are symmetry-equivalent; the enumeration filter is broken"
    )]
    DuplicateCanonical { first: usize, second: usize },

    #[error(
        "board '{board}' with X at {mv} and O at {response} resolves to no canonical entry and has no winner"
    )]
    UnresolvedRoute {
        board: String,
        mv: Coord,
        response: Coord,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
