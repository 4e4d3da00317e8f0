//! Error types for the engine

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal moves: the board is full")]
    NoLegalMoves,

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("{what} {value} is outside the board")]
    OutOfRange { what: &'static str, value: usize },

    #[error("'{input}' is not a cell number 1-9")]
    InvalidInput { input: String },

    #[error("board string has {got} cells, expected 9 in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
