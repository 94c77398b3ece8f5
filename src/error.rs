//! Error types for the maze race crate.

use thiserror::Error;

use crate::interface::Side;

/// Main error type for the crate.
///
/// The grid variants are raised while constructing a [`Grid`](crate::Grid),
/// so a board that passes construction is always well-formed.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("grid dimensions {rows}x{cols} must both be odd and at least 3")]
    BadDimensions { rows: usize, cols: usize },

    #[error("invalid character '{character}' at ({row}, {col})")]
    UnknownCell { character: char, row: usize, col: usize },

    #[error("piece {side} found on connector cell ({row}, {col})")]
    PieceOffRoom { side: Side, row: usize, col: usize },

    #[error("no room holds piece {side}")]
    MissingPiece { side: Side },

    #[error("piece {side} appears {count} times")]
    DuplicatePiece { side: Side, count: usize },

    #[error("room ({row}, {col}) is a wall")]
    WalledRoom { row: usize, col: usize },

    #[error("({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },

    #[error("game stopped after {turns} turns without a winner")]
    TurnLimit { turns: usize },

    #[error("strategy for {side} chose no move although it has legal moves")]
    NoMoveChosen { side: Side },

    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
