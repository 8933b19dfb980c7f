//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Every variant is a
//! local, caller-recoverable condition: an operation that returns one of them
//! has not mutated the game state.
//!
//! Undo on an empty move log is not an error: `engine::undo` returns `false`.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The requested move is not in the current legal move set.
    ///
    /// Payload: coordinate notation of the request (for example `"e2e5"`).
    IllegalMove(String),

    /// Row/column coordinates outside the 8×8 grid.
    ///
    /// Payload: (row, col) as given by the caller.
    OutOfBoundsSquare((i8, i8)),

    /// A square or long-algebraic move string failed to parse.
    InvalidAlgebraicString(String),

    /// FEN setup text was malformed or describes an unusable position.
    InvalidFENstring(String),

    /// A query needed a piece on this square and found it empty.
    NoPieceOnSquare(Square),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::IllegalMove(mv) => write!(f, "illegal move: {mv}"),
            ChessErrors::OutOfBoundsSquare((row, col)) => {
                write!(f, "square ({row}, {col}) is outside the board")
            }
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic string: {s}"),
            ChessErrors::InvalidFENstring(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::NoPieceOnSquare(sq) => {
                write!(f, "no piece on {}", square_to_algebraic(*sq))
            }
        }
    }
}

impl Error for ChessErrors {}
