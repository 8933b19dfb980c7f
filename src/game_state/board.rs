//! 8×8 mailbox board.
//!
//! Purely representational: no legality checks happen here. All mutation in
//! normal play goes through `move_generation::legal_move_apply`.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.row() as usize][square.col() as usize] = Some(piece);
    }

    /// Empties `square`, returning whatever stood there.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Squares holding a piece of `color`, in row-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// First square holding `piece`, scanning in row-major order.
    pub fn find(&self, piece: Piece) -> Option<Square> {
        Square::all().find(|sq| self.piece_at(*sq) == Some(piece))
    }
}
