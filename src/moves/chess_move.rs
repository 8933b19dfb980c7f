//! The move value.
//!
//! A `ChessMove` describes one ply. Equality and hashing use only the
//! identity tuple `(start, end, promotion)`, so a move built by a caller from
//! two clicked squares compares equal to the fully annotated move produced by
//! the generator.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub castle: Option<CastleSide>,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    /// Plain move: no capture, no special annotations.
    #[inline]
    pub const fn quiet(start: Square, end: Square, piece_moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: None,
            is_en_passant: false,
            castle: None,
            promotion: None,
        }
    }

    /// Builds a move from two squares by reading the board, the way a UI does
    /// from two clicks. Special-move flags are left unset; the engine fills
    /// them in when the move is matched against the legal set.
    pub fn from_board(board: &Board, start: Square, end: Square) -> Result<Self, ChessErrors> {
        let piece_moved = board
            .piece_at(start)
            .ok_or(ChessErrors::NoPieceOnSquare(start))?;
        Ok(Self {
            piece_captured: board.piece_at(end),
            ..Self::quiet(start, end, piece_moved)
        })
    }

    #[inline]
    pub fn with_promotion(mut self, promotion: Option<PieceKind>) -> Self {
        self.promotion = promotion;
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row().abs_diff(self.end.row()) == 2
    }

    /// Square the captured pawn stands on for an en-passant capture: same row
    /// as the mover, same column as the destination.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        Square::at(self.start.row(), self.end.col())
    }

    /// Piece standing on `end` once the move is applied.
    #[inline]
    pub fn piece_after_move(&self) -> Piece {
        match self.promotion {
            Some(kind) => Piece::new(self.piece_moved.color, kind),
            None => self.piece_moved,
        }
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.promotion == other.promotion
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).expect("test square on board")
    }

    #[test]
    fn identity_ignores_annotations() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let plain = ChessMove::quiet(sq(3, 4), sq(2, 3), pawn);
        let annotated = ChessMove {
            piece_captured: Some(Piece::new(Color::Black, PieceKind::Pawn)),
            is_en_passant: true,
            ..plain
        };
        assert_eq!(plain, annotated);

        let mut set = HashSet::new();
        set.insert(plain);
        assert!(set.contains(&annotated));
    }

    #[test]
    fn promotion_kind_is_part_of_identity() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let base = ChessMove::quiet(sq(1, 0), sq(0, 0), pawn);
        let queen = base.with_promotion(Some(PieceKind::Queen));
        let knight = base.with_promotion(Some(PieceKind::Knight));
        assert_ne!(queen, knight);
        assert_ne!(base, queen);
        assert_eq!(
            knight.piece_after_move(),
            Piece::new(Color::White, PieceKind::Knight)
        );
    }

    #[test]
    fn from_board_reads_moved_and_captured_pieces() {
        let board = crate::game_state::chess_types::GameState::new_game().board;
        let mv = ChessMove::from_board(&board, sq(6, 4), sq(4, 4)).expect("e2 has a pawn");
        assert_eq!(mv.piece_moved, Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(mv.piece_captured, None);
        assert!(mv.is_double_pawn_push());
        assert_eq!(mv.to_string(), "e2e4");

        assert!(matches!(
            ChessMove::from_board(&board, sq(4, 4), sq(3, 4)),
            Err(ChessErrors::NoPieceOnSquare(_))
        ));
    }
}
