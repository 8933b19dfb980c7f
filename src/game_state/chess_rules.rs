//! Canonical chess-rule constants.
//!
//! Starting position, castling geometry and the promotion choices offered to
//! a pawn reaching the last rank.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Every piece a pawn may promote to, in the order they are generated.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub const KING_HOME_COL: u8 = 4;

/// Column-level layout of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub rook_from_col: u8,
    pub rook_to_col: u8,
    pub king_to_col: u8,
    /// Columns strictly between king and rook; all must be empty.
    pub between_cols: &'static [u8],
    /// Columns the king stands on, crosses, or lands on; none may be attacked.
    pub king_path_cols: &'static [u8],
}

pub const KINGSIDE: CastleGeometry = CastleGeometry {
    rook_from_col: 7,
    rook_to_col: 5,
    king_to_col: 6,
    between_cols: &[5, 6],
    king_path_cols: &[4, 5, 6],
};

pub const QUEENSIDE: CastleGeometry = CastleGeometry {
    rook_from_col: 0,
    rook_to_col: 3,
    king_to_col: 2,
    between_cols: &[1, 2, 3],
    king_path_cols: &[4, 3, 2],
};

#[inline]
pub const fn castle_geometry(side: CastleSide) -> &'static CastleGeometry {
    match side {
        CastleSide::KingSide => &KINGSIDE,
        CastleSide::QueenSide => &QUEENSIDE,
    }
}

/// Castling right lost when a rook leaves, or is captured on, `square`.
pub fn castle_right_for_rook_home(square: Square) -> Option<CastlingRights> {
    for color in [Color::White, Color::Black] {
        if square.row() != color.home_row() {
            continue;
        }
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if square.col() == castle_geometry(side).rook_from_col {
                return Some(castle_right(color, side));
            }
        }
    }
    None
}
