//! Move-log entries consumed by `unmake_move`.

use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;

/// Single move-log entry: the applied move plus the state it cannot recover
/// by itself on `unmake_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
