//! Pseudo-legal rook move generation.
//!
//! Each orthogonal ray ends at the first occupied square: included as a
//! capture when it holds an enemy piece, dropped when it holds a friendly one.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    mover: Piece,
    out: &mut Vec<ChessMove>,
) {
    push_target_moves(
        game_state,
        from,
        mover,
        rook_attacks(&game_state.board, from),
        out,
    );
}
