use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    mover: Piece,
    out: &mut Vec<ChessMove>,
) {
    push_target_moves(game_state, from, mover, knight_attacks(from), out);
}
