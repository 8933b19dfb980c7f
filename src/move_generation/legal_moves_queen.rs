use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    mover: Piece,
    out: &mut Vec<ChessMove>,
) {
    push_target_moves(
        game_state,
        from,
        mover,
        queen_attacks(&game_state.board, from),
        out,
    );
}
