use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    mover: Piece,
    out: &mut Vec<ChessMove>,
) {
    push_target_moves(
        game_state,
        from,
        mover,
        bishop_attacks(&game_state.board, from),
        out,
    );
}
