use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;

/// Pushes one move per square in `targets` that is empty or holds an enemy
/// piece. Friendly-occupied squares are skipped.
pub fn push_target_moves(
    game_state: &GameState,
    from: Square,
    mover: Piece,
    targets: SquareMask,
    out: &mut Vec<ChessMove>,
) {
    for to in mask_squares(targets) {
        match game_state.piece_at(to) {
            Some(occupant) if occupant.color == mover.color => {}
            captured => out.push(ChessMove {
                piece_captured: captured,
                ..ChessMove::quiet(from, to, mover)
            }),
        }
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, mover: Color, square: Square) -> Option<Piece> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.color != mover)
}
