use crate::game_state::chess_types::{Board, Square, SquareMask};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(board: &Board, square: Square) -> SquareMask {
    bishop_attacks(board, square) | rook_attacks(board, square)
}
