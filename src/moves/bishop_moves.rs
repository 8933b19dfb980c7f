//! Diagonal ray tracing over the mailbox board.

use crate::game_state::chess_types::{Board, Square, SquareMask};
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_attacks(board: &Board, square: Square) -> SquareMask {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| {
            acc | trace_ray(board, square, d_row, d_col)
        })
}
