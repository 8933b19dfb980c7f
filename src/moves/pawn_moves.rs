//! Pawn capture tables. White pawns advance toward row 0, Black toward row 7.

use crate::game_state::chess_types::{Color, Square, SquareMask};
use crate::moves::knight_moves::set_if_valid;

pub const WHITE_PAWN_ATTACKS: [SquareMask; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [SquareMask; 64] = generate_pawn_attacks(1);

/// Squares a pawn of `color` standing on `square` captures onto.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareMask {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

const fn generate_pawn_attacks(forward: i32) -> [SquareMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;

        table[sq] = set_if_valid(row + forward, col - 1) | set_if_valid(row + forward, col + 1);
        sq += 1;
    }

    table
}
