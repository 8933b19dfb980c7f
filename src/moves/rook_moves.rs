//! Orthogonal ray tracing over the mailbox board.

use crate::game_state::chess_types::{square_bit, Board, Square, SquareMask};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares reached along the four orthogonal rays. Each ray includes the
/// first occupied square it meets, whatever its color, and stops there.
#[inline]
pub fn rook_attacks(board: &Board, square: Square) -> SquareMask {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| {
            acc | trace_ray(board, square, d_row, d_col)
        })
}

pub(crate) fn trace_ray(board: &Board, square: Square, d_row: i8, d_col: i8) -> SquareMask {
    let mut attacks = 0u64;
    let mut current = square.offset(d_row, d_col);

    while let Some(target) = current {
        attacks |= square_bit(target);

        if !board.is_empty(target) {
            break;
        }

        current = target.offset(d_row, d_col);
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::chess_types::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).expect("test square on board")
    }

    #[test]
    fn rook_rays_from_d4_on_empty_board_have_fourteen_squares() {
        let board = Board::new_empty();
        assert_eq!(rook_attacks(&board, sq(4, 3)).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::new_empty();
        let a1 = sq(7, 0);
        let a4 = sq(4, 0);
        board.place(a4, Piece::new(Color::Black, PieceKind::Knight));

        let attacks = rook_attacks(&board, a1);
        assert_ne!(attacks & square_bit(a4), 0);
        assert_eq!(attacks & square_bit(sq(3, 0)), 0);
    }
}
