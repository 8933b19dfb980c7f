//! Attack and check detection.
//!
//! Attacks are computed backwards from the target square: a square is
//! attacked by `attacker_color` when a piece of that color sits where the
//! matching piece pattern, traced from the target, would land. Pawn pushes
//! never attack, and castling is never considered.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_location(color), color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    attack_sources(game_state, square, attacker_color)
        .next()
        .is_some()
}

/// Squares of the enemy pieces currently giving check to `color`'s king.
pub fn checkers(game_state: &GameState, color: Color) -> Vec<Square> {
    attack_sources(game_state, game_state.king_location(color), color.opposite()).collect()
}

fn attack_sources(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
) -> impl Iterator<Item = Square> + '_ {
    let board = &game_state.board;
    let holds = move |sq: &Square, kinds: &[PieceKind]| -> bool {
        matches!(board.piece_at(*sq), Some(p) if p.color == attacker_color && kinds.contains(&p.kind))
    };

    // A pawn of `attacker_color` attacks `square` from the squares a pawn of
    // the other color on `square` would capture onto.
    let pawns = mask_squares(pawn_attacks(attacker_color.opposite(), square))
        .filter(move |sq| holds(sq, &[PieceKind::Pawn]));
    let knights =
        mask_squares(knight_attacks(square)).filter(move |sq| holds(sq, &[PieceKind::Knight]));
    let kings = mask_squares(king_attacks(square)).filter(move |sq| holds(sq, &[PieceKind::King]));
    let diagonals = mask_squares(bishop_attacks(board, square))
        .filter(move |sq| holds(sq, &[PieceKind::Bishop, PieceKind::Queen]));
    let orthogonals = mask_squares(rook_attacks(board, square))
        .filter(move |sq| holds(sq, &[PieceKind::Rook, PieceKind::Queen]));

    pawns
        .chain(knights)
        .chain(kings)
        .chain(diagonals)
        .chain(orthogonals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square parses")
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN parses");
        assert!(is_square_attacked(&game, sq("d3"), Color::White));
        assert!(is_square_attacked(&game, sq("f3"), Color::White));
        assert!(!is_square_attacked(&game, sq("e3"), Color::White));
        assert!(!is_square_attacked(&game, sq("e4"), Color::White));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/4N3/4R1K1 b - - 0 1").expect("FEN parses");
        assert!(is_square_attacked(&game, sq("e2"), Color::White));
        assert!(!is_square_attacked(&game, sq("e3"), Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
    }

    #[test]
    fn checkers_lists_every_attacker_of_the_king() {
        let game =
            GameState::from_fen("4k3/8/3N4/8/8/8/8/4R1K1 b - - 0 1").expect("FEN parses");
        let mut found = checkers(&game, Color::Black);
        found.sort();
        let mut expected = vec![sq("d6"), sq("e1")];
        expected.sort();
        assert_eq!(found, expected);
        assert!(is_king_in_check(&game, Color::Black));
        assert!(!is_king_in_check(&game, Color::White));
    }
}
