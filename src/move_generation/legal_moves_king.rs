//! Pseudo-legal king move generation, including castling.
//!
//! Castling is the one place where generation consults attack information:
//! the king may not castle out of, through, or into an attacked square.

use crate::game_state::chess_rules::{castle_geometry, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    mover: Piece,
    out: &mut Vec<ChessMove>,
) {
    push_target_moves(game_state, from, mover, king_attacks(from), out);
    generate_castling_moves(game_state, from, mover, out);
}

fn generate_castling_moves(
    game_state: &GameState,
    king_from: Square,
    mover: Piece,
    out: &mut Vec<ChessMove>,
) {
    let side = mover.color;
    let home_row = side.home_row();
    if king_from != Square::at(home_row, KING_HOME_COL) {
        return;
    }

    for castle_side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !game_state.has_castle_right(castle_right(side, castle_side)) {
            continue;
        }

        let geometry = castle_geometry(castle_side);
        let rook_square = Square::at(home_row, geometry.rook_from_col);
        if game_state.piece_at(rook_square) != Some(Piece::new(side, PieceKind::Rook)) {
            continue;
        }

        let path_is_clear = geometry
            .between_cols
            .iter()
            .all(|&col| game_state.board.is_empty(Square::at(home_row, col)));
        if !path_is_clear {
            continue;
        }

        let path_is_safe = geometry
            .king_path_cols
            .iter()
            .all(|&col| !is_square_attacked(game_state, Square::at(home_row, col), side.opposite()));
        if !path_is_safe {
            continue;
        }

        out.push(ChessMove {
            castle: Some(castle_side),
            ..ChessMove::quiet(king_from, Square::at(home_row, geometry.king_to_col), mover)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::long_algebraic::move_to_long_algebraic;

    fn castles(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("test FEN parses");
        let from = game.king_location(game.side_to_move);
        let mover = game.piece_at(from).expect("king on tracked square");
        let mut out = Vec::new();
        generate_king_moves(&game, from, mover, &mut out);
        let mut lans: Vec<String> = out
            .iter()
            .filter(|mv| mv.is_castle())
            .map(move_to_long_algebraic)
            .collect();
        lans.sort();
        lans
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
            vec!["e1c1", "e1g1"]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"),
            vec!["e8c8", "e8g8"]
        );
    }

    #[test]
    fn occupied_squares_block_castling() {
        assert_eq!(castles("4k3/8/8/8/8/8/8/R3K1NR w KQ - 0 1"), vec!["e1c1"]);
        assert_eq!(castles("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1"), vec!["e1g1"]);
        assert_eq!(castles("r3k1nr/8/8/8/8/8/8/4K3 b kq - 0 1"), vec!["e8c8"]);
        assert_eq!(castles("r3kb1r/8/8/8/8/8/8/4K3 b kq - 0 1"), vec!["e8c8"]);
    }

    #[test]
    fn missing_right_blocks_castling() {
        assert_eq!(castles("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1"), vec!["e1c1"]);
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
    }

    #[test]
    fn attacked_path_blocks_castling() {
        // Black rook on f8 covers f1.
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["e1c1"]);
        // Black rook on e8 gives check: no castling at all.
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        // White rook on f1 covers f8.
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/4KR2 b kq - 0 1"), vec!["e8c8"]);
        // An attacked b1 does not matter: the king never crosses it.
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1"),
            vec!["e1c1", "e1g1"]
        );
    }
}
