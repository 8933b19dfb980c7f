//! Pseudo-legal pawn move generation.
//!
//! Covers single and double pushes, diagonal captures, en-passant captures
//! and promotion. A pawn reaching the last rank yields one move per entry of
//! `PROMOTION_CHOICES`.

use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::chess_move::ChessMove;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    mover: Piece,
    out: &mut Vec<ChessMove>,
) {
    let side = mover.color;
    let forward = side.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if game_state.board.is_empty(one_step) {
            push_pawn_move(ChessMove::quiet(from, one_step, mover), out);

            if from.row() == side.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if game_state.board.is_empty(two_step) {
                        out.push(ChessMove::quiet(from, two_step, mover));
                    }
                }
            }
        }
    }

    for to in mask_squares(pawn_attacks(side, from)) {
        if let Some(captured) = enemy_piece_on(game_state, side, to) {
            push_pawn_move(
                ChessMove {
                    piece_captured: Some(captured),
                    ..ChessMove::quiet(from, to, mover)
                },
                out,
            );
        } else if game_state.en_passant_square == Some(to) {
            let victim_square = Square::at(from.row(), to.col());
            match game_state.piece_at(victim_square) {
                Some(victim) if victim.color != side && victim.kind == PieceKind::Pawn => {
                    out.push(ChessMove {
                        piece_captured: Some(victim),
                        is_en_passant: true,
                        ..ChessMove::quiet(from, to, mover)
                    });
                }
                _ => {}
            }
        }
    }
}

fn push_pawn_move(mv: ChessMove, out: &mut Vec<ChessMove>) {
    if mv.end.row() == mv.piece_moved.color.promotion_row() {
        for promo in PROMOTION_CHOICES {
            out.push(mv.with_promotion(Some(promo)));
        }
    } else {
        out.push(mv);
    }
}
