//! Side-level pseudo-legal generation and the generator seam.
//!
//! Pseudo-legal generation dispatches on the closed set of piece kinds; the
//! `MoveGenerator` trait is the seam perft and tooling use to obtain legal
//! move lists.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<ChessMove>;
}

/// Pseudo-legal moves of the piece on `from`. Empty squares yield nothing.
pub fn generate_piece_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(mover) = game_state.piece_at(from) else {
        return;
    };

    match mover.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, mover, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, mover, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, mover, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, mover, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, mover, out),
        PieceKind::King => generate_king_moves(game_state, from, mover, out),
    }
}

/// Union of pseudo-legal moves over every piece of the side to move.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut pseudo = Vec::<ChessMove>::with_capacity(128);
    for (from, _) in game_state.board.squares_of(game_state.side_to_move) {
        generate_piece_moves(game_state, from, &mut pseudo);
    }
    pseudo
}
