//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal candidates, plays each one on a scratch copy,
//! drops those that leave the mover's king attacked, and derives
//! checkmate/stalemate from the result.

use log::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move_unchecked, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{generate_pseudo_legal_moves, MoveGenerator};
use crate::moves::chess_move::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<ChessMove> {
        legal_moves(game_state)
    }
}

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

pub fn legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut scratch = game_state.clone();
    legal_moves_in_place(&mut scratch)
}

/// Legal moves computed by make/unmake directly on `game_state`, which is
/// restored before returning.
pub fn legal_moves_in_place(game_state: &mut GameState) -> Vec<ChessMove> {
    let mover = game_state.side_to_move;
    let pseudo = generate_pseudo_legal_moves(game_state);
    let mut legal = Vec::<ChessMove>::with_capacity(pseudo.len());

    for mv in pseudo {
        apply_move_unchecked(game_state, mv);
        if !is_king_in_check(game_state, mover) {
            legal.push(mv);
        }
        unmake_move(game_state);
    }

    trace!("{} legal moves for {:?}", legal.len(), mover);
    legal
}

pub fn is_checkmate(game_state: &GameState) -> bool {
    game_status(game_state) == GameStatus::Checkmate
}

pub fn is_stalemate(game_state: &GameState) -> bool {
    game_status(game_state) == GameStatus::Stalemate
}

pub fn game_status(game_state: &GameState) -> GameStatus {
    let in_check = is_king_in_check(game_state, game_state.side_to_move);
    let has_moves = !legal_moves(game_state).is_empty();
    match (in_check, has_moves) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(LegalMoveGenerator.generate_legal_moves(&game).len(), 20);
        assert_eq!(game_status(&game), GameStatus::Ongoing);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        let game =
            GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN parses");
        let e2 = Square::new(6, 4).expect("e2");
        assert!(legal_moves(&game).iter().all(|mv| mv.start != e2));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1").expect("FEN parses");
        // The a2 rook covers the whole second rank.
        let moves = legal_moves(&game);
        assert!(moves.iter().all(|mv| mv.end.row() == 7));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn in_place_generation_restores_the_state() {
        let mut game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN parses");
        let before = game.clone();
        assert_eq!(legal_moves_in_place(&mut game).len(), 48);
        assert_eq!(game, before);
    }

    #[test]
    fn check_is_reported_while_moves_remain() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("FEN parses");
        assert_eq!(game_status(&game), GameStatus::Check);
        assert!(!is_checkmate(&game));
        assert!(!is_stalemate(&game));
    }
}
