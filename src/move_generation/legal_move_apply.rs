//! Move application and exact reversal.
//!
//! `make_move` is the checked entry point: it refuses anything outside the
//! current legal set and leaves the state untouched in that case.
//! `apply_move_unchecked`/`unmake_move` form the make/unmake pair used by
//! legality filtering and perft on scratch states.

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{castle_geometry, castle_right_for_rook_home};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::ChessMove;

/// Applies `mv` if its identity `(start, end, promotion)` matches a legal
/// move. The engine-generated move, with its capture and special-move
/// annotations, is what gets applied and returned.
pub fn make_move(game_state: &mut GameState, mv: ChessMove) -> Result<ChessMove, ChessErrors> {
    let Some(legal) = legal_moves(game_state).into_iter().find(|m| *m == mv) else {
        debug!("rejected illegal move {mv}");
        return Err(ChessErrors::IllegalMove(mv.to_string()));
    };

    apply_move_unchecked(game_state, legal);
    debug!("applied {legal}");
    Ok(legal)
}

/// Applies a generator-produced move without a legality check.
pub(crate) fn apply_move_unchecked(game_state: &mut GameState, mv: ChessMove) {
    let moving_color = mv.piece_moved.color;

    game_state.move_log.push(UndoState {
        mv,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    });

    // Move the piece, removing whatever it captures.
    game_state.board.clear(mv.start);
    if mv.is_en_passant {
        game_state.board.clear(mv.en_passant_victim_square());
    }
    game_state.board.place(mv.end, mv.piece_after_move());

    // Castling rook move.
    if let Some(side) = mv.castle {
        let geometry = castle_geometry(side);
        let row = mv.start.row();
        if let Some(rook) = game_state.board.clear(Square::at(row, geometry.rook_from_col)) {
            game_state
                .board
                .place(Square::at(row, geometry.rook_to_col), rook);
        }
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_locations[moving_color.index()] = mv.end;
    }

    update_castling_rights(game_state, &mv);

    game_state.en_passant_square = if mv.is_double_pawn_push() {
        Some(Square::at((mv.start.row() + mv.end.row()) / 2, mv.start.col()))
    } else {
        None
    };

    if mv.piece_moved.kind == PieceKind::Pawn || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
}

/// Pops the most recent log entry and reverses it exactly. Returns `None`
/// without touching the state when the log is empty.
pub fn unmake_move(game_state: &mut GameState) -> Option<ChessMove> {
    let undo = game_state.move_log.pop()?;
    let mv = undo.mv;
    let moving_color = mv.piece_moved.color;

    game_state.side_to_move = game_state.side_to_move.opposite();

    game_state.board.clear(mv.end);
    game_state.board.place(mv.start, mv.piece_moved);
    if let Some(captured) = mv.piece_captured {
        let capture_square = if mv.is_en_passant {
            mv.en_passant_victim_square()
        } else {
            mv.end
        };
        game_state.board.place(capture_square, captured);
    }

    if let Some(side) = mv.castle {
        let geometry = castle_geometry(side);
        let row = mv.start.row();
        if let Some(rook) = game_state.board.clear(Square::at(row, geometry.rook_to_col)) {
            game_state
                .board
                .place(Square::at(row, geometry.rook_from_col), rook);
        }
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_locations[moving_color.index()] = mv.start;
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;

    Some(mv)
}

fn update_castling_rights(game_state: &mut GameState, mv: &ChessMove) {
    let moving_color = mv.piece_moved.color;

    if mv.piece_moved.kind == PieceKind::King {
        game_state.castling_rights &= !(castle_right(moving_color, CastleSide::KingSide)
            | castle_right(moving_color, CastleSide::QueenSide));
    }

    if mv.piece_moved.kind == PieceKind::Rook {
        if let Some(right) = castle_right_for_rook_home(mv.start) {
            game_state.castling_rights &= !right;
        }
    }

    // Capturing a rook on its original square also removes the right.
    if let Some(right) = castle_right_for_rook_home(mv.end) {
        game_state.castling_rights &= !right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn play(game: &mut GameState, lans: &[&str]) {
        for lan in lans {
            let mv = long_algebraic_to_move(game, lan).expect("move is legal");
            make_move(game, mv).expect("move applies");
        }
    }

    #[test]
    fn illegal_move_leaves_state_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let e2 = Square::new(6, 4).expect("e2");
        let e5 = Square::new(3, 4).expect("e5");
        let mv = ChessMove::from_board(&game.board, e2, e5).expect("pawn on e2");

        let result = make_move(&mut game, mv);
        assert_eq!(result, Err(ChessErrors::IllegalMove("e2e5".to_owned())));
        assert_eq!(game, before);
    }

    #[test]
    fn unmake_on_empty_log_is_a_no_op() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(unmake_move(&mut game), None);
        assert_eq!(game, before);
    }

    #[test]
    fn castling_moves_rook_and_revokes_rights() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN parses");
        let before = game.clone();
        play(&mut game, &["e1g1"]);

        assert_eq!(game.get_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
        assert_eq!(game.king_location(Color::White), Square::new(7, 6).expect("g1"));
        assert!(game.last_move().is_some_and(|mv| mv.is_castle()));

        unmake_move(&mut game);
        assert_eq!(game, before);
    }

    #[test]
    fn rook_moves_and_rook_captures_revoke_matching_right() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN parses");
        play(&mut game, &["a1a8"]);
        // White loses queenside for moving the a1 rook, Black loses queenside
        // for losing the a8 rook.
        assert_eq!(game.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE);
    }

    #[test]
    fn promotion_places_chosen_piece_and_undo_restores_pawn() {
        let mut game = GameState::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parses");
        let before = game.clone();
        play(&mut game, &["a7b8n"]);

        let b8 = Square::new(0, 1).expect("b8");
        assert_eq!(game.piece_at(b8), Some(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(game.halfmove_clock, 0);

        unmake_move(&mut game);
        assert_eq!(game, before);
    }

    #[test]
    fn undo_restores_a_saturated_fullmove_number() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 65535").expect("FEN parses");
        let before = game.clone();
        play(&mut game, &["e8d8"]);
        assert_eq!(game.fullmove_number, u16::MAX);

        unmake_move(&mut game);
        assert_eq!(game.fullmove_number, u16::MAX);
        assert_eq!(game, before);
    }

    #[test]
    fn double_push_sets_en_passant_target_and_next_move_clears_it() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4"]);
        assert_eq!(game.en_passant_square, Some(Square::new(5, 4).expect("e3")));
        play(&mut game, &["g8f6"]);
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.fullmove_number, 2);
        assert_eq!(game.halfmove_clock, 1);
    }
}
