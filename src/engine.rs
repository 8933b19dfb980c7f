//! Engine-facing boundary for UI and network layers.
//!
//! Every function takes the `GameState` explicitly; the engine keeps no
//! state of its own. Callers sharing a state between threads must serialize
//! `try_move`/`undo` themselves.

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::engine_config::EngineConfig;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::long_algebraic::move_to_long_algebraic;

pub use crate::move_generation::legal_move_checks::checkers;
pub use crate::move_generation::legal_move_generator::{
    game_status, is_checkmate, is_stalemate, legal_moves, GameStatus,
};

/// Standard initial position, White to move.
pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Looks up the legal move `from -> to` (with `promotion` when promoting)
/// and applies it, using the default `EngineConfig`.
pub fn try_move(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<ChessMove, ChessErrors> {
    try_move_with_config(game_state, from, to, promotion, &EngineConfig::default())
}

/// `try_move` for raw `(row, col)` coordinates, as produced by UI clicks.
pub fn try_move_at(
    game_state: &mut GameState,
    from: (i8, i8),
    to: (i8, i8),
    promotion: Option<PieceKind>,
) -> Result<ChessMove, ChessErrors> {
    let from = Square::new(from.0, from.1)?;
    let to = Square::new(to.0, to.1)?;
    try_move(game_state, from, to, promotion)
}

pub fn try_move_with_config(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    config: &EngineConfig,
) -> Result<ChessMove, ChessErrors> {
    let candidates: Vec<ChessMove> = legal_moves(game_state)
        .into_iter()
        .filter(|mv| mv.start == from && mv.end == to)
        .collect();

    let is_promotion = candidates.iter().any(|mv| mv.promotion.is_some());
    let wanted = if is_promotion {
        promotion.or(config.default_promotion)
    } else {
        promotion
    };

    let Some(chosen) = candidates.into_iter().find(|mv| mv.promotion == wanted) else {
        let request = describe_request(from, to, promotion);
        debug!("rejected illegal move {request}");
        return Err(ChessErrors::IllegalMove(request));
    };

    make_move(game_state, chosen)
}

/// Reverts the most recent move. Returns `false` when there was nothing
/// to undo.
pub fn undo(game_state: &mut GameState) -> bool {
    match unmake_move(game_state) {
        Some(mv) => {
            debug!("undid {mv}");
            true
        }
        None => false,
    }
}

pub fn in_check(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(game_state, color)
}

/// Coordinate notation, e.g. `"e2e4"` or `"e7e8q"`.
pub fn notation(mv: &ChessMove) -> String {
    move_to_long_algebraic(mv)
}

fn describe_request(from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let mut out = square_to_algebraic(from);
    out.push_str(&square_to_algebraic(to));
    if let Some(kind) = promotion {
        out.push(kind.to_char());
    }
    out
}
